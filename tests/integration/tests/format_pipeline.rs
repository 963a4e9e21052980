//! End-to-end extraction tests
//!
//! Runs realistic documents of every supported format through the public
//! `convert` entry point and the configurable `Converter`.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use rstest::rstest;
use spelltext_convert::{
    CollectingSink, Converter, ConverterConfig, FileType, Notice, SUPPORTED_EXTENSIONS, convert,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/formats")
}

fn fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).expect("Failed to read fixture")
}

/// Converts a fixture using the tag derived from its extension.
fn convert_fixture(name: &str) -> String {
    let config = ConverterConfig::new();
    let texttype = config
        .texttype_for(name)
        .expect("fixture must have an extension");
    convert(&fixture(name), &texttype).expect("conversion failed")
}

mod markup {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn html_drops_code_and_literals() {
        let text = convert_fixture("page.html");

        assert!(text.contains("Release notes"));
        assert!(text.contains("before publishing."));
        for misspelling in ["colr", "teh", "spltxt", "chek", "mian"] {
            assert!(!text.contains(misspelling), "leaked `{misspelling}`: {text}");
        }
    }

    #[test]
    fn rst_drops_literal_blocks() {
        let text = convert_fixture("manual.rst");

        assert!(text.contains("This manual explains the basics."));
        assert!(text.contains("to compile."));
        assert!(!text.contains("vlaue"));
        assert!(!text.contains("biuld"));
    }

    #[test]
    fn notebook_keeps_only_markdown_cells() {
        let text = convert(&fixture("guide.ipynb"), "ipynb").unwrap();

        assert!(text.contains("Getting started"));
        assert!(text.contains("Load the dataset first."));
        assert!(text.contains("Then plot the results."));
        assert!(!text.contains("pandas"));
        assert!(!text.contains('*'));
    }

    #[test]
    fn markdown_aliases_agree() {
        let source = "Some *emphasis* and `cod`.\n";

        assert_eq!(convert(source, "md").unwrap(), convert(source, "markdown").unwrap());
    }
}

mod translation_exports {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn xliff_targets_in_document_order() {
        let text = convert(&fixture("messages.xlf"), "xliff").unwrap();

        assert_eq!(text, "Enregistrer le fichier\n\nPoisson & frites\n\n");
    }

    #[test]
    fn transifex_values_in_document_order() {
        let source = r#"{
            "menu": { "open": "Open", "close": "Close" },
            "dialog": { "confirm": "Are you sure?" }
        }"#;

        assert_eq!(convert(source, "json").unwrap(), "Open\nClose\nAre you sure?\n");
    }

    #[test]
    fn properties_fixture() {
        assert_eq!(
            convert_fixture("strings.properties"),
            "\nMain window\n\nSpaced value\n\nAbout this application\n\n"
        );
    }
}

mod message_catalogs {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn m_catalog_fixture() {
        assert_eq!(
            convert_fixture("catalog.m"),
            "Opened {s}\n\nFound {d} matches in {g} seconds\n\nNo number here\n\n"
        );
    }

    #[test]
    fn tkmsg_catalog_fixture() {
        assert_eq!(convert_fixture("dialogs.tkmsg"), "Proceed\n\nQuit now\n\n");
    }

    #[test]
    fn placeholder_rewrites_are_reported() {
        let sink = Arc::new(CollectingSink::new());
        let converter = Converter::new().with_sink(sink.clone());

        converter.convert(&fixture("catalog.m"), "m").unwrap();

        let lines: Vec<usize> = sink
            .notices()
            .into_iter()
            .filter_map(|notice| match notice {
                Notice::PlaceholderRewrite { line, .. } => Some(line),
                _ => None,
            })
            .collect();
        assert_eq!(lines, [1, 3]);
    }
}

mod line_alignment {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case::properties("strings.properties", "properties")]
    #[case::m("catalog.m", "m")]
    #[case::tkmsg("dialogs.tkmsg", "tkmsg")]
    fn output_has_one_line_per_input_line(#[case] name: &str, #[case] texttype: &str) {
        let source = fixture(name);
        let text = convert(&source, texttype).unwrap();

        assert_eq!(text.split('\n').count(), source.split('\n').count() + 1);
        assert!(FileType::from_tag(texttype).unwrap().is_line_aligned());
    }
}

mod dispatch {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_supported_tag_is_registered() {
        let converter = Converter::new();

        for tag in SUPPORTED_EXTENSIONS {
            assert!(converter.extractor_for(tag).is_some(), "`{tag}` not registered");
        }
    }

    #[test]
    fn unknown_tag_is_identity_with_notice() {
        let sink = Arc::new(CollectingSink::new());
        let converter = Converter::new().with_sink(sink.clone());
        let source = "%PDF-1.7 binary-ish text\n";

        assert_eq!(converter.convert(source, "pdf").unwrap(), source);
        assert_eq!(
            sink.notices(),
            [Notice::UnknownFileType {
                texttype: "pdf".to_string()
            }]
        );
    }

    #[test]
    fn config_file_changes_exclusions() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(".spelltext.json");
        fs::write(
            &path,
            r#"{ "html": { "skipTags": ["script", "style"], "skipClasses": [] } }"#,
        )
        .unwrap();

        assert_eq!(ConverterConfig::discover(temp_dir.path()), Some(path.clone()));
        let config = ConverterConfig::from_file(&path).unwrap();
        let text = Converter::with_config(&config)
            .convert(&fixture("page.html"), "html")
            .unwrap();

        assert!(text.contains("spltxt --chek"));
        assert!(text.contains("fn mian() {}"));
        assert!(!text.contains("teh"));
    }
}
