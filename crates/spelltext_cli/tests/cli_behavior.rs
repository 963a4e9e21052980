//! Integration tests for CLI behavior
//!
//! These tests verify the external behavior of the CLI tool,
//! following behavior-driven testing principles.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a command for the spelltext CLI
fn spelltext_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_spelltext"))
}

/// Helper to get fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        spelltext_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        spelltext_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod types_command {
    use super::*;

    #[test]
    fn lists_every_tag() {
        let mut assert = spelltext_cmd().arg("types").assert().success();

        for tag in ["txt", "html", "md, markdown", "rst", "ipynb", "json", "xliff", "properties", "tkmsg"] {
            assert = assert.stdout(predicate::str::contains(tag));
        }
    }
}

mod convert_command {
    use super::*;

    #[test]
    fn converts_properties_keeping_lines() {
        spelltext_cmd()
            .arg("convert")
            .arg(fixtures_dir().join("sample.properties"))
            .assert()
            .success()
            .stdout("\nSpelltext\n\n\nHello there\n\n\n");
    }

    #[test]
    fn converts_message_catalog() {
        spelltext_cmd()
            .arg("convert")
            .arg(fixtures_dir().join("sample.m"))
            .assert()
            .success()
            .stdout("\nOpening {s} for reading\nSaved {d} files in {s}\n\n\n");
    }

    #[test]
    fn verbose_reports_placeholder_rewrites() {
        spelltext_cmd()
            .arg("--verbose")
            .arg("convert")
            .arg(fixtures_dir().join("sample.m"))
            .assert()
            .success()
            .stderr(predicate::str::contains("rewrote placeholder directives"));
    }

    #[test]
    fn converts_tk_message_catalog() {
        spelltext_cmd()
            .arg("convert")
            .arg(fixtures_dir().join("sample.tkmsg"))
            .assert()
            .success()
            .stdout("Preferences\n\nClose window\n\n");
    }

    #[test]
    fn converts_xliff_skipping_missing_targets() {
        spelltext_cmd()
            .arg("convert")
            .arg(fixtures_dir().join("sample.xliff"))
            .assert()
            .success()
            .stdout("Hallo\n\nAuf Wiedersehen\n\n");
    }

    #[test]
    fn converts_transifex_json() {
        spelltext_cmd()
            .arg("convert")
            .arg(fixtures_dir().join("sample.json"))
            .assert()
            .success()
            .stdout("Hello\nWorld\n");
    }

    #[test]
    fn converts_markdown_without_code() {
        spelltext_cmd()
            .arg("convert")
            .arg(fixtures_dir().join("sample.md"))
            .assert()
            .success()
            .stdout(predicate::str::contains("This paragraph is prose."))
            .stdout(predicate::str::contains("instal").not());
    }

    #[test]
    fn explicit_type_overrides_extension() {
        spelltext_cmd()
            .arg("convert")
            .arg(fixtures_dir().join("sample.tkmsg"))
            .args(["--type", "m"])
            .assert()
            .success()
            .stdout("!Preferences\nMissing marker\n!Close window\n\n");
    }

    #[test]
    fn unknown_type_passes_through_with_notice() {
        spelltext_cmd()
            .arg("convert")
            .arg(fixtures_dir().join("sample.pdf"))
            .assert()
            .success()
            .stdout("Just some text.\n")
            .stderr(predicate::str::contains(
                "filetype not detected, assuming plaintext",
            ));
    }

    #[test]
    fn quiet_suppresses_notice() {
        spelltext_cmd()
            .arg("--quiet")
            .arg("convert")
            .arg(fixtures_dir().join("sample.pdf"))
            .assert()
            .success()
            .stdout("Just some text.\n")
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn reads_stdin() {
        spelltext_cmd()
            .args(["convert", "-", "--type", "properties"])
            .write_stdin("greeting = Hello\n# comment")
            .assert()
            .success()
            .stdout("Hello\n\n");
    }

    #[test]
    fn writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("out.txt");

        spelltext_cmd()
            .arg("convert")
            .arg(fixtures_dir().join("sample.json"))
            .arg("--output")
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        assert_eq!(fs::read_to_string(out).unwrap(), "Hello\nWorld\n");
    }

    #[test]
    fn malformed_json_fails() {
        spelltext_cmd()
            .args(["convert", "-", "--type", "json"])
            .write_stdin("{\"cat\": ")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid JSON"));
    }

    #[test]
    fn missing_input_fails() {
        spelltext_cmd()
            .arg("convert")
            .arg("nonexistent_file.properties")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Failed to read"));
    }
}

mod config_file {
    use super::*;

    #[test]
    fn discovers_config_in_working_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".spelltext.jsonc"),
            r#"{
                // ids are not prose
                "properties": { "excludedSuffixes": [".id"] },
                "extensions": { "strings": "properties" }
            }"#,
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("app.strings"),
            "button.id = okBtn\nmsg.notrans = Now spellchecked\n",
        )
        .unwrap();

        spelltext_cmd()
            .current_dir(temp_dir.path())
            .args(["convert", "app.strings"])
            .assert()
            .success()
            .stdout("\nNow spellchecked\n\n");
    }

    #[test]
    fn rejects_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("bad.jsonc");
        fs::write(&config, r#"{ "unknown": true }"#).unwrap();

        spelltext_cmd()
            .arg("--config")
            .arg(&config)
            .arg("convert")
            .arg(fixtures_dir().join("sample.json"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Config validation failed"));
    }
}
