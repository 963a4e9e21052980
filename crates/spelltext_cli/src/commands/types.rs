//! Types command implementation

use spelltext_convert::FileType;

pub fn run_types() {
    println!("{:<20} | {:<20} | {}", "Tags", "Format", "Line aligned");
    println!("{:-<20}-+-{:-<20}-+-{:-<12}", "", "", "");

    for file_type in FileType::ALL {
        println!(
            "{:<20} | {:<20} | {}",
            file_type.tags().join(", "),
            file_type.name(),
            if file_type.is_line_aligned() { "yes" } else { "no" }
        );
    }
}
