//! Build script to generate embedded word lists
//!
//! Reads the hardcoded list files under `data/` and generates Rust source with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/fallback.txt",
        &Path::new(&out_dir).join("fallback.rs"),
        "FALLBACK_WORDS",
        "Known-good Portuguese 5-letter words used when live sources cannot supply a solution",
    );

    generate_word_list(
        "data/denylist_additions.txt",
        &Path::new(&out_dir).join("denylist_additions.rs"),
        "DENYLIST_ADDITIONS",
        "Tokens always excluded from the dictionary, on top of the fetched denylist",
    );

    generate_word_list(
        "data/denylist_exemptions.txt",
        &Path::new(&out_dir).join("denylist_exemptions.rs"),
        "DENYLIST_EXEMPTIONS",
        "Tokens removed from the fetched denylist",
    );

    println!("cargo:rerun-if-changed=data/fallback.txt");
    println!("cargo:rerun-if-changed=data/denylist_additions.txt");
    println!("cargo:rerun-if-changed=data/denylist_exemptions.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
