use std::{fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=README.md");
    let readme = fs::read_to_string("README.md").unwrap();
    let output = PathBuf::from(std::env::var("OUT_DIR").unwrap()).join("README-lib.md");
    fs::write(output, prepare(&readme)).unwrap();
}

fn prepare(readme: &str) -> String {
    // Keep it simple:
    // 1. Strip the title line (rustdoc supplies the crate name)
    // 2. Replace feature examples with ignore flags (they depend on feature flags)
    let mut cleaned = String::new();
    let mut body = false;
    let mut feature_section = false;
    for line in readme.lines() {
        if !body {
            if line.starts_with("# ") {
                body = true;
            }
            continue;
        }

        if feature_section && line.starts_with("```rust") {
            cleaned.push_str("```ignore");
        } else {
            if !feature_section && line.starts_with("## Features") {
                feature_section = true;
            }
            cleaned.push_str(line);
        }
        cleaned.push('\n');
    }
    cleaned
}
