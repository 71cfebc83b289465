use std::{env, fs, path::Path};
use std::io::{BufRead, BufReader};

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("prohibited_data.rs");

    // Default prohibited-password list, one entry per line
    let data_file = "data/prohibited.txt";
    let file = fs::File::open(data_file).expect("Failed to open data file");
    let reader = BufReader::new(file);

    let mut entries = Vec::new();

    for line in reader.lines() {
        let line = line.expect("Error reading line");
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }

        entries.push(format!("\"{}\"", entry.to_lowercase()));
    }

    let code = format!(
        r#"pub static DEFAULT_PROHIBITED: [&str; {}] = [{}];"#,
        entries.len(),
        entries.join(", ")
    );

    fs::write(dest_path, code).expect("Failed to write generated file");

    println!("cargo:rerun-if-changed={}", data_file);
}
