//! Embeds every `lang/*.json` catalog file into the binary.
//! Generates `$OUT_DIR/lang_data.rs` providing `EMBEDDED_LANGS: &[(&str, &str)]`.
use std::{env, fs, path::PathBuf};

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let lang_dir = manifest_dir.join("lang");
    println!("cargo:rerun-if-changed={}", lang_dir.display());

    let mut entries: Vec<(String, PathBuf)> = fs::read_dir(&lang_dir)
        .expect("read lang/ directory")
        .map(|e| e.expect("read lang/ entry").path())
        .filter(|p| p.extension().map(|x| x == "json").unwrap_or(false))
        .filter_map(|p| {
            let code = p.file_stem()?.to_str()?.to_string();
            Some((code, p))
        })
        .collect();
    // stable order so the generated table doesn't churn between builds
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = String::from("pub static EMBEDDED_LANGS: &[(&str, &str)] = &[\n");
    for (code, path) in &entries {
        println!("cargo:rerun-if-changed={}", path.display());
        out.push_str(&format!("    ({:?}, include_str!({:?})),\n", code, path.display().to_string()));
    }
    out.push_str("];\n");

    let out_path = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR")).join("lang_data.rs");
    fs::write(out_path, out).expect("write lang_data.rs");
}
