use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    // Place config.toml next to the produced binary so the exe-relative
    // lookup in shared::config finds it during local runs.
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("could not locate target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("could not locate workspace root");

    let source = workspace_root.join("config.toml");
    if source.exists() {
        let dest = target_dir.join("config.toml");
        fs::copy(&source, &dest).unwrap_or_else(|e| panic!("failed to copy config.toml: {}", e));
    }
}
