use std::env;
use std::fs;
use std::path::Path;

const HINT_VAR: &str = "ENDPOINT_CATALOG_HINT";

// Bakes a default catalog directory into the binary. Hints that do not point
// at a directory of component documents are dropped with a build warning.
fn main() {
    println!("cargo:rerun-if-env-changed={HINT_VAR}");

    let Some(raw) = env::var(HINT_VAR).ok().filter(|raw| !raw.trim().is_empty()) else {
        return;
    };
    let dir = Path::new(raw.trim());
    let documents = fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
                .count()
        })
        .unwrap_or(0);
    if documents == 0 {
        println!(
            "cargo:warning={HINT_VAR}={} holds no component documents; ignoring it",
            dir.display()
        );
        return;
    }

    let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    println!("cargo:rerun-if-changed={}", canonical.display());
    println!("cargo:rustc-env={HINT_VAR}={}", canonical.display());
}
