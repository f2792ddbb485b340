use std::path::PathBuf;

pub fn fixture(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

#[allow(dead_code)]
pub fn fixture_text(file: &str) -> String {
    std::fs::read_to_string(fixture(file)).expect("failed to read fixture")
}
