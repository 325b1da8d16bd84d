use chore_core::{TodoFile, TodoFileBuilder};
use tempfile::TempDir;

/// Helper function to create a todo file inside a fresh temporary directory
pub fn create_test_file(name: &str) -> (TempDir, TodoFile) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = TodoFileBuilder::new()
        .with_path(Some(temp_dir.path().join(name)))
        .build()
        .expect("Failed to resolve todo file");
    (temp_dir, file)
}
