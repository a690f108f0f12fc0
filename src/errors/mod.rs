use std::path::Path;

/// Add context to file read errors
pub fn load_context(path: &Path) -> String {
    format!("Failed to read from: {}", path.display())
}

/// Add context to parse errors
pub fn parse_context(data_type: &str, path: &Path) -> String {
    format!("Failed to parse {} from {}", data_type, path.display())
}

/// Add context to store errors
pub fn store_context(operation: &str, key: &str) -> String {
    format!("Failed to {} store entry: {}", operation, key)
}
