pub mod highlight;
pub mod rest;

use std::path::Path;

use serde::de::DeserializeOwned;

/// Read and parse a JSON file, naming the file in any error.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid JSON in '{}': {e}", path.display()))
}
