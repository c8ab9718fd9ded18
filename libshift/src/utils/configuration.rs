//! Loading configuration files using [serde_yaml_ng].

use std::fs;
use std::path;
use serde::{Serialize, Deserialize};


fn deserialize_file<T: for<'a> Deserialize<'a>>(path: &path::Path) -> Result<T, String> {
    let raw = fs::read(path)
        .map_err(|e| format!("unable to read {} ({})", path.to_string_lossy(), e))?;
    return deserialize_slice(&raw);
}

fn deserialize_slice<T: for<'a> Deserialize<'a>>(raw: &[u8]) -> Result<T, String> {
    return serde_yaml_ng::from_slice(raw)
        .map_err(|e| e.to_string());
}

/// Print config files to stdout
pub fn print_config(config: &impl Serialize) {
    match serde_yaml_ng::to_string(config) {
        Ok(ser) => println!("{}", ser),
        Err(e) => tracing::error!("unable to serialize configuration: {}", e),
    }
}

/// Read config file from a direct path
///
/// * `path` - The whole path to the config file
pub fn read_file<T: for<'a> Deserialize<'a>>(path: &path::Path) -> Result<T, String> {
    if path.is_file() {
        deserialize_file(path)
    } else {
        Err(format!("configuration {} not found", path.to_string_lossy()))
    }
}

/// Read config file
///
/// * `config_name` - The name of the applications configuration subdirectory
/// * `file_name` - The file name (with extension)
pub fn read_config_file<T: for<'a> Deserialize<'a>>(config_name: &str, file_name: &str) -> Result<T, String> {
    let config_dir = xdg::BaseDirectories::with_prefix(config_name)
        .map_err(|e| format!("unable to open config dir ({})", e))?;
    if let Some(path) = config_dir.find_config_file(file_name) {
        deserialize_file(&path)
    } else {
        Err(format!("configuration {} not found", file_name))
    }
}
