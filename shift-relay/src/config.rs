use serde::{Serialize, Deserialize};
use libshift::utils::configuration::read_config_file;


const CONFIG_DIR: &str = "shiftwin";
const CONFIG_FILE: &str = "shiftwin.yaml";
const DEFAULT_LOG_FILTER: &str = "warn";


#[derive(Serialize,Deserialize,PartialEq,Debug,Clone)]
#[serde(default)]
pub struct Configuration {
    /// X display to connect to (defaults to `$DISPLAY`)
    pub display: Option<String>,
    /// Filter directives for diagnostics written to stderr
    pub log_filter: String,
}


impl Default for Configuration {
    fn default() -> Self {
        return Configuration {
            display: None,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        };
    }
}


pub fn read_config() -> Result<Configuration, String> {
    return read_config_file(CONFIG_DIR, CONFIG_FILE);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: Configuration = serde_yaml_ng::from_str("display: \":1\"\n").unwrap();
        assert_eq!(config.display.as_deref(), Some(":1"));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
