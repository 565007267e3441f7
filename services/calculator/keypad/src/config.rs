use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

use calculator_brain::OperationTable;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum OperationSet {
    Standard,
    Scientific,
}

impl OperationSet {
    pub fn table(self) -> OperationTable {
        match self {
            Self::Standard => OperationTable::standard(),
            Self::Scientific => OperationTable::scientific(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Report keys that can't be applied instead of ignoring them
    pub strict: bool,
    pub precision: Option<usize>,
    /// Shown while there is no result
    pub empty_display: String,
    pub operations: OperationSet,
    /// Print the collected metrics on exit
    pub metrics: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strict: false,
            precision: None,
            empty_display: String::new(),
            operations: OperationSet::Standard,
            metrics: false,
        }
    }
}

pub fn figment() -> Figment {
    Figment::new()
        .merge(Toml::file("Keypad.toml"))
        .merge(Env::prefixed("APP_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() -> Result<(), Box<dyn std::error::Error>> {
        let config: Config = Figment::new().extract()?;

        assert!(!config.strict);
        assert!(!config.metrics);
        assert_eq!(config.precision, None);
        assert_eq!(config.empty_display, "");
        assert_eq!(config.operations, OperationSet::Standard);
        Ok(())
    }

    #[test]
    fn test_toml() -> Result<(), Box<dyn std::error::Error>> {
        let source = r#"
            strict = true
            precision = 3
            empty_display = "0"
            operations = "scientific"
        "#;
        let config: Config = Figment::new().merge(Toml::string(source)).extract()?;

        assert!(config.strict);
        assert!(!config.metrics);
        assert_eq!(config.precision, Some(3));
        assert_eq!(config.empty_display, "0");
        assert_eq!(config.operations, OperationSet::Scientific);
        assert_eq!(config.operations.table().len(), 14);
        Ok(())
    }

    #[test]
    fn test_invalid() {
        let r = Figment::new()
            .merge(Toml::string("operations = \"graphing\""))
            .extract::<Config>();

        assert!(r.is_err());
    }
}
