use std::path::Path;

use serde::{Deserialize, Serialize};
use tictactoe::Symbol;

/// Settings for one session, stored as JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// The symbol that is selected before the first selection is made.
    #[serde(default)]
    pub default_symbol: Symbol,
}

impl SessionConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        match serde_json::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(err) => anyhow::bail!("Invalid config file '{}': {}", path.display(), err),
        }
    }

    /// Loads the config file if there is one, and lets a symbol given on the
    /// command line take precedence over it.
    pub fn resolve(path: Option<&Path>, default_symbol: Option<Symbol>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(symbol) = default_symbol {
            config.default_symbol = symbol;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_symbol_defaults_to_x() {
        let config: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.default_symbol, Symbol::X);
        let config: SessionConfig = serde_json::from_str(r#"{"default_symbol":"O"}"#).unwrap();
        assert_eq!(config.default_symbol, Symbol::O);
    }

    #[test]
    fn command_line_wins() {
        let dir = std::env::temp_dir().join(format!("tictactoe_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("session.json");
        std::fs::write(&path, r#"{"default_symbol":"O"}"#).unwrap();

        let config = SessionConfig::resolve(Some(&path), None).unwrap();
        assert_eq!(config.default_symbol, Symbol::O);
        let config = SessionConfig::resolve(Some(&path), Some(Symbol::X)).unwrap();
        assert_eq!(config.default_symbol, Symbol::X);

        std::fs::write(&path, r#"{"default_symbol":"Q"}"#).unwrap();
        assert!(SessionConfig::load(&path).is_err());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
