use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};

/// Login animation settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    pub username: String,
    /// Number of mask characters typed for the password.
    pub password_len: usize,
    pub char_ms: u32,
    /// Pause before the username, between the two fields and before handoff.
    pub pause_ms: u32,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            username: "guest".to_string(),
            password_len: 8,
            char_ms: 100,
            pause_ms: 500,
        }
    }
}

/// Terminal configuration, loadable from JSON handed over by the page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub user: String,
    pub host: String,
    pub typing_tick_ms: u32,
    pub login: LoginConfig,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: "visitor".to_string(),
            host: "portfolio".to_string(),
            typing_tick_ms: 50,
            login: LoginConfig::default(),
        }
    }
}

impl TerminalConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(PortfolioError::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = TerminalConfig::from_json(r#"{"user":"root","login":{"char_ms":10}}"#).unwrap();
        assert_eq!(cfg.user, "root");
        assert_eq!(cfg.host, "portfolio");
        assert_eq!(cfg.typing_tick_ms, 50);
        assert_eq!(cfg.login.char_ms, 10);
        assert_eq!(cfg.login.username, "guest");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(TerminalConfig::from_json("{}").unwrap(), TerminalConfig::default());
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = TerminalConfig::from_json("{\"typing_tick_ms\": \"fast\"}").unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));
    }
}
