//! History store (libSQL / Turso) configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Database URL (e.g., `libsql://lumen-history.turso.io`) or a local
    /// file path for single-machine use.
    #[serde(default)]
    pub url: String,

    /// Database access token. Not needed for local paths.
    #[serde(default)]
    pub auth_token: String,
}

impl HistoryConfig {
    /// Check if the history store has enough information to connect.
    pub fn is_configured(&self) -> bool {
        if self.url.is_empty() {
            return false;
        }
        !self.is_remote() || !self.auth_token.is_empty()
    }

    /// Whether the URL points at a remote database rather than a local file.
    pub fn is_remote(&self) -> bool {
        ["libsql://", "https://", "http://", "wss://", "ws://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
    }

    /// Local database path for `file:` URLs and bare paths.
    pub fn local_path(&self) -> Option<&str> {
        if self.url.is_empty() || self.is_remote() {
            return None;
        }
        Some(self.url.strip_prefix("file:").unwrap_or(&self.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = HistoryConfig::default();
        assert!(!config.is_configured());
        assert!(config.local_path().is_none());
    }

    #[test]
    fn remote_requires_token() {
        let mut config = HistoryConfig {
            url: "libsql://history.turso.io".into(),
            ..Default::default()
        };
        assert!(config.is_remote());
        assert!(!config.is_configured());

        config.auth_token = "token123".into();
        assert!(config.is_configured());
        assert!(config.local_path().is_none());
    }

    #[test]
    fn local_path_needs_no_token() {
        let config = HistoryConfig {
            url: "file:./history.db".into(),
            ..Default::default()
        };
        assert!(!config.is_remote());
        assert!(config.is_configured());
        assert_eq!(config.local_path(), Some("./history.db"));
    }
}
