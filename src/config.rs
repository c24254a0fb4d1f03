use std::env;

/// Operator-facing plugin settings.
///
/// The URL has no default and may be unset; the sender surfaces an unusable
/// URL as a transport failure when a broadcast is attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    /// Destination endpoint for outbound danmaku broadcasts.
    pub danmaku_url: String,
}

impl Configuration {
    /// Reads the live settings from the environment. Called on every
    /// invocation so URL changes take effect without a restart.
    pub fn from_env() -> Self {
        Configuration {
            danmaku_url: env::var("DANMAKU_URL").unwrap_or_default(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.danmaku_url.trim().is_empty()
    }
}

/// Loads a `.env` file when one is present. A missing file is fine, the
/// host usually provides the environment directly.
pub fn load_environment() {
    dotenv::dotenv().ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_is_invalid() {
        assert!(!Configuration::default().is_valid());
        let blank = Configuration {
            danmaku_url: "   ".to_string(),
        };
        assert!(!blank.is_valid());
    }

    #[test]
    fn set_url_is_valid() {
        let config = Configuration {
            danmaku_url: "http://localhost:8080/danmaku".to_string(),
        };
        assert!(config.is_valid());
    }
}
