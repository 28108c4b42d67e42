//! Client-side selection of the richer collections backend.

/// Read once at startup. The collections backend is used only when
/// `LIFEPLAN_REMOTE_ENABLED=true` and a URL is present; anything else
/// silently selects local-only mode.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
}

impl RemoteConfig {
    pub fn from_env() -> Option<Self> {
        let enabled = std::env::var("LIFEPLAN_REMOTE_ENABLED")
            .map(|value| value.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        if !enabled {
            return None;
        }
        let base_url = std::env::var("LIFEPLAN_REMOTE_URL")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())?;
        Some(RemoteConfig { base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // This is the only test in the crate that touches the environment.
    #[test]
    fn disabled_or_incomplete_config_means_local_only() {
        std::env::remove_var("LIFEPLAN_REMOTE_ENABLED");
        std::env::remove_var("LIFEPLAN_REMOTE_URL");
        assert!(RemoteConfig::from_env().is_none());

        std::env::set_var("LIFEPLAN_REMOTE_ENABLED", "true");
        assert!(RemoteConfig::from_env().is_none());

        std::env::set_var("LIFEPLAN_REMOTE_URL", "https://sync.example.net/");
        let config = RemoteConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://sync.example.net/");

        std::env::set_var("LIFEPLAN_REMOTE_ENABLED", "no");
        assert!(RemoteConfig::from_env().is_none());

        std::env::remove_var("LIFEPLAN_REMOTE_ENABLED");
        std::env::remove_var("LIFEPLAN_REMOTE_URL");
    }
}
