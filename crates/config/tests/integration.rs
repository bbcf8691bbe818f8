//! Integration tests for config

#[cfg(test)]
mod tests {
    use pypi2pkgbuild_config::*;
    use pypi2pkgbuild_errors::{ConfigError, Error};
    use std::io::Write;
    use std::sync::Mutex;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    // Mutex to ensure env var tests don't run concurrently
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        std::env::remove_var(ENV_INDEX_URL);
        std::env::remove_var(ENV_TIMEOUT);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.index.url, DEFAULT_INDEX_URL);
        assert!(config.network.timeout().is_none());
        assert!(config.network.connect_timeout().is_none());
        assert!(config.network.user_agent.starts_with("pypi2pkgbuild/"));
    }

    #[tokio::test]
    async fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[index]
url = "https://test.pypi.org/pypi"

[network]
timeout = 30
connect_timeout = 5
        "#
        )
        .unwrap();

        let config = Config::load_from_file(temp_file.path()).await.unwrap();
        assert_eq!(config.index.url, "https://test.pypi.org/pypi");
        assert_eq!(config.network.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.network.connect_timeout(), Some(Duration::from_secs(5)));
        assert!(config.network.user_agent.starts_with("pypi2pkgbuild/"));
    }

    #[tokio::test]
    async fn test_partial_file_keeps_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[network]\nuser_agent = \"custom/1.0\"").unwrap();

        let config = Config::load_from_file(temp_file.path()).await.unwrap();
        assert_eq!(config.index.url, DEFAULT_INDEX_URL);
        assert_eq!(config.network.user_agent, "custom/1.0");
    }

    #[tokio::test]
    async fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = Config::load_or_default(Some(&missing)).await.unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[index\nurl = ").unwrap();

        let err = Config::load_from_file(temp_file.path()).await.unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_merge_env() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        clear_env();

        std::env::set_var(ENV_INDEX_URL, "http://localhost:8080/pypi");
        std::env::set_var(ENV_TIMEOUT, "15");

        let mut config = Config::default();
        config.merge_env().unwrap();

        assert_eq!(config.index.url, "http://localhost:8080/pypi");
        assert_eq!(config.network.timeout(), Some(Duration::from_secs(15)));

        clear_env();
    }

    #[test]
    fn test_invalid_env_value() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        clear_env();

        std::env::set_var(ENV_TIMEOUT, "soon");

        let mut config = Config::default();
        let result = config.merge_env();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { .. }))
        ));

        clear_env();
    }

    #[test]
    fn test_cli_url_wins() {
        let mut config = Config::default();
        config.apply_index_url(None);
        assert_eq!(config.index.url, DEFAULT_INDEX_URL);

        config.apply_index_url(Some("http://mirror/pypi".to_string()));
        assert_eq!(config.index.url, "http://mirror/pypi");
    }
}
