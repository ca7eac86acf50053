use figment::Jail;
use hl_config::{ConfigError, HlConfig};

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("HYPERLOCAL_SYNC__POLL_INTERVAL_SECS", "5");
        jail.set_env("HYPERLOCAL_STORAGE__USE_KEYRING", "false");

        let config = HlConfig::load().expect("config loads");
        assert_eq!(config.sync.poll_interval_secs, 5);
        assert!(!config.storage.use_keyring);
        Ok(())
    });
}

#[test]
fn invalid_env_value_is_reported() {
    Jail::expect_with(|jail| {
        jail.set_env("HYPERLOCAL_API__BASE_URL", "ftp://backend");

        let err = HlConfig::load().expect_err("ftp should be rejected");
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "api.base_url"));
        Ok(())
    });
}

#[test]
fn unparseable_env_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("HYPERLOCAL_API__TIMEOUT_SECS", "soon");

        let err = HlConfig::load().expect_err("non-numeric timeout should fail");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
