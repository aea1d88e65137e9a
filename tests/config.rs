#[cfg(test)]
mod tests {
    use horizons::api::cloud::CloudConfig;
    use horizons::libs::config::Config;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_config_yields_default(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.cloud.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_round_trip(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.cloud = Some(CloudConfig {
            api_url: "https://sync.example.com/api".to_string(),
            login: "me@example.com".to_string(),
        });
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        let cloud = loaded.cloud.unwrap();
        assert_eq!(cloud.api_url, "https://sync.example.com/api");
        assert_eq!(cloud.login, "me@example.com");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_default_clears_modules(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.cloud = Some(CloudConfig {
            api_url: "https://sync.example.com/api".to_string(),
            login: "me@example.com".to_string(),
        });
        config.save().unwrap();

        Config::default().save().unwrap();
        assert!(Config::read().unwrap().cloud.is_none());
    }
}
