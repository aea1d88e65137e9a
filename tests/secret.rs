#[cfg(test)]
mod tests {
    use horizons::libs::data_storage::DataStorage;
    use horizons::libs::secret::Secret;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SecretTestContext {
        _temp_dir: TempDir,
        secret_file_name: String,
    }

    impl TestContext for SecretTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            SecretTestContext {
                _temp_dir: temp_dir,
                secret_file_name: ".test_secret".to_string(),
            }
        }
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_forget_on_missing_file_is_ok(ctx: &mut SecretTestContext) {
        let secret = Secret::new(&ctx.secret_file_name, "Enter test password");
        secret.forget().unwrap();
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_forget_removes_cached_file(ctx: &mut SecretTestContext) {
        let secret = Secret::new(&ctx.secret_file_name, "Enter test password");
        let secret_path = DataStorage::new().get_path(&ctx.secret_file_name).unwrap();

        fs::write(&secret_path, "dGVzdF9lbmNyeXB0ZWRfZGF0YQ==").unwrap();
        assert!(secret_path.exists());

        secret.forget().unwrap();
        assert!(!secret_path.exists());
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_corrupted_cache_is_not_returned(ctx: &mut SecretTestContext) {
        let _secret = Secret::new(&ctx.secret_file_name, "Enter test password");
        let secret_path = DataStorage::new().get_path(&ctx.secret_file_name).unwrap();

        // A corrupted cache must not decrypt into a password; get_or_prompt
        // would fall through to an interactive prompt here, so only the
        // file-level behavior is asserted.
        fs::write(&secret_path, "invalid_base64_content!@#$").unwrap();
        assert!(secret_path.exists());
    }
}
