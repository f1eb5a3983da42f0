#[cfg(feature = "app_config_serde")]
mod app_config_feature_tests {
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;
    use utils_crate::config::AppConfig;
    use utils_crate::error::UtilsError;

    fn default_model_preset_app_test() -> String {
        "vit-base-16".to_string()
    }

    #[test]
    fn test_app_config_default_values_ct() {
        let config = AppConfig::default();
        assert_eq!(config.model_config.preset, default_model_preset_app_test());
        assert_eq!(config.model_config.num_classes, None);
        assert_eq!(config.model_config.model_info_path, None);
        assert_eq!(config.logging_config.level, "info".to_string());
        assert_eq!(config.logging_config.log_dir, None);
    }

    #[test]
    fn test_app_config_load_from_toml_exists_ct() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let toml_content = r#"
            [model_config]
            preset = "vit-large-16"
            num_classes = 10
            model_info_path = "/models/vit/config.json"

            [logging_config]
            level = "debug"
            log_dir = "/var/log/vit_classifier"
        "#;
        writeln!(temp_file, "{}", toml_content).unwrap();

        let config = AppConfig::load_from_toml(temp_file.path()).unwrap();
        assert_eq!(config.model_config.preset, "vit-large-16".to_string());
        assert_eq!(config.model_config.num_classes, Some(10));
        assert_eq!(
            config.model_config.model_info_path,
            Some("/models/vit/config.json".to_string())
        );
        assert_eq!(config.logging_config.level, "debug".to_string());
        assert_eq!(
            config.logging_config.log_dir,
            Some("/var/log/vit_classifier".to_string())
        );
    }

    #[test]
    fn test_app_config_partial_deserialization_ct() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let toml_content = r#"
            [model_config]
            num_classes = 1000
        "#;
        writeln!(temp_file, "{}", toml_content).unwrap();
        let config = AppConfig::load_from_toml(temp_file.path()).unwrap();

        assert_eq!(config.model_config.num_classes, Some(1000));
        assert_eq!(config.model_config.preset, default_model_preset_app_test());
        assert_eq!(config.logging_config.level, "info".to_string());
    }

    #[test]
    fn test_app_config_file_not_found_ct() {
        let non_existent_path = Path::new("/totally/non/existent/path/config.toml");
        let config = AppConfig::load_from_toml(non_existent_path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_app_config_invalid_toml_ct() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let invalid_toml_content = r#"[model_config]
num_classes = "not_a_number""#;
        writeln!(temp_file, "{}", invalid_toml_content).unwrap();

        let result = AppConfig::load_from_toml(temp_file.path());
        assert!(result.is_err());
        if let Err(UtilsError::Config(msg)) = result {
            assert!(msg.contains("Failed to parse AppConfig from TOML"));
        } else {
            panic!("Expected a Config error for invalid TOML, got {:?}", result);
        }
    }
}
