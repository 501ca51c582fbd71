//! Configuration loading integration tests
//!
//! Options loaded from YAML files and environment pairs must go through the
//! same validation as options built in code.

#[cfg(test)]
mod tests {
    use crate::common::assertions::assert_error_kind;
    use crate::common::{PREVIEW_API_KEY, PROJECT_ID};
    use delivery_rs::{DeliveryOptions, DeliveryOptionsSettings, ErrorKind, Validate};
    use std::io::Write;

    fn write_yaml(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_options_from_file() {
        let file = write_yaml(&format!(
            "delivery_options:\n  project_id: {}\n  use_preview_api: true\n  preview_api_key: {}\n  max_retry_attempts: 2\n",
            PROJECT_ID, PREVIEW_API_KEY
        ));

        let options = DeliveryOptions::from_file(file.path()).unwrap();
        assert!(options.use_preview_api());
        assert_eq!(options.max_retry_attempts(), 2);
    }

    #[test]
    fn test_invalid_file_contents_fail_validation() {
        let file = write_yaml(&format!(
            "project_id: {}\nuse_preview_api: true\nuse_secured_production_api: true\n",
            PROJECT_ID
        ));

        let settings = DeliveryOptionsSettings::from_file(file.path()).unwrap();
        assert_error_kind(settings.validate(), ErrorKind::ConflictingState);
        assert_error_kind(
            DeliveryOptions::from_file(file.path()),
            ErrorKind::ConflictingState,
        );
    }

    #[test]
    fn test_named_section_from_file() {
        let file = write_yaml(&format!(
            "DeliveryOptions:\n  project_id: {}\n  production_endpoint: ftp://abc.com\n",
            PROJECT_ID
        ));

        let settings =
            DeliveryOptionsSettings::from_file_section(file.path(), "DeliveryOptions").unwrap();
        assert_error_kind(DeliveryOptions::try_from(settings), ErrorKind::InvalidFormat);

        assert_error_kind(
            DeliveryOptionsSettings::from_file_section(file.path(), "Missing"),
            ErrorKind::Config,
        );
    }

    #[test]
    fn test_missing_file() {
        assert_error_kind(
            DeliveryOptions::from_file("/definitely/not/here.yaml"),
            ErrorKind::Config,
        );
    }

    #[test]
    fn test_settings_from_env_pairs() {
        let settings = DeliveryOptionsSettings::from_env_vars([
            ("DELIVERY_PROJECT_ID", PROJECT_ID),
            ("DELIVERY_WAIT_FOR_LOADING_NEW_CONTENT", "true"),
            ("DELIVERY_PRODUCTION_ENDPOINT", "https://cdn.example.com/{0}"),
        ])
        .unwrap();

        let options = DeliveryOptions::try_from(settings).unwrap();
        assert!(options.wait_for_loading_new_content());
        assert_eq!(options.production_endpoint(), "https://cdn.example.com/{0}");
    }

    #[test]
    fn test_env_pairs_without_project_id() {
        let settings =
            DeliveryOptionsSettings::from_env_vars([("DELIVERY_MAX_RETRY_ATTEMPTS", "3")]).unwrap();
        assert_error_kind(DeliveryOptions::try_from(settings), ErrorKind::MissingValue);
    }
}
