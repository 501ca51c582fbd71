//! Staged options builder integration tests
//!
//! Tests for the ordered builder protocol and the fail-fast validation of
//! each step and of the final record.

#[cfg(test)]
mod tests {
    use crate::common::assertions::assert_error_kind;
    use crate::common::{OptionsFactory, PREVIEW_API_KEY, PROJECT_ID, SECURED_API_KEY};
    use delivery_rs::{
        ApiMode, DeliveryOptions, DeliveryOptionsBuilder, DeliveryOptionsSettings, ErrorKind,
        validate_complete,
    };

    // ==================== Round trip ====================

    /// Production options without optional calls carry every default
    #[test]
    fn test_production_round_trip() {
        let options = OptionsFactory::production();

        assert_eq!(options.project_id().to_string(), PROJECT_ID);
        assert!(!options.use_preview_api());
        assert!(!options.use_secured_production_api());
        assert_eq!(options.max_retry_attempts(), 5);
        assert!(options.enable_resilience_logic());
        assert!(!options.wait_for_loading_new_content());
        assert_eq!(
            options.production_endpoint(),
            "https://deliver.kenticocloud.com/{0}"
        );
        assert_eq!(
            options.preview_endpoint(),
            "https://preview-deliver.kenticocloud.com/{0}"
        );
    }

    /// Custom preview endpoint scenario
    #[test]
    fn test_preview_with_custom_endpoint() {
        let options = DeliveryOptionsBuilder::new()
            .with_project_id(PROJECT_ID)
            .and_then(|steps| steps.use_preview_api(PREVIEW_API_KEY))
            .and_then(|steps| steps.with_custom_endpoint("http://www.customPreviewEndpoint.com"))
            .and_then(|steps| steps.build())
            .unwrap();

        assert!(options.use_preview_api());
        assert_eq!(
            options.preview_endpoint(),
            "http://www.customPreviewEndpoint.com"
        );
    }

    /// Every optional step can be combined in any order
    #[test]
    fn test_optional_steps_in_any_order() {
        let a = DeliveryOptionsBuilder::new()
            .with_project_id(PROJECT_ID)
            .unwrap()
            .use_secured_production_api(SECURED_API_KEY)
            .unwrap()
            .with_max_retry_attempts(1)
            .unwrap()
            .wait_for_loading_new_content()
            .with_custom_endpoint("https://cdn.example.com/{0}")
            .unwrap()
            .enable_resilience_logic()
            .build()
            .unwrap();

        let b = DeliveryOptionsBuilder::new()
            .with_project_id(PROJECT_ID)
            .unwrap()
            .use_secured_production_api(SECURED_API_KEY)
            .unwrap()
            .enable_resilience_logic()
            .with_custom_endpoint("https://cdn.example.com/{0}")
            .unwrap()
            .wait_for_loading_new_content()
            .with_max_retry_attempts(1)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(a, b);
        assert_eq!(
            a.mode(),
            &ApiMode::SecuredProduction {
                api_key: SECURED_API_KEY.to_string()
            }
        );
    }

    // ==================== Failure kinds ====================

    #[test]
    fn test_project_id_failures() {
        assert_error_kind(
            DeliveryOptionsBuilder::new().with_project_id(""),
            ErrorKind::MissingValue,
        );
        assert_error_kind(
            DeliveryOptionsBuilder::new().with_project_id("not-a-uuid"),
            ErrorKind::InvalidFormat,
        );
        assert_error_kind(
            DeliveryOptionsBuilder::new().with_project_id("00000000-0000-0000-0000-000000000000"),
            ErrorKind::InvalidValue,
        );
    }

    #[test]
    fn test_negative_retry_attempts() {
        for attempts in [-1, -10, i32::MIN] {
            let steps = DeliveryOptionsBuilder::new()
                .with_project_id(PROJECT_ID)
                .unwrap()
                .use_production_api();
            assert_error_kind(steps.with_max_retry_attempts(attempts), ErrorKind::InvalidValue);
        }
    }

    #[test]
    fn test_ftp_endpoint_rejected() {
        let steps = DeliveryOptionsBuilder::new()
            .with_project_id(PROJECT_ID)
            .unwrap()
            .use_preview_api(PREVIEW_API_KEY)
            .unwrap();
        assert_error_kind(
            steps.with_custom_endpoint("ftp://abc.com"),
            ErrorKind::InvalidFormat,
        );
    }

    #[test]
    fn test_malformed_keys_rejected() {
        let steps = DeliveryOptionsBuilder::new().with_project_id(PROJECT_ID).unwrap();
        assert_error_kind(
            steps.use_preview_api("badPreviewApiFormat"),
            ErrorKind::InvalidFormat,
        );

        let steps = DeliveryOptionsBuilder::new().with_project_id(PROJECT_ID).unwrap();
        assert_error_kind(
            steps.use_secured_production_api("only.two"),
            ErrorKind::InvalidFormat,
        );
    }

    // ==================== Settings records ====================

    /// Both modes on one record conflict regardless of how they were set
    #[test]
    fn test_both_modes_conflict() {
        let settings = DeliveryOptionsSettings {
            use_preview_api: true,
            preview_api_key: Some(PREVIEW_API_KEY.to_string()),
            use_secured_production_api: true,
            secured_production_api_key: Some(SECURED_API_KEY.to_string()),
            ..OptionsFactory::settings()
        };

        assert_error_kind(validate_complete(&settings), ErrorKind::ConflictingState);
        assert_error_kind(DeliveryOptions::try_from(settings), ErrorKind::ConflictingState);
    }

    /// Preview enabled without a key fails at finalization
    #[test]
    fn test_preview_without_key() {
        let settings = DeliveryOptionsSettings {
            use_preview_api: true,
            ..OptionsFactory::settings()
        };

        assert_error_kind(DeliveryOptions::try_from(settings), ErrorKind::ConflictingState);
    }

    /// Options converted to settings and back are unchanged
    #[test]
    fn test_settings_view_of_built_options() {
        let options = OptionsFactory::preview();
        let settings = DeliveryOptionsSettings::from(&options);

        assert!(settings.use_preview_api);
        assert_eq!(settings.preview_api_key.as_deref(), Some(PREVIEW_API_KEY));
        assert_eq!(DeliveryOptions::try_from(settings).unwrap(), options);
    }
}
