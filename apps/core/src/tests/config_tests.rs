use crate::config::{
    AssistantConfig, ENV_ASSISTANT_NAME, ENV_QUICK_ACTION_DELAY_MS, ENV_REPLY_DELAY_MS,
    ENV_WEBSITE_URL,
};
use crate::error::AppError;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

const ALL_VARS: [&str; 4] = [
    ENV_REPLY_DELAY_MS,
    ENV_QUICK_ACTION_DELAY_MS,
    ENV_ASSISTANT_NAME,
    ENV_WEBSITE_URL,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_environment() {
        temp_env::with_vars_unset(ALL_VARS, || {
            let config = AssistantConfig::from_env().unwrap();
            assert_eq!(config.reply_delay(), Duration::from_millis(1000));
            assert_eq!(config.quick_action_delay(), Duration::from_millis(100));
            assert_eq!(config.assistant_name, "AFOA Navigation Assistant");
            assert_eq!(config.website_display(), "www.afoa.org.uk");
        });
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                (ENV_REPLY_DELAY_MS, Some("250")),
                (ENV_QUICK_ACTION_DELAY_MS, Some(" 0 ")),
                (ENV_ASSISTANT_NAME, Some("Station Helper")),
                (ENV_WEBSITE_URL, Some("http://example.org/")),
            ],
            || {
                let config = AssistantConfig::from_env().unwrap();
                assert_eq!(config.reply_delay_ms, 250);
                assert_eq!(config.quick_action_delay_ms, 0);
                assert_eq!(config.assistant_name, "Station Helper");
                assert_eq!(config.website_display(), "example.org");
            },
        );
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        temp_env::with_vars(
            [(ENV_REPLY_DELAY_MS, Some("")), (ENV_ASSISTANT_NAME, Some("  "))],
            || {
                let config = AssistantConfig::from_env().unwrap();
                assert_eq!(config.reply_delay_ms, 1000);
                assert_eq!(config.assistant_name, "AFOA Navigation Assistant");
            },
        );
    }

    #[test]
    fn test_unparsable_delay_is_a_config_error() {
        temp_env::with_var(ENV_REPLY_DELAY_MS, Some("soon"), || {
            let err = AssistantConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(_)), "got {:?}", err);
            assert!(err.to_string().contains(ENV_REPLY_DELAY_MS));
        });
    }

    #[test]
    fn test_out_of_range_delay_fails_validation() {
        temp_env::with_var(ENV_REPLY_DELAY_MS, Some("600000"), || {
            let err = AssistantConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);
        });
    }

    #[test]
    fn test_invalid_website_fails_validation() {
        temp_env::with_var(ENV_WEBSITE_URL, Some("not a url"), || {
            let err = AssistantConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);
        });
    }

    #[test]
    fn test_env_file_supplies_settings() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join(".env");
        fs::write(
            &env_file,
            "ASSISTANT_REPLY_DELAY_MS=40\nASSISTANT_NAME=\"Dublin Desk\"\n",
        )
        .unwrap();

        temp_env::with_vars_unset(ALL_VARS, || {
            let config = AssistantConfig::load_with(Some(&env_file)).unwrap();
            assert_eq!(config.reply_delay_ms, 40);
            assert_eq!(config.assistant_name, "Dublin Desk");
            assert_eq!(config.quick_action_delay_ms, 100);
        });
    }

    #[test]
    fn test_process_environment_wins_over_env_file() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join(".env");
        fs::write(&env_file, "ASSISTANT_REPLY_DELAY_MS=40\n").unwrap();

        temp_env::with_vars(
            [
                (ENV_REPLY_DELAY_MS, Some("75")),
                (ENV_QUICK_ACTION_DELAY_MS, None),
                (ENV_ASSISTANT_NAME, None),
                (ENV_WEBSITE_URL, None),
            ],
            || {
                let config = AssistantConfig::load_with(Some(&env_file)).unwrap();
                assert_eq!(config.reply_delay_ms, 75);
            },
        );
    }

    #[test]
    fn test_missing_env_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.env");

        temp_env::with_vars_unset(ALL_VARS, || {
            let err = AssistantConfig::load_with(Some(&missing)).unwrap_err();
            assert!(matches!(err, AppError::Config(_)), "got {:?}", err);
        });
    }
}
