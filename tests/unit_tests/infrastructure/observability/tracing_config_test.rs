use content_insight::infrastructure::observability::TracingConfig;
use content_insight::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_logging_settings_when_building_config_then_copies_level_and_format() {
    let logging = LoggingSettings {
        level: "debug".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&logging, Environment::Prod);

    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
    assert_eq!(config.default_level, "debug");
}

#[test]
fn given_level_when_building_filter_then_crate_and_http_targets_are_included() {
    let config = TracingConfig::from_settings(&LoggingSettings::default(), Environment::Local);

    assert_eq!(
        config.default_filter(),
        "info,content_insight=info,tower_http=debug"
    );
}
