use content_insight::presentation::config::{Environment, Settings};

#[test]
fn given_no_sources_when_using_defaults_then_values_match_service_contract() {
    let settings = Settings::default();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.server.request_timeout_secs, 120);
    assert!(settings.server.max_body_bytes > 10 * 1024 * 1024);
    assert!(settings.llm.api_key.is_empty());
    assert_eq!(settings.llm.chat_model, "gpt-3.5-turbo");
    assert_eq!(settings.llm.max_tokens, 1000);
    assert_eq!(settings.extraction.ocr.language, "eng");
    assert_eq!(settings.extraction.pdf.timeout_secs, 30);
    assert_eq!(settings.logging.level, "info");
    assert!(!settings.logging.enable_json);
}

#[test]
fn given_environment_names_when_parsing_then_accepts_known_values() {
    assert_eq!(Environment::try_from("local".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("TEST".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("production".to_string()), Ok(Environment::Prod));
}

#[test]
fn given_unknown_environment_when_parsing_then_returns_error() {
    let result = Environment::try_from("staging".to_string());

    assert!(result.unwrap_err().contains("staging"));
}

#[test]
fn given_environment_when_displaying_then_uses_config_file_suffix() {
    assert_eq!(Environment::Prod.to_string(), "prod");
    assert_eq!(Environment::Local.as_str(), "local");
}
