use content_insight::infrastructure::observability::sanitize_prompt;

#[test]
fn given_blank_text_when_sanitizing_then_marks_empty() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt(" \n\t "), "[EMPTY]");
}

#[test]
fn given_multiline_text_when_sanitizing_then_flattens_to_one_line() {
    assert_eq!(
        sanitize_prompt("Launch day\n\n  is   tomorrow"),
        "Launch day is tomorrow"
    );
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_and_reports_total() {
    let text = "a".repeat(250);

    let sanitized = sanitize_prompt(&text);

    assert_eq!(sanitized, format!("{}... (250 chars total)", "a".repeat(100)));
}

#[test]
fn given_multibyte_text_when_truncating_then_cuts_on_char_boundary() {
    let text = "é".repeat(150);

    let sanitized = sanitize_prompt(&text);

    assert!(sanitized.starts_with(&"é".repeat(100)));
    assert!(sanitized.ends_with("(150 chars total)"));
}

#[test]
fn given_credentials_when_sanitizing_then_values_are_redacted() {
    let sanitized =
        sanitize_prompt("Authorization: Bearer abc.def token=xyz&password=hunter2 done");

    assert_eq!(
        sanitized,
        "Authorization: Bearer [REDACTED] token=[REDACTED]&password=[REDACTED] done"
    );
}

#[test]
fn given_repeated_secret_when_sanitizing_then_every_occurrence_is_redacted() {
    let sanitized = sanitize_prompt("secret=one and secret=two");

    assert_eq!(sanitized, "secret=[REDACTED] and secret=[REDACTED]");
}
