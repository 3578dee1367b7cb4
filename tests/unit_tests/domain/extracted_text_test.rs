use content_insight::domain::{ExtractedText, PREVIEW_CHARS, PROMPT_CHARS, TRUNCATION_MARKER};

#[test]
fn given_padded_text_when_created_then_is_trimmed() {
    let text = ExtractedText::new("  \n Hello world \t\n");
    assert_eq!(text.as_str(), "Hello world");
    assert_eq!(text.char_len(), 11);
}

#[test]
fn given_short_text_when_previewing_then_returns_full_text_without_marker() {
    let text = ExtractedText::new("Hello world");
    assert_eq!(text.preview(), "Hello world");
}

#[test]
fn given_exactly_preview_length_when_previewing_then_no_marker() {
    let raw = "a".repeat(PREVIEW_CHARS);
    let text = ExtractedText::new(&raw);
    assert_eq!(text.preview(), raw);
}

#[test]
fn given_long_text_when_previewing_then_truncates_and_appends_marker() {
    let raw = "b".repeat(PREVIEW_CHARS + 1);
    let text = ExtractedText::new(&raw);

    let preview = text.preview();

    assert!(preview.ends_with(TRUNCATION_MARKER));
    assert_eq!(
        preview.chars().count(),
        PREVIEW_CHARS + TRUNCATION_MARKER.chars().count()
    );
    assert_eq!(text.char_len(), PREVIEW_CHARS + 1);
}

#[test]
fn given_multibyte_text_when_previewing_then_cuts_on_char_boundary() {
    let raw = "é".repeat(PREVIEW_CHARS + 10);
    let text = ExtractedText::new(&raw);

    let preview = text.preview();

    assert_eq!(preview, format!("{}{}", "é".repeat(PREVIEW_CHARS), TRUNCATION_MARKER));
}

#[test]
fn given_long_text_when_building_prompt_excerpt_then_caps_at_prompt_length() {
    let raw = "c".repeat(PROMPT_CHARS * 2);
    let text = ExtractedText::new(&raw);

    assert_eq!(text.prompt_excerpt().chars().count(), PROMPT_CHARS);
    assert_eq!(text.char_len(), PROMPT_CHARS * 2);
}

#[test]
fn given_nine_chars_when_checking_readability_then_not_readable() {
    assert!(!ExtractedText::new("  123456789  ").is_readable());
    assert!(ExtractedText::new("1234567890").is_readable());
}
