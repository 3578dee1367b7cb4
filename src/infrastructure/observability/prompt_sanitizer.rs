const MAX_VISIBLE_CHARS: usize = 100;

const SENSITIVE_PREFIXES: [&str; 5] = [
    "Bearer ",
    "api_key=",
    "password=",
    "secret=",
    "token=",
];

/// Sanitizes document or prompt text for safe single-line logging.
pub fn sanitize_prompt(prompt: &str) -> String {
    let flattened = prompt.split_whitespace().collect::<Vec<_>>().join(" ");

    if flattened.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = flattened.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let cut: String = flattened.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{cut}... ({total_chars} chars total)")
    } else {
        flattened
    };

    redact_sensitive_patterns(&visible)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let mut result = text.to_string();

    for prefix in SENSITIVE_PREFIXES {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(prefix) {
            let value_start = search_from + found + prefix.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());

            let replacement = format!("{prefix}[REDACTED]");
            result.replace_range(value_start - prefix.len()..value_end, &replacement);
            search_from = value_start - prefix.len() + replacement.len();
        }
    }

    result
}
