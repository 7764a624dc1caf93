use std::panic;

const REDACTED: &str = "[REDACTED]";

const SENSITIVE_MARKERS: [&str; 5] = ["key", "token", "secret", "authorization", "bearer"];

/// Google API keys are 39 characters starting with this prefix.
const GOOGLE_KEY_PREFIX: &str = "AIza";

pub fn redact_text(input: &str) -> String {
    input
        .split_whitespace()
        .map(redact_chunk)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn install_panic_redaction_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic payload omitted".to_owned());

        let scrubbed = redact_text(&payload);

        match panic_info.location() {
            Some(location) => eprintln!(
                "lexdesk panic: {} at {}:{}",
                scrubbed,
                location.file(),
                location.line()
            ),
            None => eprintln!("lexdesk panic: {}", scrubbed),
        }
    }));
}

fn redact_chunk(chunk: &str) -> String {
    let lowered = chunk.to_ascii_lowercase();
    let has_marker_with_value = chunk.contains('=')
        && SENSITIVE_MARKERS
            .iter()
            .any(|marker| lowered.contains(marker));

    if has_marker_with_value || looks_like_api_key(chunk) {
        REDACTED.to_owned()
    } else {
        chunk.to_owned()
    }
}

fn looks_like_api_key(value: &str) -> bool {
    let cleaned = value
        .trim_matches(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'));

    if cleaned.starts_with(GOOGLE_KEY_PREFIX) {
        return true;
    }

    let has_mixed = cleaned.chars().any(|ch| ch.is_ascii_alphabetic())
        && cleaned.chars().any(|ch| ch.is_ascii_digit());

    cleaned.len() >= 24
        && has_mixed
        && cleaned
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_text_scrubs_keys_and_assignments() {
        let input = "request failed key=abc123 with AIzaSyD-fake_KeyValue0123456789abcdef";
        let output = redact_text(input);

        assert!(!output.contains("abc123"));
        assert!(!output.contains("AIzaSy"));
        assert!(output.contains("request failed"));
        assert!(output.contains(REDACTED));
    }

    #[test]
    fn redact_text_keeps_ordinary_prose() {
        let input = "Desculpe, tive um problema técnico. Tente novamente.";

        assert_eq!(redact_text(input), input);
    }
}
