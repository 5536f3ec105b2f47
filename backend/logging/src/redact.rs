//! Log Redaction
//!
//! Scrubs Telegram bot tokens from strings prior to logging.

use regex::Regex;
use std::sync::LazyLock;

static BOT_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/bot[0-9]+:[A-Za-z0-9_-]+").unwrap());
static BOT_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]{6,}:[A-Za-z0-9_-]{30,}").unwrap());

/// Redacts bot tokens, including those embedded in Bot API URLs.
pub fn redact_sensitive_data(input: &str) -> String {
    let redacted = BOT_URL_RE.replace_all(input, "/bot[REDACTED_TOKEN]");
    BOT_TOKEN_RE.replace_all(&redacted, "[REDACTED_TOKEN]").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "1234567890:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw";

    #[test]
    fn test_redaction() {
        let raw = format!("sendMediaGroup failed: https://api.telegram.org/bot{TOKEN}/sendMediaGroup");
        let clean = redact_sensitive_data(&raw);
        assert!(!clean.contains(TOKEN));
        assert!(clean.contains("/bot[REDACTED_TOKEN]/sendMediaGroup"));
    }

    #[test]
    fn bare_token_is_redacted() {
        let clean = redact_sensitive_data(&format!("token={TOKEN}"));
        assert_eq!(clean, "token=[REDACTED_TOKEN]");
    }

    #[test]
    fn message_ids_untouched() {
        let raw = "album 13579 with ids [10, 11, 12]";
        assert_eq!(redact_sensitive_data(raw), raw);
    }
}
