//! WhatsApp deep-link composition.
//!
//! The contact page offers a secondary channel: a wa.me link prefilled from
//! the current form draft. Nothing is persisted and the link itself has no
//! failure mode; composition is pure string work.

use serde::Deserialize;

/// Current form draft used to prefill the message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Compose the prefilled wa.me URL for the given business number.
///
/// `number` is the international format without the plus sign, e.g.
/// "254111679286".
pub fn compose_link(number: &str, site_name: &str, draft: &WhatsAppDraft) -> String {
    let text = format!(
        "Hi {}! I'm interested in your services.\n\nName: {}\nEmail: {}\nMessage: {}",
        site_name, draft.name, draft.email, draft.message
    );

    format!("https://wa.me/{}?text={}", number, percent_encode(&text))
}

/// Minimal percent-encoding: everything outside the RFC 3986 unreserved set
/// is escaped byte-wise.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> WhatsAppDraft {
        WhatsAppDraft {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            message: "Need a website".to_string(),
        }
    }

    #[test]
    fn test_link_targets_configured_number() {
        let link = compose_link("254111679286", "Tech Agency", &draft());
        assert!(link.starts_with("https://wa.me/254111679286?text="));
    }

    #[test]
    fn test_link_encodes_spaces_and_newlines() {
        let link = compose_link("254111679286", "Tech Agency", &draft());
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
        assert!(link.contains("%20"));
        assert!(link.contains("%0A"));
    }

    #[test]
    fn test_link_includes_draft_fields() {
        let link = compose_link("254111679286", "Tech Agency", &draft());
        assert!(link.contains("Jane"));
        assert!(link.contains("jane%40example.com"));
        assert!(link.contains("Need%20a%20website"));
    }

    #[test]
    fn test_percent_encode_unreserved_untouched() {
        assert_eq!(percent_encode("AZaz09-_.~"), "AZaz09-_.~");
    }

    #[test]
    fn test_percent_encode_multibyte() {
        // Each UTF-8 byte is escaped individually
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    #[test]
    fn test_empty_draft_still_composes() {
        let link = compose_link("254111679286", "Tech Agency", &WhatsAppDraft::default());
        assert!(link.contains("Name%3A"));
    }
}
