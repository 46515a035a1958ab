//! Deterministic pattern matchers for OSINT identifiers
//!
//! Five independent matchers: email, phone, URL, IPv4, cryptocurrency
//! address. Each scans the full text on its own; matches from different
//! pattern types may overlap and are all emitted. There is no cross-pattern
//! suppression and no checksum validation anywhere - recall is prioritized
//! over precision, and overlap resolution is left to downstream consumers.

use regex::Regex;

use scry_core::{Entity, EntityLabel};

/// Fixed confidence per pattern type
pub const EMAIL_CONFIDENCE: f32 = 0.95;
pub const PHONE_CONFIDENCE: f32 = 0.9;
pub const URL_CONFIDENCE: f32 = 0.95;
pub const IP_CONFIDENCE: f32 = 0.9;
pub const CRYPTO_CONFIDENCE: f32 = 0.8;

/// Pattern-based entity extractor.
///
/// Stateless aside from the compiled regexes; `extract` is a pure function
/// of its input and never fails, returning an empty list for texts with no
/// matches (including the empty string).
pub struct PatternExtractor {
    email: Regex,
    phone: Regex,
    url: Regex,
    ip: Regex,
    crypto: Regex,
}

impl PatternExtractor {
    pub fn new() -> Self {
        // Hard-coded patterns; compilation cannot fail for these literals.
        let compile = |pattern: &str| Regex::new(pattern).expect("built-in pattern must compile");

        Self {
            email: compile(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"),
            phone: compile(r"\b(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}\b"),
            url: compile(
                r"https?://(?:www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b(?:[-a-zA-Z0-9()@:%_+.~#?&/=]*)",
            ),
            ip: compile(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b"),
            crypto: compile(r"\b[13][a-km-zA-HJ-NP-Z1-9]{25,34}\b"),
        }
    }

    /// Find all pattern entities in `text`, concatenated in the fixed
    /// pattern-type order (email, phone, URL, IP, crypto), each type in
    /// left-to-right scan order.
    pub fn extract(&self, text: &str) -> Vec<Entity> {
        let mut entities = self.emails(text);
        entities.extend(self.phones(text));
        entities.extend(self.urls(text));
        entities.extend(self.ip_addresses(text));
        entities.extend(self.crypto_addresses(text));
        entities
    }

    /// `local@domain.tld` shaped tokens
    pub fn emails(&self, text: &str) -> Vec<Entity> {
        scan(&self.email, EntityLabel::Email, EMAIL_CONFIDENCE, text)
    }

    /// North-American-style numbers (3-3-4 digit groups, optional `+1` /
    /// `1` prefix and parenthesized area code). Shape only: invalid area
    /// codes are not rejected.
    pub fn phones(&self, text: &str) -> Vec<Entity> {
        scan(&self.phone, EntityLabel::Phone, PHONE_CONFIDENCE, text)
    }

    /// `http(s)://` URLs with an optional trailing path/query. Greedy; the
    /// host is not resolved or otherwise validated.
    pub fn urls(&self, text: &str) -> Vec<Entity> {
        scan(&self.url, EntityLabel::Url, URL_CONFIDENCE, text)
    }

    /// Dotted-quad IPv4 candidates. The regex only constrains digit count;
    /// each octet is additionally range-checked to 0..=255 before the
    /// candidate is accepted. This is a numeric check, not a full IPv4
    /// grammar: leading-zero octets still pass.
    pub fn ip_addresses(&self, text: &str) -> Vec<Entity> {
        self.ip
            .find_iter(text)
            .filter(|mat| octets_in_range(mat.as_str()))
            .map(|mat| Entity {
                text: mat.as_str().to_string(),
                label: EntityLabel::IpAddress,
                start: mat.start(),
                end: mat.end(),
                confidence: IP_CONFIDENCE,
            })
            .collect()
    }

    /// Base58Check-shaped tokens (leading `1` or `3`, 25-34 Base58 chars).
    /// No checksum validation, so any Base58-shaped string of the right
    /// length matches.
    pub fn crypto_addresses(&self, text: &str) -> Vec<Entity> {
        scan(
            &self.crypto,
            EntityLabel::CryptoAddress,
            CRYPTO_CONFIDENCE,
            text,
        )
    }
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn scan(regex: &Regex, label: EntityLabel, confidence: f32, text: &str) -> Vec<Entity> {
    regex
        .find_iter(text)
        .map(|mat| Entity {
            text: mat.as_str().to_string(),
            label,
            start: mat.start(),
            end: mat.end(),
            confidence,
        })
        .collect()
}

fn octets_in_range(candidate: &str) -> bool {
    candidate
        .split('.')
        .all(|octet| octet.parse::<u16>().map_or(false, |n| n <= 255))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn extractor() -> PatternExtractor {
        PatternExtractor::new()
    }

    #[test]
    fn test_email_and_phone() {
        let text = "Contact me at john@example.com or call 555-123-4567";
        let entities = extractor().extract(text);

        let email = entities
            .iter()
            .find(|e| e.label == EntityLabel::Email)
            .unwrap();
        assert_eq!(email.text, "john@example.com");
        assert_eq!(email.confidence, EMAIL_CONFIDENCE);
        assert_eq!(&text[email.start..email.end], "john@example.com");

        let phone = entities
            .iter()
            .find(|e| e.label == EntityLabel::Phone)
            .unwrap();
        assert_eq!(phone.text, "555-123-4567");
        assert_eq!(phone.confidence, PHONE_CONFIDENCE);
    }

    #[test]
    fn test_phone_formats() {
        let ex = extractor();
        for text in [
            "555-123-4567",
            "555.123.4567",
            "(555) 123-4567",
            "+1 555-123-4567",
            "1-555-123-4567",
            "5551234567",
        ] {
            assert_eq!(ex.phones(text).len(), 1, "no match in {text:?}");
        }
    }

    #[test]
    fn test_url_with_path_and_query() {
        let entities = extractor().urls("Visit https://example.com/page?x=1 now");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "https://example.com/page?x=1");
        assert_eq!(entities[0].label, EntityLabel::Url);
    }

    #[test]
    fn test_url_plain_http() {
        let entities = extractor().urls("see http://www.example.org and nothing else");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "http://www.example.org");
    }

    #[test]
    fn test_ip_octet_range_check() {
        let text = "Server at 192.168.1.1 and bad 999.999.999.999";
        let entities = extractor().ip_addresses(text);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "192.168.1.1");
        assert_eq!(entities[0].confidence, IP_CONFIDENCE);
    }

    #[test]
    fn test_ip_leading_zero_octets_pass() {
        // Numeric range check only, not a strict IPv4 grammar
        let entities = extractor().ip_addresses("host 010.001.002.003");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "010.001.002.003");
    }

    #[test]
    fn test_crypto_address() {
        let entities = extractor().extract("Send to 1BoatSLRHtKNngkdXEeobR76b53LETtpyT");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, EntityLabel::CryptoAddress);
        assert_eq!(entities[0].text, "1BoatSLRHtKNngkdXEeobR76b53LETtpyT");
        assert_eq!(entities[0].confidence, CRYPTO_CONFIDENCE);
    }

    #[test]
    fn test_crypto_rejects_excluded_alphabet() {
        // '0', 'O', 'I', 'l' are not in the Base58 alphabet
        let entities = extractor().crypto_addresses("1OOOOOOOOOOOOOOOOOOOOOOOOOOOOO");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_overlapping_pattern_types_both_emitted() {
        // The host of the URL is itself an IP address; both matchers fire
        // and neither result suppresses the other.
        let text = "panel at http://192.168.1.1/admin ok";
        let entities = extractor().extract(text);

        let url = entities.iter().find(|e| e.label == EntityLabel::Url);
        let ip = entities.iter().find(|e| e.label == EntityLabel::IpAddress);
        assert!(url.is_some());
        assert!(ip.is_some());
        assert_eq!(ip.unwrap().text, "192.168.1.1");
    }

    #[test]
    fn test_fixed_output_order() {
        let text = "1BoatSLRHtKNngkdXEeobR76b53LETtpyT then a@b.io then 10.0.0.1";
        let labels: Vec<EntityLabel> = extractor().extract(text).iter().map(|e| e.label).collect();
        // Pattern-type order, not positional order
        assert_eq!(
            labels,
            vec![
                EntityLabel::Email,
                EntityLabel::IpAddress,
                EntityLabel::CryptoAddress,
            ]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(extractor().extract("").is_empty());
    }

    proptest! {
        #[test]
        fn prop_spans_slice_back_to_entity_text(text in "[ -~]{0,64}") {
            let extractor = PatternExtractor::new();
            for entity in extractor.extract(&text) {
                prop_assert!(entity.start < entity.end);
                prop_assert!(entity.end <= text.len());
                prop_assert_eq!(&text[entity.start..entity.end], entity.text.as_str());
                prop_assert!((0.0..=1.0).contains(&entity.confidence));
            }
        }
    }
}
