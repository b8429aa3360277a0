use proptest::prelude::*;
use vessel_core::traits::IScanner;
use vessel_scan::{redact, FirewallEngine};

/// Append a Luhn check digit to a digit string.
fn with_luhn_check_digit(digits: &str) -> String {
    let mut sum = 0;
    let mut double = true; // position of the future check digit is "undoubled"
    for c in digits.chars().rev() {
        let mut d = c.to_digit(10).unwrap();
        if double {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
        double = !double;
    }
    let check = (10 - (sum % 10)) % 10;
    format!("{digits}{check}")
}

proptest! {
    // ── Length preservation over arbitrary text ───────────────────────────

    #[test]
    fn redaction_always_preserves_char_count(text in ".{0,300}") {
        let engine = FirewallEngine::new();
        let matches = engine.scan(&text);
        let redacted = redact(&text, &matches);
        prop_assert_eq!(redacted.chars().count(), text.chars().count());
    }

    // ── Redaction is idempotent for a fixed match set ─────────────────────

    #[test]
    fn redaction_is_idempotent_for_fixed_spans(text in "[ -~]{0,200}") {
        let engine = FirewallEngine::new();
        let matches = engine.scan(&text);
        let once = redact(&text, &matches);
        let twice = redact(&once, &matches);
        prop_assert_eq!(&once, &twice);
    }

    // ── Scan determinism ──────────────────────────────────────────────────

    #[test]
    fn scanning_twice_gives_identical_matches(text in ".{0,300}") {
        let engine = FirewallEngine::new();
        let first = engine.scan(&text);
        let second = engine.scan(&text);
        prop_assert_eq!(first, second);
    }

    // ── Luhn gating ───────────────────────────────────────────────────────

    #[test]
    fn luhn_valid_16_digit_numbers_always_flagged(body in "[1-9][0-9]{14}") {
        let number = with_luhn_check_digit(&body);
        let input = format!("card {number} here");
        let engine = FirewallEngine::new();
        let matches = engine.scan(&input);
        prop_assert!(
            matches.iter().any(|m| m.kind == "Credit Card Number"),
            "Luhn-valid number '{}' not flagged",
            number
        );
    }

    #[test]
    fn luhn_invalid_16_digit_numbers_never_flagged(body in "[1-9][0-9]{14}") {
        let valid = with_luhn_check_digit(&body);
        // Bump the check digit: guaranteed to break the checksum.
        let last = valid.chars().last().unwrap().to_digit(10).unwrap();
        let broken = format!("{}{}", &valid[..valid.len() - 1], (last + 1) % 10);

        let input = format!("card {broken} here");
        let engine = FirewallEngine::new();
        let matches = engine.scan(&input);
        prop_assert!(
            !matches.iter().any(|m| m.kind == "Credit Card Number"),
            "Luhn-invalid number '{}' flagged as card",
            broken
        );
    }

    // ── Redacted output never leaks the secret body ───────────────────────

    #[test]
    fn redacted_output_never_contains_cloud_key(suffix in "[0-9A-Z]{16}") {
        let key = format!("AKIA{suffix}");
        let input = format!("credential {key} in log");
        let engine = FirewallEngine::new();
        let matches = engine.scan(&input);
        let redacted = redact(&input, &matches);
        prop_assert!(
            !redacted.contains(&key),
            "raw key survived redaction: {}",
            redacted
        );
    }

    // ── Match records always slice back to their value ────────────────────

    #[test]
    fn match_invariants_hold_on_arbitrary_text(text in ".{0,300}") {
        let engine = FirewallEngine::new();
        for m in engine.scan(&text) {
            prop_assert!(m.end() <= text.len());
            prop_assert_eq!(&text[m.start..m.end()], m.value.as_str());
            prop_assert_eq!(m.length, m.value.len());
        }
    }
}
