//! Deterministic client-IP hashing for the IP-hash strategy
//!
//! The exact recurrence is part of the contract: `h = h*31 + char`,
//! wrapped to the 32-bit signed range, then the absolute value. The demo
//! relies on the same input mapping to the same server within and across
//! runs, so the overflow-wrap behavior must not change.

/// Hash an arbitrary client identifier string to a non-negative bucket
/// value.
///
/// Input is not validated: malformed free-text "IP addresses" are hashed
/// as-is. Iterates UTF-16 code units so that the result matches the
/// reference fixtures for non-ASCII input too.
pub fn hash_client_ip(input: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in input.encode_utf16() {
        // h*31 + c, with 32-bit signed wraparound
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_fixture() {
        // Cross-implementation conformance fixture: this exact value must
        // hold on every port of the demo.
        assert_eq!(hash_client_ip("192.168.1.42"), 1_734_945_306);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(hash_client_ip(""), 0);
        assert_eq!(hash_client_ip("hello"), 99_162_322);
        assert_eq!(hash_client_ip("10.0.0.1"), 511_552_166);
        assert_eq!(hash_client_ip("127.0.0.1"), 1_505_998_205);
    }

    #[test]
    fn test_deterministic() {
        let ip = "203.0.113.77";
        assert_eq!(hash_client_ip(ip), hash_client_ip(ip));
    }

    #[test]
    fn test_arbitrary_text_is_accepted() {
        // Free text is hashed, never rejected
        assert_eq!(hash_client_ip("not an ip at all!"), 1_807_243_334);
    }

    #[test]
    fn test_output_is_nonnegative_for_wrapping_inputs() {
        // Long inputs wrap through the negative range; the absolute value
        // keeps the bucket index usable.
        let long: String = std::iter::repeat('z').take(1000).collect();
        let _ = hash_client_ip(&long);
    }
}
