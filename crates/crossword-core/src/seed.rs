use std::sync::atomic::{AtomicU32, Ordering};

const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// FNV-1a hash of a string's UTF-16 code units.
///
/// Used to turn a date string such as `"2026-10-15"` into the base seed.
pub fn hash_str(s: &str) -> u32 {
    s.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ unit as u32).wrapping_mul(FNV_PRIME)
    })
}

/// Random seed for practice puzzles that are not tied to a date
pub fn random_seed() -> u32 {
    let mut seed_bytes = [0u8; 4];
    getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|err| {
        // Fallback: use a static counter if the entropy source is unavailable
        log::warn!("entropy source unavailable ({}), using counter seed", err);
        static COUNTER: AtomicU32 = AtomicU32::new(1);
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
        seed_bytes = counter.to_le_bytes();
    });
    u32::from_le_bytes(seed_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_offset_basis() {
        assert_eq!(hash_str(""), 2166136261);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(hash_str("a"), 0xE40C_292C);
        assert_eq!(hash_str("2026-10-15"), 1300187212);
        assert_eq!(hash_str("2024-01-01"), 1395918025);
    }

    #[test]
    fn test_order_sensitive() {
        assert_ne!(hash_str("2026-10-15"), hash_str("2026-15-10"));
    }

    #[test]
    fn test_hashes_utf16_units() {
        // U+00E9 is a single UTF-16 unit but two UTF-8 bytes
        let expected = (FNV_OFFSET_BASIS ^ 0xE9).wrapping_mul(FNV_PRIME);
        assert_eq!(hash_str("\u{e9}"), expected);
    }
}
