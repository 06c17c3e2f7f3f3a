//! Seeded string hashing for generated identifiers.
//!
//! Hashes are deterministic for a given `(value, seed)` pair and rendered in
//! lowercase base 36, so they can be embedded directly in a CSS class name.
//! They are not collision free: two distinct inputs may produce the same
//! output, in which case both share one generated rule.

use xxhash_rust::xxh32::xxh32;

/// Seeds used when deriving identifiers.
pub mod seeds {
    /// Seed for the property-name half of a class identifier.
    pub const PROPERTY: u32 = 12345;
    /// Seed for the value half of a class identifier.
    pub const VALUE: u32 = 54321;
    /// Seed for generated `@keyframes` names.
    pub const ANIMATION: u32 = 57482;
}

/// Hash a string with the given seed.
///
/// # Example
///
/// ```
/// use astyle_core::hash;
///
/// let a = hash("color", 12345);
/// assert_eq!(a, hash("color", 12345));
/// assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn hash(value: &str, seed: u32) -> String {
    to_base36(xxh32(value.as_bytes(), seed))
}

fn to_base36(mut n: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if n == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::with_capacity(7);
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    // Only ASCII digits were pushed.
    buf.into_iter().map(char::from).collect()
}
