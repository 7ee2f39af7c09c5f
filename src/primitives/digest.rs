//! 256-bit digest output: a 32-byte value with a `Display` impl that renders
//! it as plain lowercase contiguous hex, no separators.

use core::fmt::{self, Display, Formatter};

/// A finalized 256-bit HARMONIA digest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Digest(pub [u8; 32]);

impl Digest {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Digest(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex encoding, 64 characters, no separators.
    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(64);
        for b in self.0.iter() {
            use core::fmt::Write;
            // String's Write impl never fails.
            write!(s, "{:02x}", b).unwrap();
        }
        s
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Digest(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_unseparated() {
        let d = Digest([0xABu8; 32]);
        let hex = d.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn zero_digest_hex() {
        let d = Digest::default();
        assert_eq!(d.to_hex(), "0".repeat(64));
    }
}
