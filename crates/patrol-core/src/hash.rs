//! FNV-1a fingerprinting for simulation state.
//!
//! Used for fast equality checks in determinism tests and when comparing
//! two runs. Not cryptographically secure.

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Incremental FNV-1a 64-bit hasher.
///
/// Starts from the offset basis, so an empty fingerprint is non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// A fresh fingerprint at the FNV-1a offset basis.
    pub fn new() -> Self {
        Self(FNV_OFFSET)
    }

    /// Feed a single byte.
    #[inline]
    pub fn byte(&mut self, byte: u8) -> &mut Self {
        self.0 = (self.0 ^ byte as u64).wrapping_mul(FNV_PRIME);
        self
    }

    /// Feed a byte slice.
    pub fn bytes(&mut self, bytes: &[u8]) -> &mut Self {
        for &b in bytes {
            self.byte(b);
        }
        self
    }

    /// Feed a `u32` as 4 little-endian bytes.
    pub fn u32(&mut self, v: u32) -> &mut Self {
        self.bytes(&v.to_le_bytes())
    }

    /// Feed a `u64` as 8 little-endian bytes.
    pub fn u64(&mut self, v: u64) -> &mut Self {
        self.bytes(&v.to_le_bytes())
    }

    /// The current hash value.
    pub fn finish(&self) -> u64 {
        self.0
    }
}

impl Default for Fingerprint {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_offset_basis() {
        assert_eq!(Fingerprint::new().finish(), FNV_OFFSET);
    }

    #[test]
    fn known_vector() {
        // FNV-1a("a") = 0xaf63dc4c8601ec8c
        let mut h = Fingerprint::new();
        h.byte(b'a');
        assert_eq!(h.finish(), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn order_matters() {
        let mut a = Fingerprint::new();
        a.bytes(&[1, 2]);
        let mut b = Fingerprint::new();
        b.bytes(&[2, 1]);
        assert_ne!(a.finish(), b.finish());
    }

    #[test]
    fn u32_is_little_endian_bytes() {
        let mut a = Fingerprint::new();
        a.u32(0x0403_0201);
        let mut b = Fingerprint::new();
        b.bytes(&[1, 2, 3, 4]);
        assert_eq!(a, b);
    }
}
