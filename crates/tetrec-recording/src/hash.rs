//! Header checksum.
//!
//! Uses FNV-1a for a fast, deterministic integrity check of the header
//! bytes. Not cryptographically secure: it catches corruption, not
//! tampering.

use std::io::{self, Read};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Incremental FNV-1a hash state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fnv1a(u64);

impl Fnv1a {
    /// Fresh state, seeded with the offset basis.
    pub fn new() -> Self {
        Self(FNV_OFFSET)
    }

    /// Feed bytes into the hash.
    #[inline]
    pub fn update(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 ^ b as u64).wrapping_mul(FNV_PRIME);
        }
    }

    /// Current hash value.
    pub fn finish(&self) -> u64 {
        self.0
    }
}

impl Default for Fnv1a {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash a complete byte slice.
pub fn checksum(bytes: &[u8]) -> u64 {
    let mut hash = Fnv1a::new();
    hash.update(bytes);
    hash.finish()
}

/// A `Read` adapter that hashes every byte passing through it.
pub struct HashingReader<'a> {
    inner: &'a mut dyn Read,
    hash: Fnv1a,
}

impl<'a> HashingReader<'a> {
    /// Wrap a reader.
    pub fn new(inner: &'a mut dyn Read) -> Self {
        Self {
            inner,
            hash: Fnv1a::new(),
        }
    }

    /// Hash of everything read so far.
    pub fn finish(&self) -> u64 {
        self.hash.finish()
    }
}

impl Read for HashingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.hash.update(&buf[..n]);
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_fnv_offset() {
        assert_eq!(checksum(&[]), FNV_OFFSET);
    }

    #[test]
    fn known_vector() {
        // FNV-1a 64 of "a".
        assert_eq!(checksum(b"a"), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn byte_order_matters() {
        assert_ne!(checksum(&[1, 2]), checksum(&[2, 1]));
    }

    #[test]
    fn incremental_matches_one_shot() {
        let mut hash = Fnv1a::new();
        hash.update(b"tet");
        hash.update(b"rion");
        assert_eq!(hash.finish(), checksum(b"tetrion"));
    }

    #[test]
    fn hashing_reader_sees_all_bytes() {
        let data = b"some header bytes";
        let mut src = data.as_slice();
        let mut reader = HashingReader::new(&mut src);
        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();
        assert_eq!(out, data);
        assert_eq!(reader.finish(), checksum(data));
    }
}
