//! Store object identifiers.
//!
//! Every stored record carries a 12-byte identifier rendered as a 24-character
//! lowercase hex string, assigned once at insertion and never reassigned.
//! Layout follows the document-store convention: a 4-byte big-endian seconds
//! timestamp, 5 bytes of per-process random, and a 3-byte rolling counter.

use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Random bytes fixed for the lifetime of the process.
static PROCESS_RANDOM: Lazy<[u8; 5]> = Lazy::new(rand::random);

/// Rolling counter, seeded randomly so ids don't collide across restarts
/// within the same second.
static COUNTER: Lazy<AtomicU32> = Lazy::new(|| AtomicU32::new(rand::random()));

/// Candidate string is not a 24-character hex identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid object id: expected a 24-character hex string")]
pub struct InvalidObjectId;

/// A store-assigned record identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0);
        let count = COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut bytes = [0u8; 12];
        bytes[0..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(&*PROCESS_RANDOM);
        bytes[9..12].copy_from_slice(&count.to_be_bytes()[1..4]);
        ObjectId(bytes)
    }

    /// Parse a 24-character hex string. Both hex cases are accepted; the
    /// canonical rendering is lowercase.
    pub fn parse_str(candidate: &str) -> Result<Self, InvalidObjectId> {
        if candidate.len() != 24 {
            return Err(InvalidObjectId);
        }
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(candidate, &mut bytes).map_err(|_| InvalidObjectId)?;
        Ok(ObjectId(bytes))
    }

    /// Whether `candidate` is a well-formed identifier. Pure and total:
    /// never fails, false on any malformed input.
    pub fn is_valid(candidate: &str) -> bool {
        Self::parse_str(candidate).is_ok()
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({self})")
    }
}

impl FromStr for ObjectId {
    type Err = InvalidObjectId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn accepts_well_formed_hex() {
        assert!(ObjectId::is_valid("5f8b5ab85660f25bd382cfd6"));
        assert!(ObjectId::is_valid("000000000000000000000000"));
        assert!(ObjectId::is_valid("ffffffffffffffffffffffff"));
        // Mixed case decodes too.
        assert!(ObjectId::is_valid("5F8B5AB85660F25BD382CFD6"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(!ObjectId::is_valid(""));
        assert!(!ObjectId::is_valid("abc"));
        assert!(!ObjectId::is_valid("5f8b5ab85660f25bd382cfd")); // 23 chars
        assert!(!ObjectId::is_valid("5f8b5ab85660f25bd382cfd65")); // 25 chars
        assert!(!ObjectId::is_valid("5f8b5ab85660f25bd382cfg6")); // 'g' is not hex
        assert!(!ObjectId::is_valid("zzzzzzzzzzzzzzzzzzzzzzzz"));
        assert!(!ObjectId::is_valid("5f8b5ab8-5660-f25b-d382c")); // punctuation
    }

    #[test]
    fn rejects_every_wrong_length() {
        for len in 0..48 {
            let candidate = "a".repeat(len);
            assert_eq!(ObjectId::is_valid(&candidate), len == 24, "length {len}");
        }
    }

    #[test]
    fn display_round_trips() {
        let id = ObjectId::new();
        let rendered = id.to_string();
        assert_eq!(rendered.len(), 24);
        assert!(rendered.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(rendered.parse::<ObjectId>().unwrap(), id);
    }

    #[test]
    fn generated_ids_are_distinct() {
        let ids: HashSet<String> = (0..1000).map(|_| ObjectId::new().to_string()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn parse_rejects_then_accepts() {
        assert_eq!(ObjectId::parse_str("nope"), Err(InvalidObjectId));
        let id = ObjectId::parse_str("5f8b5ab85660f25bd382cfd6").unwrap();
        assert_eq!(id.to_string(), "5f8b5ab85660f25bd382cfd6");
    }
}
