//! Time-ordered unique identifier generation.
//!
//! An identifier is the base-36 epoch-millisecond timestamp followed by a
//! base-36 random suffix drawn from a secure entropy source:
//!
//! ```text
//! loyw3v28 2rrvthnxtr
//! ^^^^^^^^ ^^^^^^^^^^
//! millis   6 random bytes, big-endian
//! ```
//!
//! Identifiers minted in later milliseconds sort after earlier ones as long
//! as the timestamp keeps the same number of base-36 digits. Identifiers
//! minted in the same millisecond differ by their random suffix, so no
//! counter or lock is needed.

pub mod base36;

use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

use rand::{rngs::OsRng, RngCore};
use serde::Serialize;

/// Number of random bytes drawn per identifier.
const RANDOM_BYTES: usize = 6;

/// The random suffix is kept to its low 54 bits.
const RANDOM_MASK: u64 = (1 << 54) - 1;

/// Errors that can occur while minting an identifier.
#[derive(Debug, thiserror::Error)]
pub enum UidError {
    #[error("random source unavailable: {0}")]
    RandomSourceUnavailable(#[source] rand::Error),
}

/// Source of wall-clock time in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// Reads the system clock. A clock set before 1970 reads as `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Cryptographically secure byte source, shared by all requests.
pub trait EntropySource: Send + Sync {
    fn fill(&self, dest: &mut [u8]) -> Result<(), rand::Error>;
}

/// Operating-system RNG (`getrandom` under the hood).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), rand::Error> {
        OsRng.try_fill_bytes(dest)
    }
}

/// A generated identifier. Serializes as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Uid(String);

impl Uid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Uid> for String {
    fn from(uid: Uid) -> Self {
        uid.0
    }
}

/// Mints [`Uid`]s from an injected clock and entropy source.
///
/// Both dependencies are passed in rather than reached for globally, so
/// tests can pin the timestamp and the random bytes.
pub struct UidGenerator {
    clock: Box<dyn Clock>,
    entropy: Box<dyn EntropySource>,
}

impl UidGenerator {
    pub fn new(clock: impl Clock + 'static, entropy: impl EntropySource + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            entropy: Box::new(entropy),
        }
    }

    /// Generator backed by the system clock and the OS RNG.
    pub fn system() -> Self {
        Self::new(SystemClock, OsEntropy)
    }

    /// Mint a new identifier.
    ///
    /// # Errors
    /// Returns [`UidError::RandomSourceUnavailable`] if the entropy source
    /// cannot supply bytes. The call is never retried.
    pub fn generate(&self) -> Result<Uid, UidError> {
        let millis = self.clock.now_millis();

        let mut bytes = [0u8; RANDOM_BYTES];
        self.entropy
            .fill(&mut bytes)
            .map_err(UidError::RandomSourceUnavailable)?;

        let random = bytes
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
            & RANDOM_MASK;

        let mut id = base36::encode(millis);
        id.push_str(&base36::encode(random));
        Ok(Uid(id))
    }
}

impl fmt::Debug for UidGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UidGenerator").finish_non_exhaustive()
    }
}
