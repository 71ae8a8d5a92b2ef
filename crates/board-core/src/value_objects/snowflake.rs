//! Snowflake ID - 64-bit time-ordered unique identifier used for post ids
//!
//! Structure:
//! - Bits 63-22: Timestamp (milliseconds since custom epoch)
//! - Bits 21-12: Worker ID (0-1023)
//! - Bits 11-0:  Sequence number (0-4095)

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const WORKER_BITS: u32 = 10;
const SEQUENCE_BITS: u32 = 12;
const MAX_WORKER_ID: u16 = (1 << WORKER_BITS) - 1;
const MAX_SEQUENCE: i64 = (1 << SEQUENCE_BITS) - 1;
const TIMESTAMP_SHIFT: u32 = WORKER_BITS + SEQUENCE_BITS;

/// Time-ordered 64-bit identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Custom epoch: 2024-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_704_067_200_000;

    /// Create a new Snowflake from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Extract timestamp (milliseconds since Unix epoch)
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> TIMESTAMP_SHIFT) + Self::EPOCH
    }

    /// Extract worker ID (0-1023)
    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> SEQUENCE_BITS) & i64::from(MAX_WORKER_ID)) as u16
    }

    /// Extract sequence number (0-4095)
    #[inline]
    pub fn sequence(&self) -> u16 {
        (self.0 & MAX_SEQUENCE) as u16
    }

    /// Parse the canonical decimal form produced by `Display`.
    ///
    /// Signs, leading zeros and negative values are rejected so that a parsed
    /// id always prints back to the same token.
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        if !canonical {
            return Err(SnowflakeParseError::InvalidFormat);
        }
        s.parse::<i64>()
            .map(Snowflake)
            .map_err(|_| SnowflakeParseError::OutOfRange)
    }

    fn compose(elapsed: i64, worker_id: u16, sequence: i64) -> Self {
        Self((elapsed << TIMESTAMP_SHIFT) | (i64::from(worker_id) << SEQUENCE_BITS) | sequence)
    }
}

/// Error when parsing a Snowflake from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
    #[error("snowflake out of range")]
    OutOfRange,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Thread-safe Snowflake ID generator
///
/// Every id returned by one generator is strictly greater than the previous one,
/// independent of clock resolution. A clock that steps backwards keeps issuing
/// from the last observed millisecond until the sequence space is exhausted.
pub struct SnowflakeGenerator {
    worker_id: u16,
    last_issued: AtomicI64,
}

impl SnowflakeGenerator {
    /// Create a new generator with the given worker ID
    ///
    /// # Panics
    /// Panics if worker_id >= 1024
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id <= MAX_WORKER_ID, "Worker ID must be < 1024");
        Self {
            worker_id,
            last_issued: AtomicI64::new(0),
        }
    }

    /// Generate a new unique Snowflake ID
    pub fn generate(&self) -> Snowflake {
        loop {
            let last = self.last_issued.load(Ordering::Acquire);
            let last_elapsed = last >> TIMESTAMP_SHIFT;
            let elapsed = (current_timestamp() - Snowflake::EPOCH).max(last_elapsed);

            let next = if elapsed > last_elapsed {
                Snowflake::compose(elapsed, self.worker_id, 0)
            } else {
                let sequence = (last & MAX_SEQUENCE) + 1;
                if sequence > MAX_SEQUENCE {
                    // Sequence exhausted for this millisecond
                    std::hint::spin_loop();
                    continue;
                }
                Snowflake::compose(last_elapsed, self.worker_id, sequence)
            };

            if self
                .last_issued
                .compare_exchange(last, next.0, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                return next;
            }
        }
    }

    /// Resume after an id that was issued before this generator existed.
    ///
    /// Later ids come from the same millisecond or after, so a clock that
    /// reads earlier than `id` cannot reproduce it.
    pub fn observe(&self, id: Snowflake) {
        self.last_issued.fetch_max(id.0, Ordering::AcqRel);
    }

    /// Get the worker ID of this generator
    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for SnowflakeGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowflakeGenerator")
            .field("worker_id", &self.worker_id)
            .finish_non_exhaustive()
    }
}

/// Current timestamp in milliseconds since Unix epoch
#[inline]
fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
