// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Opaque user identifiers.
//!
//! An id is 12 bytes rendered as 24 lowercase hex digits:
//! - 4 bytes: seconds since the Unix epoch (big-endian)
//! - 5 bytes: random value chosen once per generator
//! - 3 bytes: counter, seeded randomly, incremented per id
//!
//! Ids generated by one process therefore sort in creation order.

use chrono::{DateTime, Utc};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

const ID_BYTES: usize = 12;
const ID_HEX_LEN: usize = ID_BYTES * 2;
const COUNTER_MASK: u32 = 0x00ff_ffff;

/// A syntactically valid user id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Whether `raw` is a well-formed id (24 hex digits, either case).
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == ID_HEX_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Parse and normalize a caller-supplied id.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::is_valid(raw).then(|| Self(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Allocates fresh [`UserId`]s.
pub struct IdGenerator {
    process_bytes: [u8; 5],
    counter: AtomicU32,
}

impl IdGenerator {
    /// Create a generator with a random process component and counter seed.
    pub fn new() -> anyhow::Result<Self> {
        let rng = SystemRandom::new();
        let mut seed = [0u8; 8];
        rng.fill(&mut seed)
            .map_err(|_| anyhow::anyhow!("Failed to seed id generator"))?;

        let mut process_bytes = [0u8; 5];
        process_bytes.copy_from_slice(&seed[..5]);
        let counter = u32::from_be_bytes([0, seed[5], seed[6], seed[7]]);

        Ok(Self {
            process_bytes,
            counter: AtomicU32::new(counter),
        })
    }

    /// Allocate the next id, stamped with `now`.
    pub fn next_id(&self, now: DateTime<Utc>) -> UserId {
        let seconds = u32::try_from(now.timestamp()).unwrap_or(0);
        let count = self.counter.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;

        let mut bytes = [0u8; ID_BYTES];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(&self.process_bytes);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);

        UserId(hex::encode(bytes))
    }
}
