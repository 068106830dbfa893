use anchor_lang::prelude::*;
use arrayref::array_ref;

use crate::error::TicketDeskError;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

// SlotHashes sysvar layout: u64 entry count, then (u64 slot, [u8; 32] hash) entries.
const FIRST_HASH_OFFSET: usize = 16;
const HASH_LEN: usize = 32;

/// Splitmix64 stream used to draw quick-pick numbers.
///
/// On-chain the seed mixes the most recent slot hash with the clock and the
/// session address, so two sessions picking in the same slot diverge.
#[derive(Clone, Debug)]
pub struct Entropy {
    state: u64,
}

impl Entropy {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seeds a stream from raw SlotHashes sysvar data.
    ///
    /// # Errors
    /// - `InvalidSlotHashesAccount` if the data does not hold at least one hash
    pub fn from_slot_hashes(data: &[u8], timestamp: i64, salt: &[u8; 32]) -> Result<Self> {
        require!(
            data.len() >= FIRST_HASH_OFFSET + HASH_LEN,
            TicketDeskError::InvalidSlotHashesAccount
        );
        let hash = array_ref![data, FIRST_HASH_OFFSET, HASH_LEN];

        let mut seed = mix(timestamp as u64, GOLDEN_GAMMA);
        for chunk in hash.chunks_exact(8).chain(salt.chunks_exact(8)) {
            let word = u64::from_le_bytes(*array_ref![chunk, 0, 8]);
            seed = mix(seed, word);
        }

        Ok(Self::new(seed))
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        mix(self.state, 0)
    }

    /// Uniform value in `[0, range)`.
    pub fn below(&mut self, range: u64) -> Result<u64> {
        let value = self.next_u64();
        unbiased_range(value, range)
    }

    /// Draws `count` distinct numbers from `[1, size]` by shuffling the first
    /// `count` slots of the pool (partial Fisher-Yates). Order is the draw order.
    pub fn sample_distinct(&mut self, size: u8, count: u8) -> Result<Vec<u8>> {
        let count = count.min(size) as usize;
        let mut pool: Vec<u8> = (1..=size).collect();

        for i in 0..count {
            let remaining = (pool.len() - i) as u64;
            let j = i + self.below(remaining)? as usize;
            pool.swap(i, j);
        }

        pool.truncate(count);
        Ok(pool)
    }
}

/// Splitmix64 finalizer over the sum of both inputs.
fn mix(a: u64, b: u64) -> u64 {
    let mut z = a.wrapping_add(b);

    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Maps a random value onto `[0, range)`, rejecting the biased tail a bounded
/// number of times.
fn unbiased_range(x: u64, range: u64) -> Result<u64> {
    if range == 0 {
        return Err(TicketDeskError::Overflow.into());
    }

    if range.is_power_of_two() {
        return Ok(x & (range - 1));
    }

    let threshold = u64::MAX - (u64::MAX % range);
    let mut value = x;

    const MAX_ATTEMPTS: u8 = 3;

    for i in 0..MAX_ATTEMPTS {
        if value < threshold {
            return Ok(value % range);
        }
        value = mix(value, value.wrapping_add(i as u64 + 1));
    }

    Ok(value % range)
}
