use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Wait out an artificial backend latency. Zero delays return immediately.
pub async fn simulate_latency(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    tokio::time::sleep(delay).await;
}

/// Source of the random numbers used for minted identifiers and simulated photo readings.
pub trait RandomSource: Send + Sync {
    fn next_u64(&self) -> u64;

    /// Uniform-ish value in `[low, high)`. Returns `low` when the range is empty.
    fn next_in(&self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        let span = u64::from(high - low);
        low + (self.next_u64() % span) as u32
    }
}

/// Lock-free LCG + xorshift generator. Seeded from the clock in production and from a
/// fixed seed in tests so minted IDs are reproducible.
#[derive(Debug)]
pub struct SeededRandom {
    state: AtomicU64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self {
            state: AtomicU64::new(state),
        }
    }

    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(nanos)
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::from_clock()
    }
}

fn step(state: u64) -> u64 {
    state
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407)
}

impl RandomSource for SeededRandom {
    fn next_u64(&self) -> u64 {
        let previous = match self
            .state
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |state| {
                Some(step(state))
            }) {
            Ok(value) | Err(value) => value,
        };

        let mut x = step(previous);
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }
}
