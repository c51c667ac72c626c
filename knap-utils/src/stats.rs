use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Arithmetic mean of `samples`, or `None` when there are none.
pub fn mean_duration(samples: &[Duration]) -> Option<Duration> {
    if samples.is_empty() {
        return None;
    }
    let total_nanos: u128 = samples.iter().map(|d| d.as_nanos()).sum();
    let mean_nanos = total_nanos / samples.len() as u128;
    Some(Duration::new(
        (mean_nanos / 1_000_000_000) as u64,
        (mean_nanos % 1_000_000_000) as u32,
    ))
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RuntimeStats {
    pub samples: usize,
    pub mean: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl RuntimeStats {
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        let mean = mean_duration(samples)?;
        let min = samples.iter().min().copied()?;
        let max = samples.iter().max().copied()?;
        Some(Self {
            samples: samples.len(),
            mean,
            min,
            max,
        })
    }
}

/// Formats a duration with a unit suited to its magnitude, e.g. `12.345ms`.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 1_000 {
        format!("{}ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.3}µs", nanos as f64 / 1e3)
    } else if nanos < 1_000_000_000 {
        format!("{:.3}ms", nanos as f64 / 1e6)
    } else {
        format!("{:.3}s", d.as_secs_f64())
    }
}
