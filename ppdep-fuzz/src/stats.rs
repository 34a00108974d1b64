//! Throughput reporting.

use std::fmt;
use std::time::Duration;

/// Comparisons performed over a wall-clock interval.
#[derive(Debug, Clone, Copy)]
pub struct Throughput {
    pub tests: usize,
    pub elapsed: Duration,
}

impl Throughput {
    /// Comparisons per second; `0.0` for an empty interval.
    pub fn per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.tests as f64 / secs
        }
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tests in {:.3} s ({:.2} M tests/s)",
            format_number(self.tests),
            self.elapsed.as_secs_f64(),
            self.per_second() / 1_000_000.0
        )
    }
}

/// Format a number with thousand separators.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
