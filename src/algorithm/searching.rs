//! Stepwise searching algorithms
//!
//! Each probe of a value is one `Probe` step and one comparison. A probe
//! that hits the target is published with the `Found` role. All variants
//! except linear search expect non-decreasing input.

use std::ops::ControlFlow;

use crate::algorithm::snapshot::{Detail, Highlight, Role, StepKind};
use crate::algorithm::stepper::{Flow, Stepper};

/// Supported searching algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    /// Scan left to right
    Linear,
    /// Halve the interval around a floor midpoint
    Binary,
    /// Jump in blocks of `floor(sqrt(n))`, then scan the block
    Jump,
    /// Double a bound until it passes the target, then binary search
    Exponential,
    /// Split the interval into thirds with two probes
    Ternary,
    /// Probe at Fibonacci-number offsets
    Fibonacci,
}

impl SearchAlgorithm {
    /// Every searching algorithm
    pub const ALL: [Self; 6] = [
        Self::Linear,
        Self::Binary,
        Self::Jump,
        Self::Exponential,
        Self::Ternary,
        Self::Fibonacci,
    ];

    /// Whether the input must be sorted for the search to be correct
    pub const fn requires_sorted(self) -> bool {
        !matches!(self, Self::Linear)
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear search",
            Self::Binary => "binary search",
            Self::Jump => "jump search",
            Self::Exponential => "exponential search",
            Self::Ternary => "ternary search",
            Self::Fibonacci => "fibonacci search",
        }
    }
}

/// Search `values` for `target`, publishing a snapshot for every probe
///
/// Continues with `Some(index)` on a hit and `None` once the search space
/// is exhausted; breaks if the run was cancelled.
pub fn search(
    algorithm: SearchAlgorithm,
    values: &[u32],
    target: u32,
    stepper: &mut Stepper<'_>,
) -> Flow<Option<usize>> {
    stepper.checkpoint()?;

    if values.is_empty() {
        return ControlFlow::Continue(None);
    }

    let mut probe = Prober {
        values,
        target,
        stepper,
    };
    match algorithm {
        SearchAlgorithm::Linear => probe.linear(),
        SearchAlgorithm::Binary => probe.binary_within(0, values.len() - 1),
        SearchAlgorithm::Jump => probe.jump(),
        SearchAlgorithm::Exponential => probe.exponential(),
        SearchAlgorithm::Ternary => probe.ternary(),
        SearchAlgorithm::Fibonacci => probe.fibonacci(),
    }
}

struct Prober<'s, 'a> {
    values: &'s [u32],
    target: u32,
    stepper: &'s mut Stepper<'a>,
}

impl Prober<'_, '_> {
    fn value(&self, index: usize) -> u32 {
        self.values.get(index).copied().unwrap_or(0)
    }

    /// Probe `index` within the window `low..=high` and return its value
    fn probe(&mut self, index: usize, low: usize, high: usize, bounds: &[usize]) -> Flow<u32> {
        let value = self.value(index);
        let role = if value == self.target {
            Role::Found
        } else {
            Role::Probe
        };

        let mut highlights: Vec<Highlight> = bounds
            .iter()
            .map(|&b| Highlight::new(b, Role::Bound))
            .collect();
        highlights.push(Highlight::new(index, role));

        self.stepper.step(
            StepKind::Probe,
            self.values,
            highlights,
            Detail::Search {
                low,
                high: Some(high),
                target: self.target,
            },
        )?;
        ControlFlow::Continue(value)
    }

    fn linear(&mut self) -> Flow<Option<usize>> {
        let last = self.values.len() - 1;
        for i in 0..self.values.len() {
            if self.probe(i, i, last, &[])? == self.target {
                return ControlFlow::Continue(Some(i));
            }
        }
        ControlFlow::Continue(None)
    }

    fn binary_within(&mut self, mut low: usize, mut high: usize) -> Flow<Option<usize>> {
        while low <= high {
            let mid = low + (high - low) / 2;
            let value = self.probe(mid, low, high, &[low, high])?;

            if value == self.target {
                return ControlFlow::Continue(Some(mid));
            }
            if value < self.target {
                low = mid + 1;
            } else if mid == 0 {
                break;
            } else {
                high = mid - 1;
            }
        }
        ControlFlow::Continue(None)
    }

    fn jump(&mut self) -> Flow<Option<usize>> {
        let n = self.values.len();
        let block = n.isqrt().max(1);
        let mut start = 0;
        let mut end = block.min(n);

        loop {
            let last = end - 1;
            let value = self.probe(last, start, last, &[start])?;
            if value == self.target {
                return ControlFlow::Continue(Some(last));
            }
            if value > self.target {
                break;
            }
            start = end;
            if start >= n {
                return ControlFlow::Continue(None);
            }
            end = (end + block).min(n);
        }

        // The block's last element is already known to be larger
        for i in start..end - 1 {
            let value = self.probe(i, i, end - 1, &[start, end - 1])?;
            if value == self.target {
                return ControlFlow::Continue(Some(i));
            }
            if value > self.target {
                break;
            }
        }
        ControlFlow::Continue(None)
    }

    fn exponential(&mut self) -> Flow<Option<usize>> {
        let n = self.values.len();
        let first = self.probe(0, 0, n - 1, &[])?;
        if first == self.target {
            return ControlFlow::Continue(Some(0));
        }
        if first > self.target {
            return ControlFlow::Continue(None);
        }

        let mut bound = 1;
        while bound < n {
            let value = self.probe(bound, bound / 2, n - 1, &[bound / 2])?;
            if value == self.target {
                return ControlFlow::Continue(Some(bound));
            }
            if value > self.target {
                break;
            }
            bound *= 2;
        }

        // Everything up to bound / 2 is known to be smaller than the target
        let low = bound / 2 + 1;
        let high = bound.min(n) - 1;
        if low > high {
            return ControlFlow::Continue(None);
        }
        self.binary_within(low, high)
    }

    fn ternary(&mut self) -> Flow<Option<usize>> {
        let mut low = 0;
        let mut high = self.values.len() - 1;

        while low <= high {
            let third = (high - low) / 3;
            let first = low + third;
            let second = high - third;

            let at_first = self.probe(first, low, high, &[low, high])?;
            if at_first == self.target {
                return ControlFlow::Continue(Some(first));
            }
            if first == second {
                break;
            }
            let at_second = self.probe(second, low, high, &[low, high, first])?;
            if at_second == self.target {
                return ControlFlow::Continue(Some(second));
            }

            if self.target < at_first {
                if first == 0 {
                    break;
                }
                high = first - 1;
            } else if self.target > at_second {
                low = second + 1;
            } else {
                low = first + 1;
                if second == 0 {
                    break;
                }
                high = second - 1;
            }
        }
        ControlFlow::Continue(None)
    }

    fn fibonacci(&mut self) -> Flow<Option<usize>> {
        let n = self.values.len();
        let (mut fib2, mut fib1) = (0usize, 1usize);
        let mut fib = fib1 + fib2;
        while fib < n {
            fib2 = fib1;
            fib1 = fib;
            fib = fib1 + fib2;
        }

        // Number of leading elements known to be smaller than the target
        let mut eliminated = 0;
        while fib > 1 && eliminated < n {
            let index = (eliminated + fib2).min(n) - 1;
            let high = (eliminated + fib - 1).min(n - 1);
            let value = self.probe(index, eliminated, high, &[eliminated])?;

            if value < self.target {
                fib = fib1;
                fib1 = fib2;
                fib2 = fib - fib1;
                eliminated = index + 1;
            } else if value > self.target {
                fib = fib2;
                fib1 -= fib2;
                fib2 = fib - fib1;
            } else {
                return ControlFlow::Continue(Some(index));
            }
        }

        if fib1 == 1 && eliminated < n {
            let value = self.probe(eliminated, eliminated, eliminated, &[])?;
            if value == self.target {
                return ControlFlow::Continue(Some(eliminated));
            }
        }
        ControlFlow::Continue(None)
    }
}
