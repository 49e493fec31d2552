//! Snapshot to bar-chart mapping
//!
//! The mapping is pure: given the page's sequence, the latest snapshot and
//! the run state it decides the height and colour class of every bar. It
//! never fails, whatever the snapshot holds; highlights outside the
//! sequence are ignored and unfilled output slots render as empty bars.

use crate::algorithm::runner::{FinalResult, SearchVerdict};
use crate::algorithm::snapshot::{Detail, StepSnapshot};
use crate::render::palette::ColorClass;
use crate::session::state::RunState;

/// Visual attributes of one bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarVisual {
    /// Position in the row
    pub index: usize,
    /// Value shown, `None` for an unfilled slot
    pub value: Option<u32>,
    /// Height relative to the tallest value, in `[0, 1]`
    pub height: f32,
    /// Colour class
    pub class: ColorClass,
}

/// Everything the bar renderer reads
#[derive(Debug, Clone, Copy)]
pub struct BarView<'a> {
    /// Page sequence, shown when no snapshot exists yet
    pub sequence: &'a [u32],
    /// Latest published snapshot
    pub snapshot: Option<&'a StepSnapshot>,
    /// Lifecycle phase of the page
    pub state: RunState,
    /// Result of the last finished run
    pub result: Option<&'a FinalResult>,
}

impl BarView<'_> {
    /// Values currently on screen
    pub fn values(&self) -> &[u32] {
        match self.snapshot {
            Some(snapshot) if !snapshot.sequence.is_empty() => &snapshot.sequence,
            _ => self.sequence,
        }
    }

    /// Bars for the main sequence
    pub fn bars(&self) -> Vec<BarVisual> {
        let values = self.values();
        let scale = scale_for(values);

        values
            .iter()
            .enumerate()
            .map(|(index, &value)| BarVisual {
                index,
                value: Some(value),
                height: value as f32 / scale,
                class: self.class_of(index),
            })
            .collect()
    }

    /// Bars for the secondary output row of counting and radix sort
    ///
    /// Counting sort shows its output array with unplaced slots empty.
    /// Radix sort shows the values collected so far in the current pass,
    /// padded with empty slots to the sequence length. Other algorithms
    /// have no output row.
    pub fn output_bars(&self) -> Vec<BarVisual> {
        let Some(snapshot) = self.snapshot else {
            return Vec::new();
        };
        let scale = scale_for(self.values());

        let slots: Vec<Option<u32>> = match &snapshot.detail {
            Detail::Counting { output, .. } => output.clone(),
            Detail::Radix { collected, .. } => {
                let mut slots: Vec<Option<u32>> = collected.iter().copied().map(Some).collect();
                slots.resize(snapshot.sequence.len().max(slots.len()), None);
                slots
            }
            _ => return Vec::new(),
        };

        slots
            .into_iter()
            .enumerate()
            .map(|(index, value)| BarVisual {
                index,
                value,
                height: value.map_or(0.0, |v| v as f32 / scale),
                class: if value.is_some() {
                    ColorClass::Placing
                } else {
                    ColorClass::Empty
                },
            })
            .collect()
    }

    fn class_of(&self, index: usize) -> ColorClass {
        if self.state == RunState::Completed {
            return self.terminal_class(index);
        }

        let Some(snapshot) = self.snapshot else {
            return ColorClass::Default;
        };

        if let Some(role) = snapshot.role_of(index) {
            return ColorClass::from_role(role);
        }

        match snapshot.detail {
            Detail::Search { low, high, .. } => match high {
                Some(high) if (low..=high).contains(&index) => ColorClass::Default,
                _ => ColorClass::Eliminated,
            },
            _ => ColorClass::Default,
        }
    }

    fn terminal_class(&self, index: usize) -> ColorClass {
        match self.result.and_then(|result| result.verdict) {
            Some(SearchVerdict::Found(found)) if found == index => ColorClass::Found,
            Some(_) => ColorClass::Eliminated,
            None => ColorClass::Sorted,
        }
    }
}

fn scale_for(values: &[u32]) -> f32 {
    values.iter().copied().max().unwrap_or(0).max(1) as f32
}
