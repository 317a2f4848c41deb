//! Report differ.
//!
//! Turns two consecutive report snapshots into the ordered list of key
//! transitions between them: modifier bits first, then newly pressed keys,
//! then released keys. Keys held in both snapshots produce nothing.

use crate::modifiers::{Modifiers, modifier_usage};
use crate::report::{KeyReport, UsageId};

/// A change in held state of one physical key between two reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub key: UsageId,
    pub pressed: bool,
}

impl Transition {
    pub fn press(key: UsageId) -> Self {
        Self { key, pressed: true }
    }

    pub fn release(key: UsageId) -> Self {
        Self {
            key,
            pressed: false,
        }
    }
}

/// Compute the transitions from `prev` to `curr`.
///
/// Modifier transitions are emitted in [`Modifiers::SCAN_ORDER`], each carrying
/// the usage of its own physical key. Presses follow `curr` slot order and
/// releases follow `prev` slot order.
pub fn diff(prev: &KeyReport, curr: &KeyReport) -> Vec<Transition> {
    let mut transitions = Vec::new();

    let changed = prev.modifiers.symmetric_difference(curr.modifiers);
    if !changed.is_empty() {
        for flag in Modifiers::SCAN_ORDER {
            if !changed.contains(flag) {
                continue;
            }
            if let Some(key) = modifier_usage(flag) {
                transitions.push(Transition {
                    key,
                    pressed: curr.modifiers.contains(flag),
                });
            }
        }
    }

    for key in curr.keys.iter() {
        if !prev.keys.contains(key) {
            transitions.push(Transition::press(key));
        }
    }

    for key in prev.keys.iter() {
        if !curr.keys.contains(key) {
            transitions.push(Transition::release(key));
        }
    }

    transitions
}

/// Differ that owns the previously seen report.
#[derive(Debug, Clone, Default)]
pub struct ReportDiffer {
    previous: KeyReport,
}

impl ReportDiffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diff `curr` against the last report and remember it for the next call.
    pub fn update(&mut self, curr: KeyReport) -> Vec<Transition> {
        let transitions = diff(&self.previous, &curr);
        self.previous = curr;
        transitions
    }

    /// Replace the remembered report without emitting transitions.
    pub fn set_previous(&mut self, report: KeyReport) {
        self.previous = report;
    }

    pub fn previous(&self) -> &KeyReport {
        &self.previous
    }

    /// Forget held state. Keys still down are reported again as presses.
    pub fn reset(&mut self) {
        self.previous = KeyReport::EMPTY;
    }
}
