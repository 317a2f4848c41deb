//! Transport abstraction for keyboard reports.
//!
//! The PS/2 (or USB) driver owns sampling and debouncing; this side only asks
//! it for the latest complete report once per tick.

use std::collections::VecDeque;

use crate::modifiers::Modifiers;
use crate::report::{KeyReport, UsageId};

/// Source of keyboard reports.
pub trait ReportSource {
    /// Latest report if the transport produced one since the last call.
    fn poll_report(&mut self) -> Option<KeyReport>;
}

/// Scripted report source for testing and host-side simulation.
///
/// `press`/`release`/`set_modifiers` derive the next report from the last
/// queued (or last delivered) one, like a virtual keyboard.
#[derive(Debug, Default)]
pub struct VirtualReportSource {
    pending: VecDeque<KeyReport>,
    current: KeyReport,
}

impl VirtualReportSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a report verbatim.
    pub fn push(&mut self, report: KeyReport) {
        self.current = report;
        self.pending.push_back(report);
    }

    /// Queue a report with `key` added. The key is not held if six keys
    /// already are.
    pub fn press(&mut self, key: UsageId) {
        let mut next = self.current;
        next.keys.insert(key);
        self.push(next);
    }

    pub fn release(&mut self, key: UsageId) {
        let mut next = self.current;
        next.keys.remove(key);
        self.push(next);
    }

    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        let mut next = self.current;
        next.modifiers = modifiers;
        self.push(next);
    }

    /// Report the next poll will see last.
    pub fn current(&self) -> &KeyReport {
        &self.current
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl ReportSource for VirtualReportSource {
    fn poll_report(&mut self) -> Option<KeyReport> {
        self.pending.pop_front()
    }
}
