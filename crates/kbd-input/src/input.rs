//! Keyboard input processor.
//!
//! Diffs each report against the previous one, translates the changed keys
//! and queues the results for the game loop.

use log::{debug, trace};

use crate::config::KeyboardConfig;
use crate::diff::{ReportDiffer, Transition, diff};
use crate::error::ConfigError;
use crate::queue::{EventQueue, KeyEvent};
use crate::report::KeyReport;
use crate::source::ReportSource;
use crate::translate::{DoomKeymap, Keymap};

/// Report-to-event translation core.
///
/// Owns the previous report and the event queue. The poll side calls
/// [`tick`](Self::tick) or [`process_report`](Self::process_report) once per
/// poll; the frame loop calls [`next_event`](Self::next_event) until it
/// returns `None`.
#[derive(Debug)]
pub struct KeyboardInput<K: Keymap = DoomKeymap> {
    differ: ReportDiffer,
    keymap: K,
    queue: EventQueue,
    config: KeyboardConfig,
}

impl KeyboardInput<DoomKeymap> {
    pub fn new(config: KeyboardConfig) -> Result<Self, ConfigError> {
        Self::with_keymap(config, DoomKeymap)
    }
}

impl Default for KeyboardInput<DoomKeymap> {
    fn default() -> Self {
        Self::from_valid_config(KeyboardConfig::default(), DoomKeymap)
    }
}

impl<K: Keymap> KeyboardInput<K> {
    /// Build with a custom keymap. Fails if `config` does not validate.
    pub fn with_keymap(config: KeyboardConfig, keymap: K) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config, keymap))
    }

    fn from_valid_config(config: KeyboardConfig, keymap: K) -> Self {
        Self {
            differ: ReportDiffer::new(),
            keymap,
            queue: config.build_queue(),
            config,
        }
    }

    /// Poll the transport once and process its report, if any.
    ///
    /// Returns the number of events queued.
    pub fn tick(&mut self, source: &mut dyn ReportSource) -> usize {
        match source.poll_report() {
            Some(report) => self.process_report(report),
            None => 0,
        }
    }

    /// Process a report against the previously seen one.
    ///
    /// Returns the number of events queued.
    pub fn process_report(&mut self, curr: KeyReport) -> usize {
        let transitions = self.differ.update(curr);
        self.enqueue_transitions(&transitions)
    }

    /// Process a report pair as delivered by a transport callback.
    ///
    /// `curr` becomes the remembered report for later
    /// [`process_report`](Self::process_report) calls.
    pub fn process_reports(&mut self, prev: &KeyReport, curr: &KeyReport) -> usize {
        let transitions = diff(prev, curr);
        self.differ.set_previous(*curr);
        self.enqueue_transitions(&transitions)
    }

    fn enqueue_transitions(&mut self, transitions: &[Transition]) -> usize {
        let mut queued = 0;
        for transition in transitions {
            let Some(code) = self.keymap.translate(transition.key) else {
                trace!("Unmapped key {} ignored", transition.key);
                continue;
            };
            let event = KeyEvent {
                pressed: transition.pressed,
                code,
            };
            debug!(
                "Key {} -> {} {}",
                transition.key,
                code,
                if event.pressed { "pressed" } else { "released" }
            );
            if self.queue.enqueue(event) {
                queued += 1;
            }
        }
        queued
    }

    /// Take the oldest pending event.
    pub fn next_event(&mut self) -> Option<KeyEvent> {
        self.queue.dequeue()
    }

    /// Number of events waiting for the game loop.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Events dropped by the queue since the last call.
    pub fn take_overflow(&mut self) -> usize {
        self.queue.take_overflow()
    }

    /// Drop pending events and forget held keys.
    ///
    /// Keys still held on the next report are delivered again as presses.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.differ.reset();
    }

    /// Report seen by the last poll.
    pub fn previous_report(&self) -> &KeyReport {
        self.differ.previous()
    }

    pub fn config(&self) -> &KeyboardConfig {
        &self.config
    }

    pub fn keymap(&self) -> &K {
        &self.keymap
    }
}
