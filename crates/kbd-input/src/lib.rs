//! Keyboard report to key event translation.
//!
//! A keyboard transport delivers periodic snapshots of every key currently
//! held. This crate turns consecutive snapshots into an ordered stream of
//! press/release events in the game's own key codes:
//!
//! - [`diff`]: transitions between two [`KeyReport`]s
//! - [`Keymap`] / [`DoomKeymap`]: physical usage to [`AppKey`] translation
//! - [`EventQueue`]: FIFO between the poll tick and the frame loop
//! - [`KeyboardInput`]: owns all of the above for one keyboard
//!
//! ```
//! use kbd_input::{AppKey, KeyEvent, KeyReport, KeyboardInput};
//!
//! let mut input = KeyboardInput::default();
//! input.process_report(KeyReport::with_keys(&[0x04]));
//! assert_eq!(input.next_event(), Some(KeyEvent::press(AppKey(b'a'))));
//! assert_eq!(input.next_event(), None);
//! ```

pub mod config;
pub mod diff;
pub mod error;
pub mod input;
pub mod modifiers;
pub mod queue;
pub mod report;
pub mod source;
pub mod translate;

pub use config::KeyboardConfig;
pub use diff::{ReportDiffer, Transition, diff};
pub use error::ConfigError;
pub use input::KeyboardInput;
pub use modifiers::Modifiers;
pub use queue::{EventQueue, KeyEvent, OverflowPolicy};
pub use report::{KeySlots, KeyReport, UsageId};
pub use source::{ReportSource, VirtualReportSource};
pub use translate::{AppKey, DoomKeymap, Keymap, translate};
