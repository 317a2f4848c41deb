//! Keyboard report snapshots.
//!
//! A report is one polled view of "all keys currently down": the modifier byte
//! plus up to six held keyboard-page usages, as delivered by the transport.

use std::fmt;

use crate::modifiers::Modifiers;

/// Keyboard-page usage id identifying a physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct UsageId(pub u8);

impl UsageId {
    /// Empty slot marker. Never denotes a held key.
    pub const NONE: Self = Self(0x00);

    pub const A: Self = Self(0x04);
    pub const Z: Self = Self(0x1D);
    pub const NUM_1: Self = Self(0x1E);
    pub const NUM_9: Self = Self(0x26);
    pub const NUM_0: Self = Self(0x27);
    pub const ENTER: Self = Self(0x28);
    pub const ESCAPE: Self = Self(0x29);
    pub const BACKSPACE: Self = Self(0x2A);
    pub const TAB: Self = Self(0x2B);
    pub const SPACE: Self = Self(0x2C);
    pub const RIGHT_ARROW: Self = Self(0x4F);
    pub const LEFT_ARROW: Self = Self(0x50);
    pub const DOWN_ARROW: Self = Self(0x51);
    pub const UP_ARROW: Self = Self(0x52);

    pub const LEFT_CTRL: Self = Self(0xE0);
    pub const LEFT_SHIFT: Self = Self(0xE1);
    pub const LEFT_ALT: Self = Self(0xE2);
    pub const LEFT_GUI: Self = Self(0xE3);
    pub const RIGHT_CTRL: Self = Self(0xE4);
    pub const RIGHT_SHIFT: Self = Self(0xE5);
    pub const RIGHT_ALT: Self = Self(0xE6);
    pub const RIGHT_GUI: Self = Self(0xE7);

    /// Raw usage value.
    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for UsageId {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl fmt::Display for UsageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

const MAX_HELD_KEYS: usize = 6;

/// Set of held non-modifier keys, capped at [`KeySlots::CAPACITY`].
///
/// The transport reports keys in six raw slots with no ordering or uniqueness
/// guarantee. Zero slots are empty and ignored; a usage repeated across slots
/// is one logical key. Iteration follows first-seen slot order; equality is
/// set equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeySlots {
    slots: [UsageId; MAX_HELD_KEYS],
    len: usize,
}

impl KeySlots {
    /// Simultaneous non-modifier key limit of the boot keyboard report.
    pub const CAPACITY: usize = MAX_HELD_KEYS;

    pub const EMPTY: Self = Self {
        slots: [UsageId::NONE; Self::CAPACITY],
        len: 0,
    };

    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Build from the raw slot array of a report.
    pub fn from_raw(raw: [u8; Self::CAPACITY]) -> Self {
        let mut keys = Self::EMPTY;
        for code in raw {
            keys.insert(UsageId(code));
        }
        keys
    }

    /// Add a held key. Returns `false` if the key is the empty marker, already
    /// present, or the set is full.
    pub fn insert(&mut self, key: UsageId) -> bool {
        if key.is_none() || self.contains(key) || self.len == Self::CAPACITY {
            return false;
        }
        self.slots[self.len] = key;
        self.len += 1;
        true
    }

    /// Remove a held key, keeping the order of the rest.
    pub fn remove(&mut self, key: UsageId) -> bool {
        let Some(pos) = self.as_slice().iter().position(|&k| k == key) else {
            return false;
        };
        self.slots.copy_within(pos + 1..self.len, pos);
        self.len -= 1;
        self.slots[self.len] = UsageId::NONE;
        true
    }

    pub fn contains(&self, key: UsageId) -> bool {
        !key.is_none() && self.as_slice().contains(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = UsageId> + '_ {
        self.as_slice().iter().copied()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == Self::CAPACITY
    }

    pub fn as_slice(&self) -> &[UsageId] {
        &self.slots[..self.len]
    }

    /// Raw slot array as the transport would send it, zero-padded.
    pub fn to_raw(&self) -> [u8; Self::CAPACITY] {
        self.slots.map(UsageId::raw)
    }
}

impl PartialEq for KeySlots {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|k| other.contains(k))
    }
}

impl Eq for KeySlots {}

impl FromIterator<UsageId> for KeySlots {
    fn from_iter<I: IntoIterator<Item = UsageId>>(iter: I) -> Self {
        let mut keys = Self::EMPTY;
        for key in iter {
            keys.insert(key);
        }
        keys
    }
}

/// One polled snapshot of the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyReport {
    pub modifiers: Modifiers,
    pub keys: KeySlots,
}

impl KeyReport {
    /// Nothing held.
    pub const EMPTY: Self = Self {
        modifiers: Modifiers::empty(),
        keys: KeySlots::EMPTY,
    };

    pub fn new(modifiers: Modifiers, keys: KeySlots) -> Self {
        Self { modifiers, keys }
    }

    /// Build from the modifier byte and raw key slots of a boot keyboard report.
    pub fn from_raw(modifier: u8, keycodes: [u8; KeySlots::CAPACITY]) -> Self {
        Self {
            modifiers: Modifiers::from_bits_retain(modifier),
            keys: KeySlots::from_raw(keycodes),
        }
    }

    /// Report with no modifiers and the given keys held.
    pub fn with_keys(keys: &[u8]) -> Self {
        Self {
            modifiers: Modifiers::empty(),
            keys: keys.iter().map(|&k| UsageId(k)).collect(),
        }
    }
}
