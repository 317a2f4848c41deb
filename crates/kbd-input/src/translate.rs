//! Physical usage to application key code translation.

use std::fmt;

use crate::report::UsageId;

/// Key code in the game's own naming scheme.
///
/// Printable keys use their lowercase ASCII value; the rest follow the
/// Doom key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppKey(pub u8);

impl AppKey {
    pub const TAB: Self = Self(9);
    pub const ENTER: Self = Self(13);
    pub const ESCAPE: Self = Self(27);
    pub const SPACE: Self = Self(b' ');
    pub const BACKSPACE: Self = Self(127);
    pub const LEFT_ARROW: Self = Self(0xac);
    pub const UP_ARROW: Self = Self(0xad);
    pub const RIGHT_ARROW: Self = Self(0xae);
    pub const DOWN_ARROW: Self = Self(0xaf);
    pub const RCTRL: Self = Self(0x80 + 0x1d);
    pub const RSHIFT: Self = Self(0x80 + 0x36);
    pub const RALT: Self = Self(0x80 + 0x38);

    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl fmt::Display for AppKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            c @ (b'0'..=b'9' | b'a'..=b'z') => write!(f, "'{}'", c as char),
            c => write!(f, "0x{c:02x}"),
        }
    }
}

/// Maps physical keys to application key codes.
///
/// `None` means the key has no meaning to the application; its transitions
/// are dropped without being reported.
pub trait Keymap {
    fn translate(&self, key: UsageId) -> Option<AppKey>;
}

impl<F> Keymap for F
where
    F: Fn(UsageId) -> Option<AppKey>,
{
    fn translate(&self, key: UsageId) -> Option<AppKey> {
        self(key)
    }
}

/// Key table of the Doom port: letters, the number row, basic editing keys,
/// arrows and side-insensitive Ctrl/Shift/Alt.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoomKeymap;

impl Keymap for DoomKeymap {
    fn translate(&self, key: UsageId) -> Option<AppKey> {
        let code = match key {
            UsageId(c @ 0x04..=0x1D) => AppKey(b'a' + (c - 0x04)),
            // Number row runs 1..9 then 0.
            UsageId::NUM_0 => AppKey(b'0'),
            UsageId(c @ 0x1E..=0x26) => AppKey(b'1' + (c - 0x1E)),
            UsageId::ENTER => AppKey::ENTER,
            UsageId::ESCAPE => AppKey::ESCAPE,
            UsageId::BACKSPACE => AppKey::BACKSPACE,
            UsageId::TAB => AppKey::TAB,
            UsageId::SPACE => AppKey::SPACE,
            UsageId::RIGHT_ARROW => AppKey::RIGHT_ARROW,
            UsageId::LEFT_ARROW => AppKey::LEFT_ARROW,
            UsageId::DOWN_ARROW => AppKey::DOWN_ARROW,
            UsageId::UP_ARROW => AppKey::UP_ARROW,
            UsageId::LEFT_CTRL | UsageId::RIGHT_CTRL => AppKey::RCTRL,
            UsageId::LEFT_SHIFT | UsageId::RIGHT_SHIFT => AppKey::RSHIFT,
            UsageId::LEFT_ALT | UsageId::RIGHT_ALT => AppKey::RALT,
            _ => return None,
        };
        Some(code)
    }
}

/// Translate with the default [`DoomKeymap`].
pub fn translate(key: UsageId) -> Option<AppKey> {
    DoomKeymap.translate(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters() {
        assert_eq!(translate(UsageId::A), Some(AppKey(b'a')));
        assert_eq!(translate(UsageId(0x16)), Some(AppKey(b's')));
        assert_eq!(translate(UsageId::Z), Some(AppKey(b'z')));
    }

    #[test]
    fn number_row_wraps_to_zero() {
        assert_eq!(translate(UsageId::NUM_1), Some(AppKey(b'1')));
        assert_eq!(translate(UsageId::NUM_9), Some(AppKey(b'9')));
        assert_eq!(translate(UsageId::NUM_0), Some(AppKey(b'0')));
    }

    #[test]
    fn control_keys() {
        assert_eq!(translate(UsageId::ENTER), Some(AppKey::ENTER));
        assert_eq!(translate(UsageId::ESCAPE), Some(AppKey::ESCAPE));
        assert_eq!(translate(UsageId::BACKSPACE), Some(AppKey::BACKSPACE));
        assert_eq!(translate(UsageId::TAB), Some(AppKey::TAB));
        assert_eq!(translate(UsageId::SPACE), Some(AppKey::SPACE));
    }

    #[test]
    fn arrows() {
        assert_eq!(translate(UsageId::RIGHT_ARROW), Some(AppKey::RIGHT_ARROW));
        assert_eq!(translate(UsageId::LEFT_ARROW), Some(AppKey::LEFT_ARROW));
        assert_eq!(translate(UsageId::DOWN_ARROW), Some(AppKey::DOWN_ARROW));
        assert_eq!(translate(UsageId::UP_ARROW), Some(AppKey::UP_ARROW));
    }

    #[test]
    fn modifiers_ignore_side() {
        assert_eq!(translate(UsageId::LEFT_CTRL), translate(UsageId::RIGHT_CTRL));
        assert_eq!(translate(UsageId::LEFT_SHIFT), Some(AppKey::RSHIFT));
        assert_eq!(translate(UsageId::RIGHT_SHIFT), Some(AppKey::RSHIFT));
        assert_eq!(translate(UsageId::LEFT_ALT), Some(AppKey::RALT));
        assert_eq!(translate(UsageId::RIGHT_ALT), Some(AppKey::RALT));
        assert_eq!(translate(UsageId::LEFT_GUI), None);
        assert_eq!(translate(UsageId::RIGHT_GUI), None);
    }

    #[test]
    fn unmapped_usages() {
        for code in [0x00, 0x01, 0x03, 0x2D, 0x3A, 0x4E, 0x53, 0x68, 0xE3, 0xFF] {
            assert_eq!(translate(UsageId(code)), None, "usage 0x{code:02X}");
        }
    }

    #[test]
    fn closure_keymap() {
        let only_space = |key: UsageId| (key == UsageId::SPACE).then_some(AppKey(b'!'));
        assert_eq!(only_space.translate(UsageId::SPACE), Some(AppKey(b'!')));
        assert_eq!(only_space.translate(UsageId::A), None);
    }

    #[test]
    fn app_key_display() {
        assert_eq!(AppKey(b'q').to_string(), "'q'");
        assert_eq!(AppKey::ESCAPE.to_string(), "0x1b");
    }
}
