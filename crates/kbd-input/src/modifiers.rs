//! Modifier byte of a boot keyboard report.

use bitflags::bitflags;

use crate::report::UsageId;

bitflags! {
    /// Modifier keys held in a report, one bit per physical key.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const LEFT_CTRL = 1 << 0;
        const LEFT_SHIFT = 1 << 1;
        const LEFT_ALT = 1 << 2;
        const LEFT_GUI = 1 << 3;
        const RIGHT_CTRL = 1 << 4;
        const RIGHT_SHIFT = 1 << 5;
        const RIGHT_ALT = 1 << 6;
        const RIGHT_GUI = 1 << 7;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::empty()
    }
}

impl Modifiers {
    /// Bits inspected when diffing, in emission order.
    ///
    /// GUI keys have no application code and are never diffed.
    pub const SCAN_ORDER: [Modifiers; 6] = [
        Self::LEFT_CTRL,
        Self::LEFT_SHIFT,
        Self::LEFT_ALT,
        Self::RIGHT_CTRL,
        Self::RIGHT_SHIFT,
        Self::RIGHT_ALT,
    ];
}

/// Usage id of a single modifier flag (0xE0..=0xE7).
///
/// Returns `None` unless `flag` has exactly one bit set.
pub fn modifier_usage(flag: Modifiers) -> Option<UsageId> {
    let bits = flag.bits();
    if bits.count_ones() != 1 {
        return None;
    }
    Some(UsageId(UsageId::LEFT_CTRL.raw() + bits.trailing_zeros() as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_of_each_flag() {
        assert_eq!(modifier_usage(Modifiers::LEFT_CTRL), Some(UsageId::LEFT_CTRL));
        assert_eq!(modifier_usage(Modifiers::LEFT_SHIFT), Some(UsageId::LEFT_SHIFT));
        assert_eq!(modifier_usage(Modifiers::LEFT_ALT), Some(UsageId::LEFT_ALT));
        assert_eq!(modifier_usage(Modifiers::LEFT_GUI), Some(UsageId::LEFT_GUI));
        assert_eq!(modifier_usage(Modifiers::RIGHT_CTRL), Some(UsageId::RIGHT_CTRL));
        assert_eq!(modifier_usage(Modifiers::RIGHT_SHIFT), Some(UsageId::RIGHT_SHIFT));
        assert_eq!(modifier_usage(Modifiers::RIGHT_ALT), Some(UsageId::RIGHT_ALT));
        assert_eq!(modifier_usage(Modifiers::RIGHT_GUI), Some(UsageId::RIGHT_GUI));
    }

    #[test]
    fn usage_rejects_combinations() {
        assert_eq!(modifier_usage(Modifiers::empty()), None);
        assert_eq!(
            modifier_usage(Modifiers::LEFT_CTRL | Modifiers::RIGHT_CTRL),
            None
        );
    }

    #[test]
    fn scan_order_skips_gui() {
        assert!(
            Modifiers::SCAN_ORDER
                .iter()
                .all(|m| !m.intersects(Modifiers::LEFT_GUI | Modifiers::RIGHT_GUI))
        );
    }
}
