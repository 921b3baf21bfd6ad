//! Capability masks for collision filtering

use bitflags::bitflags;

bitflags! {
    /// 32-bit capability mask gating which actor pairs interact
    ///
    /// Each bit is an application-defined capability tag. Two actors pass a
    /// filter when their masks share at least one set bit, so this is a
    /// many-to-many tag system rather than a single category per actor.
    /// Every actor carries two of these: one gating collision *detection*
    /// and one gating collision *resolution*.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LayerMask: u32 {
        /// Every capability bit set
        const ALL = u32::MAX;
    }
}

impl LayerMask {
    /// Mask with the single given bit set
    ///
    /// Indices outside 0..=31 yield the empty mask.
    pub fn from_bit(index: u32) -> Self {
        if index > 31 {
            return Self::empty();
        }
        Self::from_bits_retain(1 << index)
    }

    /// Whether the given bit is set
    ///
    /// Indices outside 0..=31 are never set.
    pub fn is_bit_set(self, index: u32) -> bool {
        if index > 31 {
            return false;
        }
        self.bits() & (1 << index) != 0
    }

    /// Set the given bit
    ///
    /// Indices outside 0..=31 are ignored rather than treated as an error.
    pub fn set_bit(&mut self, index: u32) {
        if index > 31 {
            return;
        }
        *self |= Self::from_bits_retain(1 << index);
    }

    /// Clear the given bit
    ///
    /// Indices outside 0..=31 are ignored rather than treated as an error.
    pub fn clear_bit(&mut self, index: u32) {
        if index > 31 {
            return;
        }
        self.remove(Self::from_bits_retain(1 << index));
    }
}
