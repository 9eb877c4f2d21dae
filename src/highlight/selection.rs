//! Which byte categories are currently highlighted.

use crate::highlight::category::ByteCategory;

/// Enabled flag for each [`ByteCategory`].
///
/// A plain value type: every update returns a new selection, so readers
/// always see a complete snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Selection {
    enabled: [bool; ByteCategory::COUNT],
}

impl Default for Selection {
    /// Only four-byte clusters are highlighted initially.
    fn default() -> Self {
        Self {
            enabled: [false, false, false, true],
        }
    }
}

impl Selection {
    /// Selection with every category disabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            enabled: [false; ByteCategory::COUNT],
        }
    }

    /// Selection with every category enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            enabled: [true; ByteCategory::COUNT],
        }
    }

    /// Whether `category` is highlighted.
    #[must_use]
    pub const fn is_enabled(&self, category: ByteCategory) -> bool {
        self.enabled[category.as_usize()]
    }

    /// Copy of this selection with exactly one slot replaced.
    #[must_use]
    pub const fn toggle(self, category: ByteCategory, value: bool) -> Self {
        let mut enabled = self.enabled;
        enabled[category.as_usize()] = value;
        Self { enabled }
    }

    /// [`Selection::toggle`] for a raw category number.
    ///
    /// # Panics
    ///
    /// Panics when `category` is outside `1..=4`; passing such a value is a
    /// caller bug, not a user error.
    #[must_use]
    pub fn toggle_raw(self, category: u8, value: bool) -> Self {
        self.toggle(ByteCategory::from_u8(category), value)
    }

    /// Enabled categories in ascending order.
    pub fn enabled(&self) -> impl Iterator<Item = ByteCategory> + '_ {
        ByteCategory::ALL
            .into_iter()
            .filter(|&c| self.is_enabled(c))
    }
}

impl FromIterator<ByteCategory> for Selection {
    /// Selection enabling exactly the given categories.
    fn from_iter<I: IntoIterator<Item = ByteCategory>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::none(), |sel, c| sel.toggle(c, true))
    }
}
