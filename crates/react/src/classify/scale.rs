//! Fixed reference scales and nearest-value snapping.

/// An ascending table of reference pixel values and their tokens.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    entries: &'static [(f64, &'static str)],
}

impl Scale {
    /// Wraps a table; entries must be non-empty and in ascending order.
    pub const fn new(entries: &'static [(f64, &'static str)]) -> Self {
        Self { entries }
    }

    /// Reference entries in scan order.
    pub fn entries(&self) -> &'static [(f64, &'static str)] {
        self.entries
    }

    /// Token of the entry closest to `value`.
    ///
    /// Scans in table order and only moves on when a later entry is strictly
    /// closer, so ties keep the earlier entry. Returns `None` only for an empty table.
    pub fn snap(&self, value: f64) -> Option<&'static str> {
        let (first, rest) = self.entries.split_first()?;
        let mut best = first;
        for entry in rest {
            if (entry.0 - value).abs() < (best.0 - value).abs() {
                best = entry;
            }
        }
        Some(best.1)
    }
}

/// Spacing scale used for gaps and padding (suffix after `gap-`, `p-`, ...).
pub const SPACING: Scale = Scale::new(&[
    (0.0, "0"),
    (4.0, "1"),
    (8.0, "2"),
    (12.0, "3"),
    (16.0, "4"),
    (20.0, "5"),
    (24.0, "6"),
    (32.0, "8"),
    (40.0, "10"),
    (48.0, "12"),
    (64.0, "16"),
]);

/// Corner radius scale.
pub const RADIUS: Scale = Scale::new(&[
    (4.0, "rounded"),
    (8.0, "rounded-lg"),
    (12.0, "rounded-xl"),
    (16.0, "rounded-2xl"),
    (9999.0, "rounded-full"),
]);

/// Font size scale.
pub const FONT_SIZE: Scale = Scale::new(&[
    (12.0, "text-xs"),
    (14.0, "text-sm"),
    (16.0, "text-base"),
    (18.0, "text-lg"),
    (20.0, "text-xl"),
    (24.0, "text-2xl"),
    (30.0, "text-3xl"),
    (36.0, "text-4xl"),
]);
