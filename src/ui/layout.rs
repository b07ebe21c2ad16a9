//! Size-aware layout decisions
//!
//! Render functions build a [`LayoutContext`] from the area they draw into
//! and ask it how much room there is instead of comparing raw column counts.

use ratatui::layout::Rect;

/// Below this many columns the screens switch to two-column tiles.
pub const NARROW_COLS: u16 = 80;
/// Below this many columns tab labels lose their icons' padding.
pub const TINY_COLS: u16 = 60;
/// Below this many rows labels are shortened.
pub const SHORT_ROWS: u16 = 24;
pub const TINY_ROWS: u16 = 16;

/// How tightly content has to be packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Density {
    Roomy,
    Compact,
    Cramped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    pub fn density(&self) -> Density {
        if self.width < TINY_COLS || self.height < TINY_ROWS {
            Density::Cramped
        } else if self.width < NARROW_COLS || self.height < SHORT_ROWS {
            Density::Compact
        } else {
            Density::Roomy
        }
    }

    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_COLS
    }

    pub fn is_compact(&self) -> bool {
        self.density() >= Density::Compact
    }

    pub fn is_extra_small(&self) -> bool {
        self.density() == Density::Cramped
    }

    /// `percent` of the width, kept within `[min, max]`.
    pub fn share(&self, percent: u16, min: u16, max: u16) -> u16 {
        let cols = (u32::from(self.width) * u32::from(percent) / 100) as u16;
        cols.clamp(min, max.max(min))
    }

    /// Stat tiles per row.
    pub fn stat_columns(&self) -> usize {
        if self.is_narrow() {
            2
        } else {
            4
        }
    }

    pub fn bubble_width(&self) -> u16 {
        self.share(70, 20, 90)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_steps() {
        assert_eq!(LayoutContext::new(120, 40).density(), Density::Roomy);
        assert_eq!(LayoutContext::new(70, 40).density(), Density::Compact);
        assert_eq!(LayoutContext::new(120, 20).density(), Density::Compact);
        assert_eq!(LayoutContext::new(50, 40).density(), Density::Cramped);
        assert_eq!(LayoutContext::new(120, 14).density(), Density::Cramped);
    }

    #[test]
    fn test_compact_includes_cramped() {
        let ctx = LayoutContext::new(40, 10);
        assert!(ctx.is_compact());
        assert!(ctx.is_extra_small());
        assert!(!LayoutContext::new(100, 30).is_compact());
    }

    #[test]
    fn test_share_is_clamped() {
        assert_eq!(LayoutContext::new(200, 40).share(30, 20, 50), 50);
        assert_eq!(LayoutContext::new(40, 40).share(30, 20, 50), 20);
        assert_eq!(LayoutContext::new(100, 40).share(45, 20, 50), 45);
    }

    #[test]
    fn test_stat_columns_and_bubbles() {
        assert_eq!(LayoutContext::new(70, 40).stat_columns(), 2);
        assert_eq!(LayoutContext::new(120, 40).stat_columns(), 4);
        assert_eq!(LayoutContext::new(200, 40).bubble_width(), 90);
        assert_eq!(LayoutContext::new(20, 40).bubble_width(), 20);
    }
}
