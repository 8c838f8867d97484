//! Column pager backing the mobile kanban board.
//!
//! # Design
//! - One column is visible at a time; the index is always clamped to the column count.
//! - An empty board keeps index 0 and disables navigation.

use crate::core::swipe::{EdgeState, SwipeDirection};

/// Pager position over a board's columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnPager {
    index: usize,
    count: usize,
}

/// Render state for a single navigation dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dot {
    /// Column index this dot jumps to.
    pub index: usize,
    /// Whether this is the visible column.
    pub active: bool,
}

impl ColumnPager {
    /// Pager over `count` columns starting at `index` (clamped).
    #[must_use]
    pub const fn new(count: usize, index: usize) -> Self {
        Self {
            index: clamp_index(index, count),
            count,
        }
    }

    /// Visible column index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of columns.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Replace the column count, keeping the index in range.
    pub const fn set_count(&mut self, count: usize) {
        self.count = count;
        self.index = clamp_index(self.index, count);
    }

    /// Jump to a column; out-of-range requests clamp. Returns whether the index changed.
    pub const fn go_to(&mut self, index: usize) -> bool {
        let next = clamp_index(index, self.count);
        let changed = next != self.index;
        self.index = next;
        changed
    }

    /// Advance one column. Returns whether the index changed.
    pub const fn next(&mut self) -> bool {
        self.go_to(self.index.saturating_add(1))
    }

    /// Step back one column. Returns whether the index changed.
    pub const fn prev(&mut self) -> bool {
        self.go_to(self.index.saturating_sub(1))
    }

    /// Apply an accepted swipe.
    pub const fn apply_swipe(&mut self, direction: SwipeDirection) -> bool {
        match direction {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Previous => self.prev(),
        }
    }

    /// Whether the previous arrow is enabled.
    #[must_use]
    pub const fn can_prev(&self) -> bool {
        self.count > 0 && self.index > 0
    }

    /// Whether the next arrow is enabled.
    #[must_use]
    pub const fn can_next(&self) -> bool {
        self.count > 0 && self.index + 1 < self.count
    }

    /// Edge flags used for drag resistance.
    #[must_use]
    pub const fn edges(&self) -> EdgeState {
        EdgeState {
            at_first: !self.can_prev(),
            at_last: !self.can_next(),
        }
    }

    /// Dot render states, one per column.
    #[must_use]
    pub fn dots(&self) -> Vec<Dot> {
        (0..self.count)
            .map(|index| Dot {
                index,
                active: index == self.index,
            })
            .collect()
    }

    /// Human-readable "i / n" position (1-based).
    #[must_use]
    pub fn position_label(&self) -> String {
        if self.count == 0 {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.index + 1, self.count)
    }

    /// Indicator text: the visible column's name followed by its position.
    #[must_use]
    pub fn indicator_label(&self, column_name: Option<&str>) -> String {
        match column_name {
            Some(name) if !name.trim().is_empty() => {
                format!("{} ({})", name.trim(), self.position_label())
            }
            _ => self.position_label(),
        }
    }

    /// CSS transform for the column track, including any live drag offset.
    #[must_use]
    pub fn track_transform(&self, drag_offset: f64) -> String {
        let percent = self.index * 100;
        if drag_offset.abs() < f64::EPSILON {
            format!("translateX(-{percent}%)")
        } else {
            format!("translateX(calc(-{percent}% + {drag_offset:.1}px))")
        }
    }
}

const fn clamp_index(index: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else if index >= count {
        count - 1
    } else {
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_clamps_to_bounds() {
        let mut pager = ColumnPager::new(3, 10);
        assert_eq!(pager.index(), 2);
        assert!(!pager.next());
        assert!(pager.prev());
        assert!(pager.prev());
        assert!(!pager.prev());
        assert_eq!(pager.index(), 0);
    }

    #[test]
    fn shrinking_column_count_pulls_index_back() {
        let mut pager = ColumnPager::new(5, 4);
        pager.set_count(2);
        assert_eq!(pager.index(), 1);
        pager.set_count(0);
        assert_eq!(pager.index(), 0);
        assert!(!pager.can_prev());
        assert!(!pager.can_next());
        assert!(pager.dots().is_empty());
        assert_eq!(pager.position_label(), "0 / 0");
    }

    #[test]
    fn arrows_and_edges_follow_position() {
        let pager = ColumnPager::new(3, 0);
        assert!(!pager.can_prev());
        assert!(pager.can_next());
        assert_eq!(
            pager.edges(),
            EdgeState {
                at_first: true,
                at_last: false
            }
        );
        let single = ColumnPager::new(1, 0);
        assert_eq!(
            single.edges(),
            EdgeState {
                at_first: true,
                at_last: true
            }
        );
    }

    #[test]
    fn swipes_move_one_column() {
        let mut pager = ColumnPager::new(4, 1);
        assert!(pager.apply_swipe(SwipeDirection::Next));
        assert_eq!(pager.index(), 2);
        assert!(pager.apply_swipe(SwipeDirection::Previous));
        assert_eq!(pager.index(), 1);
    }

    #[test]
    fn dots_mark_the_active_column() {
        let pager = ColumnPager::new(3, 1);
        let active: Vec<bool> = pager.dots().iter().map(|dot| dot.active).collect();
        assert_eq!(active, vec![false, true, false]);
        assert_eq!(pager.position_label(), "2 / 3");
    }

    #[test]
    fn transform_includes_drag_offset() {
        let pager = ColumnPager::new(3, 2);
        assert_eq!(pager.track_transform(0.0), "translateX(-200%)");
        assert_eq!(
            pager.track_transform(-12.5),
            "translateX(calc(-200% + -12.5px))"
        );
    }

    #[test]
    fn indicator_label_prefixes_column_name() {
        let pager = ColumnPager::new(4, 1);
        assert_eq!(pager.indicator_label(Some("In progress")), "In progress (2 / 4)");
        assert_eq!(pager.indicator_label(Some("  ")), "2 / 4");
        assert_eq!(ColumnPager::default().indicator_label(None), "0 / 0");
    }
}
