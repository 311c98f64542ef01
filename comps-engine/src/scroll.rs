//! FILENAME: comps-engine/src/scroll.rs
//! Scroll Sync Controller - mirrors horizontal offsets between surfaces.
//!
//! The detail grid and the aggregate grid scroll independently in the
//! vertical axis but must stay in horizontal lockstep. On a scroll event
//! from either surface the controller hands back the assignment for the
//! other one, and swallows the echo that assignment produces when the
//! receiving surface's own handler fires. Last offset wins.

use serde::{Deserialize, Serialize};

/// One of the two synchronized table surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollSurface {
    /// The per-company detail grid.
    Detail,
    /// The summary-statistics grid.
    Aggregate,
}

impl ScrollSurface {
    /// The opposite surface.
    pub fn other(self) -> Self {
        match self {
            ScrollSurface::Detail => ScrollSurface::Aggregate,
            ScrollSurface::Aggregate => ScrollSurface::Detail,
        }
    }

    fn index(self) -> usize {
        match self {
            ScrollSurface::Detail => 0,
            ScrollSurface::Aggregate => 1,
        }
    }
}

/// An offset assignment the collaborator must apply to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollAssignment {
    pub surface: ScrollSurface,
    pub horizontal: f64,
}

/// Keeps the two surfaces' horizontal offsets in lockstep.
#[derive(Debug, Clone, Default)]
pub struct ScrollSync {
    horizontal: [f64; 2],
    vertical: [f64; 2],

    /// Surface whose next scroll event is the echo of our own assignment.
    pending_echo: Option<ScrollSurface>,
}

impl ScrollSync {
    pub fn new() -> Self {
        ScrollSync::default()
    }

    /// Handles a horizontal scroll event from a surface.
    ///
    /// Returns the assignment to apply to the other surface, or `None` when
    /// the event is the echo of a previous assignment or the other surface
    /// is already at that offset.
    pub fn scrolled(&mut self, surface: ScrollSurface, offset: f64) -> Option<ScrollAssignment> {
        self.horizontal[surface.index()] = offset;

        if self.pending_echo == Some(surface) {
            self.pending_echo = None;
            return None;
        }

        let other = surface.other();
        if self.horizontal[other.index()] == offset {
            return None;
        }

        self.horizontal[other.index()] = offset;
        self.pending_echo = Some(other);
        Some(ScrollAssignment {
            surface: other,
            horizontal: offset,
        })
    }

    /// Records a vertical scroll event. Vertical offsets are never mirrored.
    pub fn scrolled_vertical(&mut self, surface: ScrollSurface, offset: f64) {
        self.vertical[surface.index()] = offset;
    }

    pub fn horizontal_offset(&self, surface: ScrollSurface) -> f64 {
        self.horizontal[surface.index()]
    }

    pub fn vertical_offset(&self, surface: ScrollSurface) -> f64 {
        self.vertical[surface.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ScrollSurface::{Aggregate, Detail};

    #[test]
    fn test_scroll_propagates_to_other_surface() {
        let mut sync = ScrollSync::new();
        let assignment = sync.scrolled(Detail, 120.0).unwrap();

        assert_eq!(assignment.surface, Aggregate);
        assert_eq!(assignment.horizontal, 120.0);
        assert_eq!(sync.horizontal_offset(Aggregate), 120.0);
    }

    #[test]
    fn test_echo_is_swallowed() {
        let mut sync = ScrollSync::new();
        let assignment = sync.scrolled(Detail, 80.0).unwrap();

        // The aggregate surface's own handler fires after the assignment.
        assert_eq!(sync.scrolled(assignment.surface, assignment.horizontal), None);

        // A later genuine scroll from the same surface propagates again.
        let back = sync.scrolled(Aggregate, 40.0).unwrap();
        assert_eq!(back.surface, Detail);
        assert_eq!(back.horizontal, 40.0);
    }

    #[test]
    fn test_equal_offsets_do_not_propagate() {
        let mut sync = ScrollSync::new();
        assert_eq!(sync.scrolled(Detail, 0.0), None);

        sync.scrolled(Detail, 50.0).unwrap();
        sync.scrolled(Aggregate, 50.0); // echo
        assert_eq!(sync.scrolled(Detail, 50.0), None);
    }

    #[test]
    fn test_vertical_offsets_are_independent() {
        let mut sync = ScrollSync::new();
        sync.scrolled_vertical(Detail, 300.0);

        assert_eq!(sync.vertical_offset(Detail), 300.0);
        assert_eq!(sync.vertical_offset(Aggregate), 0.0);
        assert_eq!(sync.horizontal_offset(Detail), 0.0);
    }
}
