//! Selection module - turns a drag gesture into a run of grid cells
//!
//! [`resolve_line`] is pure and recomputed from the anchor on every move; the
//! end cell can jump anywhere during a drag, so the path is never patched
//! incrementally.
//!
//! [`DragState`] tracks the single open gesture. A new gesture cannot start
//! while one is open; it must end through release, cancel, or the pointer
//! leaving the grid (which resolves like a release).

use crate::types::CellPos;

/// Cells on the straight or diagonal line from `start` to `end`, inclusive.
///
/// Returns just `[start]` when the two cells are equal, or when the line is
/// neither horizontal, vertical, nor a 45° diagonal.
///
/// # Examples
///
/// ```
/// use word_search_core::selection::resolve_line;
/// use word_search_core::types::CellPos;
///
/// let path = resolve_line(CellPos::new(2, 3), CellPos::new(4, 5));
/// assert_eq!(path, vec![CellPos::new(2, 3), CellPos::new(3, 4), CellPos::new(4, 5)]);
///
/// // Knight-ish move: rejected
/// assert_eq!(resolve_line(CellPos::new(2, 3), CellPos::new(4, 4)), vec![CellPos::new(2, 3)]);
/// ```
pub fn resolve_line(start: CellPos, end: CellPos) -> Vec<CellPos> {
    let dr = end.row - start.row;
    let dc = end.col - start.col;
    let distance = dr.abs().max(dc.abs());

    if distance == 0 {
        return vec![start];
    }

    let straight = dr == 0 || dc == 0;
    let diagonal = dr.abs() == dc.abs();
    if !straight && !diagonal {
        return vec![start];
    }

    let (step_r, step_c) = (dr.signum(), dc.signum());
    (0..=distance)
        .map(|i| start.offset(i * step_r, i * step_c))
        .collect()
}

/// The open drag gesture, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    anchor: Option<CellPos>,
    end: Option<CellPos>,
    path: Vec<CellPos>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<CellPos> {
        self.anchor
    }

    /// Cells currently highlighted (empty when idle)
    pub fn path(&self) -> &[CellPos] {
        &self.path
    }

    /// Open a gesture at `cell`.
    /// Returns false if a gesture is already open
    pub fn begin(&mut self, cell: CellPos) -> bool {
        if self.is_active() {
            return false;
        }
        self.anchor = Some(cell);
        self.end = Some(cell);
        self.path.clear();
        self.path.push(cell);
        true
    }

    /// Move the free end of the gesture to `cell`.
    /// Returns true if the highlighted path changed
    pub fn extend(&mut self, cell: CellPos) -> bool {
        let Some(anchor) = self.anchor else {
            return false;
        };
        if self.end == Some(cell) {
            return false;
        }
        self.end = Some(cell);

        let path = resolve_line(anchor, cell);
        if path == self.path {
            return false;
        }
        self.path = path;
        true
    }

    /// Close the gesture and hand back its path for checking.
    ///
    /// Used for release and for the pointer leaving the grid. Returns None if
    /// no gesture was open.
    pub fn finish(&mut self) -> Option<Vec<CellPos>> {
        self.anchor?;
        self.anchor = None;
        self.end = None;
        Some(std::mem::take(&mut self.path))
    }

    /// Drop the gesture without checking it.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.is_active();
        self.anchor = None;
        self.end = None;
        self.path.clear();
        was_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(v: &[(i16, i16)]) -> Vec<CellPos> {
        v.iter().map(|&(r, c)| CellPos::new(r, c)).collect()
    }

    #[test]
    fn test_single_cell() {
        let p = CellPos::new(2, 3);
        assert_eq!(resolve_line(p, p), vec![p]);
    }

    #[test]
    fn test_vertical() {
        assert_eq!(
            resolve_line(CellPos::new(2, 3), CellPos::new(5, 3)),
            cells(&[(2, 3), (3, 3), (4, 3), (5, 3)])
        );
    }

    #[test]
    fn test_horizontal_backwards() {
        assert_eq!(
            resolve_line(CellPos::new(0, 4), CellPos::new(0, 1)),
            cells(&[(0, 4), (0, 3), (0, 2), (0, 1)])
        );
    }

    #[test]
    fn test_diagonal() {
        assert_eq!(
            resolve_line(CellPos::new(2, 3), CellPos::new(4, 5)),
            cells(&[(2, 3), (3, 4), (4, 5)])
        );
        assert_eq!(
            resolve_line(CellPos::new(4, 1), CellPos::new(1, 4)),
            cells(&[(4, 1), (3, 2), (2, 3), (1, 4)])
        );
    }

    #[test]
    fn test_invalid_shape() {
        assert_eq!(
            resolve_line(CellPos::new(2, 3), CellPos::new(4, 4)),
            cells(&[(2, 3)])
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let a = CellPos::new(7, 0);
        let b = CellPos::new(0, 7);
        assert_eq!(resolve_line(a, b), resolve_line(a, b));
    }

    #[test]
    fn test_path_length() {
        for (dr, dc) in [(0, 5), (5, 0), (-3, -3), (4, -4)] {
            let start = CellPos::new(4, 4);
            let path = resolve_line(start, start.offset(dr, dc));
            let expected = dr.abs().max(dc.abs()) as usize + 1;
            assert_eq!(path.len(), expected);
        }
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut drag = DragState::new();
        assert!(drag.begin(CellPos::new(2, 3)));
        assert!(!drag.begin(CellPos::new(0, 0)), "second gesture must wait");

        assert!(drag.extend(CellPos::new(5, 3)));
        assert_eq!(drag.path().len(), 4);

        // Off-line move collapses to the anchor
        assert!(drag.extend(CellPos::new(4, 4)));
        assert_eq!(drag.path(), &[CellPos::new(2, 3)]);

        // Back onto a line, recomputed from the anchor
        assert!(drag.extend(CellPos::new(4, 5)));
        assert_eq!(drag.path(), cells(&[(2, 3), (3, 4), (4, 5)]).as_slice());

        let path = drag.finish().unwrap();
        assert_eq!(path.len(), 3);
        assert!(!drag.is_active());
        assert!(drag.path().is_empty());
        assert_eq!(drag.finish(), None);
    }

    #[test]
    fn test_extend_same_cell_is_noop() {
        let mut drag = DragState::new();
        drag.begin(CellPos::new(1, 1));
        assert!(drag.extend(CellPos::new(1, 3)));
        assert!(!drag.extend(CellPos::new(1, 3)));
    }

    #[test]
    fn test_extend_without_begin() {
        let mut drag = DragState::new();
        assert!(!drag.extend(CellPos::new(1, 1)));
        assert!(drag.path().is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut drag = DragState::new();
        drag.begin(CellPos::new(0, 0));
        assert!(drag.cancel());
        assert!(!drag.is_active());
        assert!(!drag.cancel());
    }
}
