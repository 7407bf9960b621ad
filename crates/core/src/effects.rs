//! Effects module - timed per-cell highlight marks
//!
//! Each mark carries an optional expiry on the effect clock. [`CellEffects::tick`]
//! advances the clock and settles expired marks: a found pulse becomes a
//! persistent found mark, an incorrect flash disappears.

use crate::types::{CellMark, CellPos, FOUND_PULSE_MS, INCORRECT_FLASH_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Effect {
    mark: CellMark,
    expires_at_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEffects {
    size: usize,
    now_ms: u64,
    cells: Vec<Option<Effect>>,
}

impl CellEffects {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            now_ms: 0,
            cells: vec![None; size * size],
        }
    }

    fn index(&self, pos: CellPos) -> Option<usize> {
        if !pos.in_bounds(self.size) {
            return None;
        }
        Some((pos.row as usize) * self.size + pos.col as usize)
    }

    pub fn mark_at(&self, pos: CellPos) -> Option<CellMark> {
        self.index(pos)
            .and_then(|idx| self.cells[idx])
            .map(|e| e.mark)
    }

    /// Flat row-major view of current marks.
    pub fn marks(&self) -> impl Iterator<Item = Option<CellMark>> + '_ {
        self.cells.iter().map(|c| c.map(|e| e.mark))
    }

    /// Pulse the cells of a found word; they settle to `Found`.
    pub fn found(&mut self, cells: &[CellPos]) {
        let expires = Some(self.now_ms + FOUND_PULSE_MS);
        for &pos in cells {
            if let Some(idx) = self.index(pos) {
                self.cells[idx] = Some(Effect {
                    mark: CellMark::FoundPulse,
                    expires_at_ms: expires,
                });
            }
        }
    }

    /// Flash the cells of a rejected selection.
    ///
    /// Cells that belong to an already-found word keep their found mark.
    pub fn incorrect(&mut self, cells: &[CellPos]) {
        let expires = Some(self.now_ms + INCORRECT_FLASH_MS);
        for &pos in cells {
            if let Some(idx) = self.index(pos) {
                let keeps_found = matches!(
                    self.cells[idx],
                    Some(Effect {
                        mark: CellMark::Found | CellMark::FoundPulse,
                        ..
                    })
                );
                if !keeps_found {
                    self.cells[idx] = Some(Effect {
                        mark: CellMark::Incorrect,
                        expires_at_ms: expires,
                    });
                }
            }
        }
    }

    /// Advance the effect clock and settle expired marks.
    /// Returns true if any mark changed
    pub fn tick(&mut self, elapsed_ms: u64) -> bool {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        let now = self.now_ms;
        let mut changed = false;

        for cell in &mut self.cells {
            let Some(effect) = *cell else {
                continue;
            };
            match effect.expires_at_ms {
                Some(t) if t <= now => {
                    *cell = match effect.mark {
                        CellMark::FoundPulse => Some(Effect {
                            mark: CellMark::Found,
                            expires_at_ms: None,
                        }),
                        CellMark::Found | CellMark::Incorrect => None,
                    };
                    changed = true;
                }
                _ => {}
            }
        }

        changed
    }

    /// True while any timed mark is still running
    pub fn has_pending(&self) -> bool {
        self.cells
            .iter()
            .any(|c| matches!(c, Some(Effect { expires_at_ms: Some(_), .. })))
    }
}
