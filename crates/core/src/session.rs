//! Session module - one puzzle in play
//!
//! A [`PuzzleSession`] owns the grid, the target words, the elapsed-time
//! counter, the running score and the completion flag. It is created when a
//! puzzle starts and replaced wholesale by the next one; nothing outlives it.

use tracing::{debug, info};

use crate::generator::{PlacedWord, Puzzle};
use crate::grid::Grid;
use crate::matching::{find_target, MatchOutcome};
use crate::scoring::word_score;
use crate::types::{CellPos, TIMER_INTERVAL_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleSession {
    puzzle: Puzzle,
    theme: &'static str,
    score: u32,
    elapsed_secs: u32,
    timer_ms: u64,
    complete: bool,
}

impl PuzzleSession {
    /// Start a session on `puzzle`, carrying over `score` from earlier puzzles.
    ///
    /// A puzzle with no words is complete from the start.
    pub fn new(puzzle: Puzzle, theme: &'static str, score: u32) -> Self {
        let complete = puzzle.words.is_empty();
        Self {
            puzzle,
            theme,
            score,
            elapsed_secs: 0,
            timer_ms: 0,
            complete,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    pub fn words(&self) -> &[PlacedWord] {
        &self.puzzle.words
    }

    pub fn theme(&self) -> &'static str {
        self.theme
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn found_count(&self) -> usize {
        self.puzzle.words.iter().filter(|w| w.found).count()
    }

    /// Check a released selection.
    ///
    /// Reads the grid letters along `cells`, looks for an unfound target equal
    /// to them forwards or backwards, and on a hit marks it found and adds its
    /// points. `completed` is true only on the find that exhausts the list.
    pub fn check_selection(&mut self, cells: &[CellPos]) -> MatchOutcome {
        if self.complete {
            return MatchOutcome::Inactive;
        }

        let candidate = self.puzzle.grid.read_path(cells).unwrap_or_default();
        let Some(index) = find_target(&self.puzzle.words, &candidate) else {
            debug!(candidate = %candidate, "selection matched nothing");
            return MatchOutcome::Incorrect {
                cells: cells.to_vec(),
            };
        };

        let target = &mut self.puzzle.words[index];
        target.found = true;
        let word = target.word.clone();
        let points = word_score(&word);
        self.score = self.score.saturating_add(points);

        self.complete = self.puzzle.words.iter().all(|w| w.found);
        info!(word = %word, points, score = self.score, "word found");
        if self.complete {
            info!(
                secs = self.elapsed_secs,
                score = self.score,
                "puzzle complete"
            );
        }

        MatchOutcome::Found {
            index,
            word,
            points,
            cells: cells.to_vec(),
            completed: self.complete,
        }
    }

    /// Advance the elapsed-time counter.
    ///
    /// Stops once the puzzle is complete. Returns the new seconds value when it
    /// ticks over.
    pub fn tick(&mut self, elapsed_ms: u64) -> Option<u32> {
        if self.complete {
            return None;
        }
        self.timer_ms += elapsed_ms;
        if self.timer_ms < TIMER_INTERVAL_MS {
            return None;
        }
        let whole = self.timer_ms / TIMER_INTERVAL_MS;
        self.timer_ms %= TIMER_INTERVAL_MS;
        self.elapsed_secs = self.elapsed_secs.saturating_add(whole as u32);
        Some(self.elapsed_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::PlacementGrid;
    use crate::rng::SimpleRng;
    use crate::selection::resolve_line;
    use crate::types::Direction;
    use arrayvec::ArrayVec;

    /// TREE upward from (5,3) and MOSS rightward from (0,0).
    fn session() -> PuzzleSession {
        let mut grid = PlacementGrid::new(8);
        assert!(grid.place(b"TREE", CellPos::new(5, 3), Direction::Up));
        assert!(grid.place(b"MOSS", CellPos::new(0, 0), Direction::Right));
        let mut words = ArrayVec::new();
        words.push(PlacedWord::new("TREE", CellPos::new(5, 3), Direction::Up));
        words.push(PlacedWord::new("MOSS", CellPos::new(0, 0), Direction::Right));
        let puzzle = Puzzle {
            grid: grid.fill(&mut SimpleRng::new(5)),
            words,
        };
        PuzzleSession::new(puzzle, "Forest", 0)
    }

    #[test]
    fn test_reverse_drag_scores() {
        let mut s = session();
        // Dragging from the last E down to the T reads "EERT"
        let cells = resolve_line(CellPos::new(2, 3), CellPos::new(5, 3));
        assert_eq!(s.grid().read_path(&cells).as_deref(), Some("EERT"));

        let outcome = s.check_selection(&cells);
        match outcome {
            MatchOutcome::Found {
                word,
                points,
                completed,
                ..
            } => {
                assert_eq!(word, "TREE");
                assert_eq!(points, 60);
                assert!(!completed);
            }
            other => panic!("expected a find, got {other:?}"),
        }
        assert_eq!(s.score(), 60);
        assert!(s.words()[0].found);
    }

    #[test]
    fn test_word_found_only_once() {
        let mut s = session();
        let cells = resolve_line(CellPos::new(5, 3), CellPos::new(2, 3));
        assert!(s.check_selection(&cells).is_found());
        assert!(matches!(
            s.check_selection(&cells),
            MatchOutcome::Incorrect { .. }
        ));
        assert_eq!(s.score(), 60);
    }

    #[test]
    fn test_completion_fires_on_last_word() {
        let mut s = session();
        let moss = resolve_line(CellPos::new(0, 0), CellPos::new(0, 3));
        let tree = resolve_line(CellPos::new(5, 3), CellPos::new(2, 3));

        match s.check_selection(&moss) {
            MatchOutcome::Found { completed, .. } => assert!(!completed),
            other => panic!("unexpected {other:?}"),
        }
        assert!(!s.is_complete());
        match s.check_selection(&tree) {
            MatchOutcome::Found { completed, .. } => assert!(completed),
            other => panic!("unexpected {other:?}"),
        }
        assert!(s.is_complete());
        assert_eq!(s.check_selection(&tree), MatchOutcome::Inactive);
    }

    #[test]
    fn test_incorrect_leaves_state() {
        let mut s = session();
        let cells = vec![CellPos::new(7, 7)];
        let outcome = s.check_selection(&cells);
        assert_eq!(outcome, MatchOutcome::Incorrect { cells });
        assert_eq!(s.score(), 0);
        assert_eq!(s.found_count(), 0);
    }

    #[test]
    fn test_score_carries_over() {
        let mut grid = PlacementGrid::new(8);
        grid.place(b"TREE", CellPos::new(0, 0), Direction::Right);
        let mut words = ArrayVec::new();
        words.push(PlacedWord::new("TREE", CellPos::new(0, 0), Direction::Right));
        let puzzle = Puzzle {
            grid: grid.fill(&mut SimpleRng::new(1)),
            words,
        };
        let mut s = PuzzleSession::new(puzzle, "Forest", 100);
        s.check_selection(&resolve_line(CellPos::new(0, 0), CellPos::new(0, 3)));
        assert_eq!(s.score(), 160);
    }

    #[test]
    fn test_timer_counts_whole_seconds_until_complete() {
        let mut s = session();
        assert_eq!(s.tick(999), None);
        assert_eq!(s.tick(1), Some(1));
        assert_eq!(s.tick(2500), Some(3));
        assert_eq!(s.elapsed_secs(), 3);

        s.check_selection(&resolve_line(CellPos::new(0, 0), CellPos::new(0, 3)));
        s.check_selection(&resolve_line(CellPos::new(5, 3), CellPos::new(2, 3)));
        assert_eq!(s.tick(5000), None);
        assert_eq!(s.elapsed_secs(), 3);
    }

    #[test]
    fn test_empty_puzzle_is_complete() {
        let puzzle = Puzzle {
            grid: PlacementGrid::new(4).fill(&mut SimpleRng::new(1)),
            words: ArrayVec::new(),
        };
        let s = PuzzleSession::new(puzzle, "Forest", 0);
        assert!(s.is_complete());
    }
}
