//! Game module - the session controller
//!
//! [`Game`] owns the phase machine and the current [`PuzzleSession`], and is
//! the only thing that mutates them:
//!
//! ```text
//! Welcome ──Start──▶ CategorySelect ──SelectCategory──▶ (loading) ──▶ Playing
//!    ▲                                                               │   ▲
//!    └──────────────────────── BackToWelcome ◀───────────────────────┘   │
//!                                                      NewPuzzle ────────┘
//! ```
//!
//! Puzzle creation is split in two so the word lookup can run elsewhere:
//! selecting a category issues a [`PuzzleRequest`] (taken by the runner with
//! [`Game::take_puzzle_request`]); the runner fetches words and hands them back
//! through [`Game::finish_puzzle`]. Only one request is outstanding at a time.
//!
//! All effects on the presentation layer are reported as [`Feedback`] events,
//! drained with [`Game::take_feedback`].

use tracing::{debug, info};

use crate::catalog::{themes, Theme, WELCOME_QUOTES};
use crate::effects::CellEffects;
use crate::generator::generate;
use crate::matching::MatchOutcome;
use crate::rng::{RandomSource, SimpleRng};
use crate::selection::DragState;
use crate::session::PuzzleSession;
use crate::snapshot::{GameSnapshot, WordStatus};
use crate::types::*;

/// A puzzle the runner should fetch words for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleRequest {
    pub id: u32,
    pub category: Category,
    pub theme: &'static Theme,
}

#[derive(Debug, Clone)]
pub struct Game<R: RandomSource = SimpleRng> {
    phase: Phase,
    category: Option<Category>,
    grid_size: usize,
    /// Puzzles started since leaving the welcome screen.
    level: u32,
    /// Score carried into the next puzzle.
    score: u32,
    session: Option<PuzzleSession>,
    loading: bool,
    request_id: u32,
    pending: Option<PuzzleRequest>,
    drag: DragState,
    cursor: CellPos,
    cursor_visible: bool,
    effects: CellEffects,
    quote_index: usize,
    feedback: Vec<Feedback>,
    rng: R,
}

impl Game<SimpleRng> {
    /// Create a game on the default 8x8 grid with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed), DEFAULT_GRID_SIZE)
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a game with an injected random source.
    ///
    /// `grid_size` is clamped to `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    pub fn with_rng(mut rng: R, grid_size: usize) -> Self {
        let grid_size = grid_size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        let quote_index = rng.choose_index(WELCOME_QUOTES.len());
        Self {
            phase: Phase::Welcome,
            category: None,
            grid_size,
            level: 0,
            score: 0,
            session: None,
            loading: false,
            request_id: 0,
            pending: None,
            drag: DragState::new(),
            cursor: CellPos::default(),
            cursor_visible: false,
            effects: CellEffects::new(grid_size),
            quote_index,
            feedback: Vec::new(),
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.session
            .as_ref()
            .map(PuzzleSession::score)
            .unwrap_or(self.score)
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn session(&self) -> Option<&PuzzleSession> {
        self.session.as_ref()
    }

    pub fn selection(&self) -> &[CellPos] {
        self.drag.path()
    }

    pub fn cursor(&self) -> CellPos {
        self.cursor
    }

    pub fn effects(&self) -> &CellEffects {
        &self.effects
    }

    pub fn quote(&self) -> &'static str {
        WELCOME_QUOTES[self.quote_index % WELCOME_QUOTES.len()]
    }

    /// True when grid gestures are accepted
    pub fn accepts_selection(&self) -> bool {
        self.phase == Phase::Playing
            && !self.loading
            && self
                .session
                .as_ref()
                .is_some_and(|s| !s.is_complete())
    }

    /// Drain pending presentation events.
    pub fn take_feedback(&mut self) -> Vec<Feedback> {
        std::mem::take(&mut self.feedback)
    }

    /// Hand the outstanding puzzle request to the runner (once).
    pub fn take_puzzle_request(&mut self) -> Option<PuzzleRequest> {
        self.pending.take()
    }

    /// Apply a player action.
    /// Returns true if the action changed anything
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => {
                if self.phase != Phase::Welcome {
                    return false;
                }
                self.phase = Phase::CategorySelect;
                debug!("entered category select");
                true
            }
            GameAction::SelectCategory(category) => {
                if self.phase != Phase::CategorySelect {
                    return false;
                }
                self.request_puzzle(category)
            }
            GameAction::NewPuzzle => match (self.phase, self.category) {
                (Phase::Playing, Some(category)) => self.request_puzzle(category),
                _ => false,
            },
            GameAction::BackToWelcome => self.back_to_welcome(),
            GameAction::Pointer(event) => self.pointer(event),
            GameAction::CursorMove(dr, dc) => self.move_cursor(dr, dc),
            GameAction::CursorToggle => self.toggle_cursor_selection(),
            GameAction::CursorCancel => {
                if !self.drag.cancel() {
                    return false;
                }
                self.feedback.push(Feedback::SelectionChanged(Vec::new()));
                true
            }
        }
    }

    /// Issue a request for a new puzzle in `category`.
    ///
    /// Refused while another request is in flight.
    fn request_puzzle(&mut self, category: Category) -> bool {
        if self.loading {
            return false;
        }

        let choices = themes(category);
        let theme = &choices[self.rng.choose_index(choices.len())];
        self.request_id = self.request_id.wrapping_add(1);
        self.category = Some(category);
        self.loading = true;
        self.drag.cancel();
        self.pending = Some(PuzzleRequest {
            id: self.request_id,
            category,
            theme,
        });
        self.feedback.push(Feedback::PuzzleLoading);
        info!(
            request = self.request_id,
            category = category.as_str(),
            theme = theme.name,
            "puzzle requested"
        );
        true
    }

    /// Complete an outstanding request with the words the runner obtained.
    ///
    /// Returns false for a stale or unknown request (for example one issued
    /// before the player went back to the welcome screen).
    pub fn finish_puzzle<S: AsRef<str>>(&mut self, request: &PuzzleRequest, words: &[S]) -> bool {
        if !self.loading || request.id != self.request_id {
            debug!(request = request.id, "dropping stale puzzle");
            return false;
        }

        let puzzle = generate(words, self.grid_size, &mut self.rng);
        let carried = self.score();
        let session = PuzzleSession::new(puzzle, request.theme.name, carried);
        let word_count = session.words().len();

        self.score = carried;
        self.level = self.level.saturating_add(1);
        self.loading = false;
        self.pending = None;
        self.phase = Phase::Playing;
        self.drag.cancel();
        self.effects = CellEffects::new(self.grid_size);
        self.cursor = CellPos::default();
        self.feedback.push(Feedback::PuzzleStarted {
            theme: request.theme.name,
            words: word_count,
        });
        if session.is_complete() {
            self.feedback.push(Feedback::PuzzleComplete);
        }
        self.session = Some(session);

        info!(
            level = self.level,
            theme = request.theme.name,
            words = word_count,
            "puzzle started"
        );
        true
    }

    fn back_to_welcome(&mut self) -> bool {
        if self.phase == Phase::Welcome {
            return false;
        }
        self.phase = Phase::Welcome;
        self.category = None;
        self.session = None;
        self.loading = false;
        self.pending = None;
        // Any lookup still running now carries a stale id.
        self.request_id = self.request_id.wrapping_add(1);
        self.level = 0;
        self.score = 0;
        self.drag.cancel();
        self.cursor_visible = false;
        self.effects = CellEffects::new(self.grid_size);
        self.quote_index = self.rng.choose_index(WELCOME_QUOTES.len());
        debug!("back to welcome");
        true
    }

    fn pointer(&mut self, event: PointerEvent) -> bool {
        if !self.accepts_selection() {
            return false;
        }
        self.cursor_visible = false;

        match event {
            PointerEvent::Down(cell) => {
                if !cell.in_bounds(self.grid_size) || !self.drag.begin(cell) {
                    return false;
                }
                self.push_selection();
                true
            }
            PointerEvent::Move(cell) if cell.in_bounds(self.grid_size) => {
                if !self.drag.extend(cell) {
                    return false;
                }
                self.push_selection();
                true
            }
            // Moving off the grid ends the gesture like a release.
            PointerEvent::Move(_) | PointerEvent::Up | PointerEvent::Leave => {
                self.release_selection()
            }
        }
    }

    fn move_cursor(&mut self, dr: i16, dc: i16) -> bool {
        if !self.accepts_selection() {
            return false;
        }
        let max = self.grid_size as i16 - 1;
        let next = CellPos::new(
            (self.cursor.row + dr).clamp(0, max),
            (self.cursor.col + dc).clamp(0, max),
        );
        let moved = next != self.cursor || !self.cursor_visible;
        self.cursor = next;
        self.cursor_visible = true;
        if self.drag.extend(next) {
            self.push_selection();
        }
        moved
    }

    fn toggle_cursor_selection(&mut self) -> bool {
        if !self.accepts_selection() {
            return false;
        }
        self.cursor_visible = true;
        if self.drag.is_active() {
            return self.release_selection();
        }
        self.drag.begin(self.cursor);
        self.push_selection();
        true
    }

    fn push_selection(&mut self) {
        self.feedback
            .push(Feedback::SelectionChanged(self.drag.path().to_vec()));
    }

    /// Close the open gesture and check it against the targets.
    fn release_selection(&mut self) -> bool {
        let Some(cells) = self.drag.finish() else {
            return false;
        };
        self.feedback.push(Feedback::SelectionChanged(Vec::new()));

        let Some(session) = self.session.as_mut() else {
            return false;
        };

        match session.check_selection(&cells) {
            MatchOutcome::Found {
                word,
                cells,
                completed,
                ..
            } => {
                self.effects.found(&cells);
                self.score = session.score();
                self.feedback.push(Feedback::WordFound { word, cells });
                self.feedback.push(Feedback::ScoreChanged(self.score));
                if completed {
                    self.feedback.push(Feedback::PuzzleComplete);
                }
            }
            MatchOutcome::Incorrect { cells } => {
                self.effects.incorrect(&cells);
                self.feedback.push(Feedback::WordIncorrect { cells });
            }
            MatchOutcome::Inactive => return false,
        }
        true
    }

    /// Advance timers by `elapsed_ms`.
    ///
    /// The elapsed-second counter runs only while a loaded puzzle is in play
    /// and not yet complete. Returns true if anything visible changed.
    pub fn tick(&mut self, elapsed_ms: u64) -> bool {
        let mut changed = self.effects.tick(elapsed_ms);

        if self.phase == Phase::Playing && !self.loading {
            if let Some(secs) = self.session.as_mut().and_then(|s| s.tick(elapsed_ms)) {
                self.feedback.push(Feedback::TimerTick(secs));
                changed = true;
            }
        }

        changed
    }

    /// Copy everything the view needs into `out`, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.loading = self.loading;
        out.category = self.category;
        out.level = self.level;
        out.score = self.score();
        out.quote = self.quote();
        out.grid_size = self.grid_size;
        out.cursor = self.cursor_visible.then_some(self.cursor);

        out.selection.clear();
        out.selection.extend_from_slice(self.drag.path());
        out.marks.clear();
        out.marks.extend(self.effects.marks());
        out.letters.clear();
        out.words.clear();

        match &self.session {
            Some(session) => {
                out.theme = Some(session.theme());
                out.elapsed_secs = session.elapsed_secs();
                out.complete = session.is_complete();
                out.letters.extend_from_slice(session.grid().cells());
                out.words.extend(session.words().iter().map(|w| WordStatus {
                    word: w.word.clone(),
                    found: w.found,
                }));
            }
            None => {
                out.theme = None;
                out.elapsed_secs = 0;
                out.complete = false;
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(seed: u32) -> Game {
        let mut game = Game::new(seed);
        assert!(game.apply_action(GameAction::Start));
        assert!(game.apply_action(GameAction::SelectCategory(Category::Nature)));
        let req = game.take_puzzle_request().unwrap();
        assert!(game.finish_puzzle(&req, req.theme.words));
        game.take_feedback();
        game
    }

    /// Find every target through pointer drags, first letter to last.
    fn solve(game: &mut Game) {
        let targets: Vec<(CellPos, CellPos)> = game
            .session()
            .unwrap()
            .words()
            .iter()
            .map(|w| (w.start, w.start.step(w.direction, w.word.len() as i16 - 1)))
            .collect();
        for (start, end) in targets {
            game.apply_action(GameAction::Pointer(PointerEvent::Down(start)));
            game.apply_action(GameAction::Pointer(PointerEvent::Move(end)));
            game.apply_action(GameAction::Pointer(PointerEvent::Up));
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(12345);
        assert_eq!(game.phase(), Phase::Welcome);
        assert_eq!(game.level(), 0);
        assert_eq!(game.score(), 0);
        assert!(!game.loading());
        assert!(game.session().is_none());
        assert!(WELCOME_QUOTES.contains(&game.quote()));
    }

    #[test]
    fn test_phase_flow() {
        let mut game = Game::new(1);
        assert!(!game.apply_action(GameAction::SelectCategory(Category::Pop)));
        assert!(game.apply_action(GameAction::Start));
        assert_eq!(game.phase(), Phase::CategorySelect);
        assert!(!game.apply_action(GameAction::Start));

        assert!(game.apply_action(GameAction::SelectCategory(Category::Pop)));
        assert!(game.loading());
        assert_eq!(game.take_feedback(), vec![Feedback::PuzzleLoading]);

        let req = game.take_puzzle_request().unwrap();
        assert_eq!(req.category, Category::Pop);
        assert!(themes(Category::Pop).contains(req.theme));
        assert!(game.take_puzzle_request().is_none());

        assert!(game.finish_puzzle(&req, req.theme.words));
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.level(), 1);
        assert!(!game.loading());
        let session = game.session().unwrap();
        assert!((1..=MAX_WORDS).contains(&session.words().len()));
    }

    #[test]
    fn test_single_outstanding_request() {
        let mut game = Game::new(1);
        game.apply_action(GameAction::Start);
        assert!(game.apply_action(GameAction::SelectCategory(Category::Nature)));
        assert!(!game.apply_action(GameAction::SelectCategory(Category::Pop)));
        let req = game.take_puzzle_request().unwrap();
        assert_eq!(req.category, Category::Nature);
    }

    #[test]
    fn test_stale_request_dropped_after_back_to_welcome() {
        let mut game = Game::new(1);
        game.apply_action(GameAction::Start);
        game.apply_action(GameAction::SelectCategory(Category::Nature));
        let req = game.take_puzzle_request().unwrap();

        assert!(game.apply_action(GameAction::BackToWelcome));
        assert!(!game.finish_puzzle(&req, req.theme.words));
        assert_eq!(game.phase(), Phase::Welcome);
        assert!(game.session().is_none());
    }

    #[test]
    fn test_new_puzzle_keeps_score_and_bumps_level() {
        let mut game = playing(3);
        solve(&mut game);
        let score = game.score();
        assert!(score > 0);

        assert!(game.apply_action(GameAction::NewPuzzle));
        let req = game.take_puzzle_request().unwrap();
        assert!(game.finish_puzzle(&req, req.theme.words));
        assert_eq!(game.level(), 2);
        assert_eq!(game.score(), score);
        assert!(!game.session().unwrap().is_complete());
    }

    #[test]
    fn test_back_to_welcome_resets_run() {
        let mut game = playing(3);
        solve(&mut game);
        assert!(game.apply_action(GameAction::BackToWelcome));
        assert_eq!(game.phase(), Phase::Welcome);
        assert_eq!(game.score(), 0);
        assert_eq!(game.level(), 0);
        assert!(game.category().is_none());
    }

    #[test]
    fn test_completion_fires_once() {
        let mut game = playing(11);
        solve(&mut game);
        let fb = game.take_feedback();
        let completes = fb
            .iter()
            .filter(|f| matches!(f, Feedback::PuzzleComplete))
            .count();
        assert_eq!(completes, 1);
        assert!(game.session().unwrap().is_complete());

        // Further gestures are ignored
        assert!(!game.apply_action(GameAction::Pointer(PointerEvent::Down(CellPos::new(0, 0)))));
        assert!(game.take_feedback().is_empty());
    }

    #[test]
    fn test_pointer_leave_resolves_selection() {
        let mut game = playing(5);
        let (start, end) = {
            let w = &game.session().unwrap().words()[0];
            (w.start, w.start.step(w.direction, w.word.len() as i16 - 1))
        };
        game.apply_action(GameAction::Pointer(PointerEvent::Down(end)));
        game.apply_action(GameAction::Pointer(PointerEvent::Move(start)));
        assert!(game.apply_action(GameAction::Pointer(PointerEvent::Leave)));

        let fb = game.take_feedback();
        assert!(fb.iter().any(|f| matches!(f, Feedback::WordFound { .. })));
        assert!(game.session().unwrap().words()[0].found);
        assert!(game.selection().is_empty());
    }

    #[test]
    fn test_incorrect_selection_feedback() {
        let mut game = playing(5);
        let cell = CellPos::new(0, 0);
        game.apply_action(GameAction::Pointer(PointerEvent::Down(cell)));
        game.apply_action(GameAction::Pointer(PointerEvent::Up));
        let fb = game.take_feedback();
        assert!(fb.contains(&Feedback::WordIncorrect { cells: vec![cell] }));
        assert_eq!(game.effects().mark_at(cell), Some(CellMark::Incorrect));
        assert_eq!(game.score(), 0);

        game.tick(INCORRECT_FLASH_MS);
        assert_eq!(game.effects().mark_at(cell), None);
    }

    #[test]
    fn test_keyboard_selection() {
        let mut game = playing(5);
        let w = game.session().unwrap().words()[0].clone();
        let end = w.start.step(w.direction, w.word.len() as i16 - 1);

        // Walk the cursor to the word start
        let (dr, dc) = (w.start.row, w.start.col);
        game.apply_action(GameAction::CursorMove(dr, dc));
        assert_eq!(game.cursor(), w.start);

        assert!(game.apply_action(GameAction::CursorToggle));
        game.apply_action(GameAction::CursorMove(end.row - w.start.row, end.col - w.start.col));
        assert_eq!(game.selection().len(), w.word.len());
        assert!(game.apply_action(GameAction::CursorToggle));
        assert!(game.session().unwrap().words()[0].found);
    }

    #[test]
    fn test_cursor_cancel() {
        let mut game = playing(5);
        game.apply_action(GameAction::CursorToggle);
        assert_eq!(game.selection().len(), 1);
        assert!(game.apply_action(GameAction::CursorCancel));
        assert!(game.selection().is_empty());
        assert!(!game.apply_action(GameAction::CursorCancel));
    }

    #[test]
    fn test_timer_runs_only_while_playing() {
        let mut game = Game::new(1);
        assert!(!game.tick(5000));

        let mut game = playing(1);
        assert!(game.tick(1000));
        assert_eq!(game.take_feedback(), vec![Feedback::TimerTick(1)]);

        game.apply_action(GameAction::NewPuzzle);
        game.take_feedback();
        assert!(!game.tick(3000), "timer pauses while loading");
    }

    #[test]
    fn test_snapshot() {
        let game = playing(2);
        let snap = game.snapshot();
        assert_eq!(snap.phase, Phase::Playing);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.letters.len(), 64);
        assert_eq!(snap.marks.len(), 64);
        assert_eq!(snap.words.len(), game.session().unwrap().words().len());
        assert!(snap.theme.is_some());
        assert!(snap.cursor.is_none());
    }
}
