//! Terminal word search runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and a custom
//! framebuffer-based renderer. Word lookups run on a tokio runtime in the
//! background; the UI loop stays on the main thread.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::runtime::{Handle, Runtime};
use tracing::{debug, info};

use word_search::core::{Game, GameSnapshot, SimpleRng};
use word_search::input::{handle_key_event, should_quit, PointerTracker};
use word_search::lexicon::{DatamuseSource, LexiconProvider};
use word_search::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use word_search::types::{Feedback, GameAction, Phase, TICK_MS};
use word_search::{logging, AppConfig, PuzzleLoader};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &runtime);

    // Always try to restore terminal state.
    let _ = term.exit();
    runtime.shutdown_timeout(Duration::from_millis(100));
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, runtime: &Runtime) -> Result<()> {
    let rng = match config.seed {
        Some(seed) => SimpleRng::new(seed),
        None => SimpleRng::from_clock(),
    };
    info!(
        seed = rng.seed(),
        grid_size = config.grid_size,
        lexicon = %config.lexicon.base_url,
        "starting"
    );

    let mut game = Game::with_rng(rng, config.grid_size);
    let mut loader: PuzzleLoader<DatamuseSource> =
        PuzzleLoader::new(LexiconProvider::from_config(&config.lexicon));

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut pointer = PointerTracker::new();

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        dirty |= pump_puzzles(&mut game, &mut loader, runtime.handle());

        for feedback in game.take_feedback() {
            if matches!(feedback, Feedback::WordFound { .. } | Feedback::PuzzleComplete) {
                term.bell();
            }
            dirty = true;
        }

        // Render.
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key, game.phase()) {
                        dirty |= game.apply_action(action);
                    }
                }
                Event::Mouse(mouse) if game.phase() == Phase::Playing => {
                    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
                    let cell = view.cell_at(game.grid_size(), Viewport::new(w, h), mouse.column, mouse.row);
                    if let Some(event) = pointer.handle(mouse.kind, cell) {
                        dirty |= game.apply_action(GameAction::Pointer(event));
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if game.phase() != Phase::Playing {
            pointer.reset();
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            dirty |= game.tick(elapsed.as_millis() as u64);
        }
    }
}

/// Hand new requests to the loader and finished lookups to the game.
/// Returns true if a puzzle started
fn pump_puzzles(
    game: &mut Game,
    loader: &mut PuzzleLoader<DatamuseSource>,
    handle: &Handle,
) -> bool {
    if let Some(request) = game.take_puzzle_request() {
        loader.spawn(handle, request);
    }

    let mut started = false;
    while let Some(loaded) = loader.try_recv() {
        if game.finish_puzzle(&loaded.request, &loaded.words) {
            started = true;
        } else {
            debug!(request = loaded.request.id, "discarded stale puzzle");
        }
    }
    started
}
