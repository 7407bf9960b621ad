use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_search::core::{generate, resolve_line, themes, Game, PuzzleSession, SimpleRng};
use word_search::types::{CellPos, Category, GameAction};

fn bench_generate(c: &mut Criterion) {
    let words = themes(Category::Nature)[0].words;
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_8x8", |b| {
        b.iter(|| generate(black_box(words), 8, &mut rng))
    });
}

fn bench_resolve_line(c: &mut Criterion) {
    c.bench_function("resolve_diagonal_8", |b| {
        b.iter(|| resolve_line(black_box(CellPos::new(0, 0)), black_box(CellPos::new(7, 7))))
    });
}

fn bench_check_selection(c: &mut Criterion) {
    let puzzle = generate(themes(Category::Pop)[1].words, 8, &mut SimpleRng::new(7));
    let session = PuzzleSession::new(puzzle, "Music", 0);
    let path = resolve_line(CellPos::new(0, 0), CellPos::new(0, 5));

    c.bench_function("check_selection_miss", |b| {
        b.iter(|| {
            let mut s = session.clone();
            s.check_selection(black_box(&path))
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.apply_action(GameAction::Start);
    game.apply_action(GameAction::SelectCategory(Category::General));
    if let Some(request) = game.take_puzzle_request() {
        game.finish_puzzle(&request, request.theme.words);
    }

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(16));
            game.take_feedback();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.apply_action(GameAction::Start);
    game.apply_action(GameAction::SelectCategory(Category::Nature));
    if let Some(request) = game.take_puzzle_request() {
        game.finish_puzzle(&request, request.theme.words);
    }
    let mut snap = game.snapshot();

    c.bench_function("snapshot_into", |b| b.iter(|| game.snapshot_into(&mut snap)));
}

criterion_group!(
    benches,
    bench_generate,
    bench_resolve_line,
    bench_check_selection,
    bench_tick,
    bench_snapshot
);
criterion_main!(benches);
