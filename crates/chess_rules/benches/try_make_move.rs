use chess_rules::{Game, Move, Square, Team};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    const MOVES: &str = "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 d2d4 e5d4 e4e5 d7d5 e5d6 f8d6";
    let moves = MOVES
        .split_whitespace()
        .map(|token| Move::parse(token).unwrap())
        .collect::<Vec<_>>();

    let mut game = Game::new();
    let mut team = Team::White;

    let mut group = c.benchmark_group("try_make_move");
    group.sample_size(1000);
    for &mv in &moves {
        let name = format!("try_make_move('{game}', '{mv}')");
        group.bench_function(&name, |b| {
            b.iter(|| {
                let mut game = game.clone();
                black_box(game.try_make_move(team, mv).unwrap());
            })
        });
        game.try_make_move(team, mv).unwrap();
        team = team.other();
    }

    // every white move from the starting position, most of them refused
    let start = Game::new();
    group.bench_function("check_move(every move from the start)", |b| {
        b.iter(|| {
            Square::all()
                .flat_map(|from| Square::all().map(move |to| Move::new(from, to)))
                .filter(|&mv| start.check_move(Team::White, mv).is_ok())
                .count()
        })
    });
    group.finish()
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
