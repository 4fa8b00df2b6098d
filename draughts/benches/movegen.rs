use criterion::{black_box, criterion_group, criterion_main, Criterion};
use draughts::{Board, Game, RawBoard};

const BOARDS: [(&str, &str); 3] = [
    (
        "initial",
        "1m1m1m1m1m/m1m1m1m1m1/1m1m1m1m1m/m1m1m1m1m1/10/10/1M1M1M1M1M/M1M1M1M1M1/1M1M1M1M1M/M1M1M1M1M1 w",
    ),
    ("capture_chain", "9m/10/10/2m7/10/2m7/1M8/10/10/10 w"),
    ("flying_kings", "1K8/10/10/4k5/10/6K3/10/10/10/k9 w"),
];

fn build_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_board");
    for (name, fen) in BOARDS {
        let raw = RawBoard::from_fen(fen).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| Board::try_from(black_box(raw)).unwrap())
        });
    }
    group.finish();
}

fn play_opening(c: &mut Criterion) {
    // White b4-a5, Black a7-b6, as pairs of select and move actions.
    let clicks = [(1, 6), (0, 5), (0, 3), (1, 4)];
    c.bench_function("play_opening", |b| {
        b.iter(|| {
            let mut game = Game::new();
            for (col, row) in clicks {
                black_box(game.on_board_action(col, row));
            }
            game.board().side()
        })
    });
}

criterion_group!(benches, build_board, play_opening);
criterion_main!(benches);
