use cozy_chess::Board;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heatmap::{placement_field, render, PieceSet};

const SQUARE_SIZE: u32 = 64;

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
];

fn bench_render(c: &mut Criterion) {
    let pieces = PieceSet::placeholder(SQUARE_SIZE);
    let mut group = c.benchmark_group("render");

    for fen in POSITIONS {
        let board: Board = fen.parse().unwrap();
        let field = placement_field(fen);

        group.bench_with_input(BenchmarkId::new("plain", field), &field, |b, field| {
            b.iter(|| render(&pieces, black_box(field), None).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("contested", field), &board, |b, board| {
            b.iter(|| {
                let grid = metrics::contested(black_box(board)).to_grid();
                render(&pieces, field, Some(&grid)).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
