//! Benchmarks for the hot paths of a tile placement: grouping and
//! corporation adjacency.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use acquire_engine::board::{adjacent_placed_tiles, unincorporated_groups, TileBag};
use acquire_engine::core::{Board, Corporation, GameRng, Tile};
use acquire_engine::corporations::CorporationRegistry;

/// A realistic mid-game board: `count` random tiles.
fn scattered(count: usize, seed: u64) -> Vec<Tile> {
    let board = Board::default();
    let mut bag = TileBag::full(&board);
    bag.draw_many(count, &mut GameRng::new(seed))
}

fn bench_grouping(c: &mut Criterion) {
    let board = Board::default();
    let sparse = scattered(20, 1);
    let dense = scattered(60, 2);

    c.bench_function("groups_sparse_20", |b| {
        b.iter(|| black_box(unincorporated_groups(black_box(&board), black_box(&sparse))));
    });

    c.bench_function("groups_dense_60", |b| {
        b.iter(|| black_box(unincorporated_groups(black_box(&board), black_box(&dense))));
    });

    let groups = unincorporated_groups(&board, &dense);
    let probe = Tile::new(54);
    c.bench_function("adjacent_placed_dense_60", |b| {
        b.iter(|| {
            black_box(adjacent_placed_tiles(
                black_box(&board),
                black_box(&dense),
                black_box(&groups),
                black_box(probe),
            ))
        });
    });
}

fn bench_adjacency(c: &mut Criterion) {
    let board = Board::default();
    let mut registry = CorporationRegistry::new(25, 11);
    let rows: [(Corporation, u16); 4] = [
        (Corporation::Phoenix, 0),
        (Corporation::Hydra, 24),
        (Corporation::America, 48),
        (Corporation::Zeta, 72),
    ];
    for (corporation, start) in rows {
        let tiles: Vec<Tile> = (start..start + 10).map(Tile::new).collect();
        registry.establish(corporation, &tiles).unwrap();
    }

    c.bench_function("blocks_merge_all_tiles", |b| {
        b.iter(|| {
            board
                .tiles()
                .filter(|&t| registry.blocks_merge(black_box(&board), t))
                .count()
        });
    });
}

criterion_group!(benches, bench_grouping, bench_adjacency);
criterion_main!(benches);
