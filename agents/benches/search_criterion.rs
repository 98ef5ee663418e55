use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use minichess_agents::{alphabeta, minimax, minimax_parallel};
use minichess_core::{perft, Board, Side};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    layout: &'static str,
    turn: Side,
    depths: &'static [u32],
}

const START: &str = "\
rnbqkbnr
pppppppp
........
........
........
........
PPPPPPPP
RNBQKBNR
";

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "start",
        layout: START,
        turn: Side::White,
        depths: &[2, 3],
    },
    BenchCase {
        name: "middlegame",
        layout: "\
r.bqk..r
pp..bppp
..np.n..
..p.p...
..B.P...
..NP.N..
PPP..PPP
R.BQK..R
",
        turn: Side::White,
        depths: &[2, 3],
    },
    BenchCase {
        name: "endgame",
        layout: "\
....k...
..r.....
........
...p....
...P....
........
.....Q..
....K...
",
        turn: Side::Black,
        depths: &[3, 4],
    },
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in CASES {
        let board = Board::from_layout(case.layout, case.turn).expect("benchmark layout should load");

        for &depth in case.depths {
            // Both searches must agree before timing them.
            let expected = minimax(&mut board.clone(), depth);
            let pruned = alphabeta(&mut board.clone(), depth, f64::NEG_INFINITY, f64::INFINITY);
            assert_eq!(
                (expected.score, expected.best_move),
                (pruned.score, pruned.best_move),
                "search mismatch for {} depth {}",
                case.name,
                depth
            );

            let id = format!("{}_d{}", case.name, depth);

            group.bench_with_input(BenchmarkId::new("minimax", &id), &depth, |b, &depth| {
                let mut scratch = board.clone();
                b.iter(|| black_box(minimax(black_box(&mut scratch), depth).score));
            });

            group.bench_with_input(BenchmarkId::new("alphabeta", &id), &depth, |b, &depth| {
                let mut scratch = board.clone();
                b.iter(|| {
                    black_box(
                        alphabeta(black_box(&mut scratch), depth, f64::NEG_INFINITY, f64::INFINITY)
                            .score,
                    )
                });
            });

            group.bench_with_input(BenchmarkId::new("parallel_4", &id), &depth, |b, &depth| {
                b.iter(|| black_box(minimax_parallel(black_box(&board), depth, 4).score));
            });
        }
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    let board = Board::from_layout(START, Side::White).expect("benchmark layout should load");

    // Neither side reaches the other's king within four plies
    for (depth, expected) in [(1u8, 12u64), (2, 144), (3, 2_124), (4, 31_360)] {
        let mut scratch = board.clone();
        assert_eq!(perft(&mut scratch, depth), expected, "node mismatch at depth {depth}");

        group.throughput(Throughput::Elements(expected));
        group.bench_with_input(BenchmarkId::new("start", depth), &depth, |b, &depth| {
            b.iter(|| black_box(perft(black_box(&mut scratch), depth)));
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_search, bench_perft);
criterion_main!(search_benches);
