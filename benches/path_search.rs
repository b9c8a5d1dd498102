//! Throughput of every engine on the benchmark grids. Each lowercase cell is
//! a start and every `X` is a goal.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathsearch::{
    graphs::{Grid, GridGraph, Location},
    search::{AStar, AStarMultiPath, Dijkstra, DijkstraMultiPath},
};

const GRIDS: [(&str, &str); 3] = [
    ("small", include_str!("../benchmarks/grids/small.txt")),
    ("medium", include_str!("../benchmarks/grids/medium.txt")),
    ("large", include_str!("../benchmarks/grids/large.txt")),
];

struct Scenario {
    name: &'static str,
    grid: Grid,
    starts: Vec<Location>,
    goals: Vec<Location>,
}

fn scenarios() -> Vec<Scenario> {
    GRIDS
        .iter()
        .map(|&(name, text)| {
            let grid = Grid::from_text(text).expect("benchmark grid should parse");
            let starts = grid.locations_where(|c| c.is_ascii_lowercase());
            let goals = grid.locations_where(|c| c == 'X');
            Scenario {
                name,
                grid,
                starts,
                goals,
            }
        })
        .collect()
}

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_search");
    for scenario in scenarios() {
        let graph = GridGraph::new(&scenario.grid);
        let starts = &scenario.starts;
        let goals = &scenario.goals;

        group.bench_with_input(BenchmarkId::new("astar", scenario.name), &graph, |b, graph| {
            let engine = AStar::new(graph);
            b.iter(|| {
                for &start in starts {
                    black_box(engine.search(start, goals.iter().copied()).ok());
                }
            });
        });
        group.bench_with_input(
            BenchmarkId::new("astar-multi-path", scenario.name),
            &graph,
            |b, graph| {
                let engine = AStarMultiPath::new(graph);
                b.iter(|| {
                    for &start in starts {
                        black_box(engine.search(start, goals.iter().copied()).ok());
                    }
                });
            },
        );
        group.bench_with_input(BenchmarkId::new("dijkstra", scenario.name), &graph, |b, graph| {
            let engine = Dijkstra::new(graph);
            b.iter(|| {
                for &start in starts {
                    black_box(engine.search(start));
                }
            });
        });
        group.bench_with_input(
            BenchmarkId::new("dijkstra-multi-path", scenario.name),
            &graph,
            |b, graph| {
                let engine = DijkstraMultiPath::new(graph);
                b.iter(|| {
                    for &start in starts {
                        black_box(engine.search(start));
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
