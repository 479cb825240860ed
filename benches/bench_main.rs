use std::hint::black_box;
use std::sync::Arc;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

use wayfront::{Frontier, GridCell, GridMap, Waypoint};

fn populated_frontier(side: i32) -> Frontier {
    let map = Arc::new(GridMap::new(side as usize, side as usize).unwrap());
    let mut frontier = Frontier::new(map);
    for x in 0..side {
        for y in 0..side {
            let reached = (x + y) as f32;
            frontier.add_open_waypoint(
                Waypoint::new(GridCell::new(x, y), reached, reached * 1.5).unwrap(),
            );
        }
    }
    frontier
}

fn min_scan(c: &mut Criterion) {
    for side in [8, 32] {
        let frontier = populated_frontier(side);
        let name = format!("min over {} open waypoints", side * side);
        c.bench_function(&name, |b| {
            b.iter(|| black_box(frontier.min_open_waypoint().unwrap().total_cost()))
        });
    }
}

fn expansion_cycle(c: &mut Criterion) {
    c.bench_function("peek, close, and re-offer neighbors", |b| {
        b.iter_batched(
            || populated_frontier(16),
            |mut frontier| {
                let current = frontier.min_open_waypoint().unwrap().clone();
                let cell = current.cell();
                frontier.close_waypoint(cell);
                for neighbor in [
                    GridCell::new(cell.x + 1, cell.y),
                    GridCell::new(cell.x - 1, cell.y),
                    GridCell::new(cell.x, cell.y + 1),
                    GridCell::new(cell.x, cell.y - 1),
                ] {
                    let reached = current.previous_cost() + 1.0;
                    frontier.add_open_waypoint(
                        Waypoint::new(neighbor, reached, reached + 1.0).unwrap(),
                    );
                }
                frontier
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, min_scan, expansion_cycle);
criterion_main!(benches);
