use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wumpus_belief::Knowledge;
use wumpus_core::{Direction, Percept, Point, Pose};
use wumpus_plan::Planner;

/// A fully explored, hazard-free cave: every interior cell visited in a quiet state.
fn explored_cave(size: usize) -> Knowledge {
    let last = size as i32 - 2;
    let mut k = Knowledge::new(size);
    for y in 1..=last {
        for x in 1..=last {
            k = k.observe(Point::new(x, y), Percept::none());
        }
    }
    k
}

/// Only the first row explored, with a breeze at its far end, so the frontier is long and thin.
fn corridor(size: usize) -> Knowledge {
    let last = size as i32 - 2;
    let mut k = Knowledge::new(size);
    for x in 1..last {
        k = k.observe(Point::new(x, 1), Percept::none());
    }
    k.observe(Point::new(last, 1), Percept::none().with_breeze())
}

fn bench_planner(c: &mut Criterion) {
    let cave = explored_cave(32);
    let far_corner = Pose::new(Point::new(30, 30), Direction::South);

    c.bench_function("wumpus-plan/search(home, size=32)", |b| {
        b.iter(|| {
            let plan = Planner::new(&cave, true)
                .search(black_box(far_corner))
                .expect("plan");
            black_box(plan.steps.len());
        })
    });

    let row = corridor(32);
    let row_end = Pose::new(Point::new(29, 1), Direction::West);

    c.bench_function("wumpus-plan/search(frontier, size=32)", |b| {
        b.iter(|| {
            let plan = Planner::new(&row, false)
                .search(black_box(row_end))
                .expect("plan");
            black_box(plan.steps.len());
        })
    });
}

criterion_group!(benches, bench_planner);
criterion_main!(benches);
