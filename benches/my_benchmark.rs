use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grid_astar::prelude::*;
use nanorand::{Rng, WyRand};

fn random_grid(width: usize, height: usize, seed: u64) -> Grid {
    let mut rng = WyRand::new_seed(seed);
    // keep the corners open so that start and goal are never Walls
    Grid::from_terrain(width, height, |(x, y)| {
        if (x, y) == (0, 0) || (x, y) == (width as isize - 1, height as isize - 1) {
            return Terrain::Open;
        }
        match rng.generate_range(0..10_usize) {
            0..=1 => Terrain::Wall,
            2..=4 => Terrain::Weighted(rng.generate_range(2..10_usize)),
            _ => Terrain::Open,
        }
    })
}

fn bench_find_path(c: &mut Criterion) {
    for &size in [16_usize, 64, 256].iter() {
        let grid = random_grid(size, size, 4);
        let goal = (size as isize - 1, size as isize - 1);

        c.bench_function(&format!("find_path {0}x{0}", size), |b| {
            b.iter(|| find_path(black_box(&grid), black_box((0, 0)), black_box(goal)))
        });
    }
}

fn bench_a_star_open(c: &mut Criterion) {
    let grid = Grid::new(128, 128);
    c.bench_function("a_star_search open 128x128", |b| {
        b.iter(|| a_star_search(black_box(&grid), black_box((0, 0)), black_box((127, 127))))
    });
}

criterion_group!(benches, bench_find_path, bench_a_star_open);
criterion_main!(benches);
