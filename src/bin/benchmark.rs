//! Compare serial and rayon-parallel generation stepping

use std::time::Instant;

use life_panel::Grid;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn random_grid(size: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = Grid::new(size, size);
    grid.randomize(&mut rng, 0.3);
    grid
}

/// Average milliseconds per generation
fn benchmark(size: usize, iterations: u32, step: fn(&Grid) -> Grid) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("Game of Life step benchmark");
    println!("===========================");
    println!();
    println!("{:>10} {:>12} {:>12} {:>9}", "size", "serial ms", "parallel ms", "speedup");

    for &(size, iterations) in &[(80, 200), (200, 100), (500, 20), (1000, 5), (2000, 2)] {
        let serial = benchmark(size, iterations, Grid::step);
        let parallel = benchmark(size, iterations, Grid::step_parallel);
        println!(
            "{:>10} {:>12.3} {:>12.3} {:>8.1}x",
            format!("{}x{}", size, size),
            serial,
            parallel,
            serial / parallel
        );
    }
}
