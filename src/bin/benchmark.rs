//! Step throughput benchmark across field sizes

use std::time::Instant;

use lyff::Field;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0x5eed;
const DENSITY: f64 = 0.3;

/// Field filled with a reproducible random soup
fn random_field(size: usize, rng: &mut StdRng) -> Field {
    let mut field = Field::new(size, size).expect("benchmark sizes are non-zero");
    for y in 0..size as i64 {
        for x in 0..size as i64 {
            field.set(x, y, rng.random_bool(DENSITY));
        }
    }
    field
}

/// Average milliseconds per generation
fn benchmark_step(size: usize, iterations: u32) -> (f64, usize) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut field = random_field(size, &mut rng);

    let start = Instant::now();
    for _ in 0..iterations {
        field.step();
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, field.population())
}

fn main() {
    println!("=== Field::step Benchmark ===\n");

    let sizes = [16, 64, 128, 256, 512, 1024];
    let iterations = 20;

    println!(
        "{:>10} {:>12} {:>14} {:>12}",
        "Size", "ms/gen", "Mcells/sec", "Population"
    );
    println!("{:-<52}", "");

    for size in sizes {
        let (ms, population) = benchmark_step(size, iterations);
        let cells = (size * size) as f64;
        println!(
            "{:>10} {:>12.3} {:>14.1} {:>12}",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0,
            population
        );
    }

    println!("\nReference setup (64x64 at 200000 updates/s) needs one step every 5us.");
}
