//! Demonstration driver for quadfit.
//!
//! Samples a known quadratic at eight random points in [-1, 1), fits it, and
//! prints the recovered coefficients for comparison with the generator's.
//!
//! Run with `RUST_LOG=trace cargo run --bin demo` to see the solver's trace output.

use quadfit::prelude::*;
use rand::distr::Uniform;
use rand::prelude::*;

const A: f64 = 1.23;
const B: f64 = -9.87;
const C: f64 = 1e-2;
const N: usize = 8;

fn qfunc(x: f64) -> f64 {
    A * x.powi(2) + B * x + C
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(1);
    let dist = Uniform::new(-1.0, 1.0)?;
    let mut qfit = QuadraticFit::with_capacity(N);

    for i in 0..N {
        let x = dist.sample(&mut rng);
        let y = qfunc(x);
        qfit.add(x, y);

        println!("Point {}: ({}, {})", i, x, y);
    }

    let [a, b, c] = qfit.compute();

    println!("a = {}", a);
    println!("b = {}", b);
    println!("c = {}", c);

    log::info!("generator: a = {}, b = {}, c = {}", A, B, C);

    Ok(())
}
