//! Minimal example: build a seed, sample a few noise functions along a line.

use std::error::Error;

use seednoise::{Seed, cell2_range, perlin2};

fn main() -> Result<(), Box<dyn Error>> {
    let seed = Seed::new(42);

    // Typed functions take a fixed-size point.
    for i in 0..5 {
        let x = f64::from(i) * 0.37;
        println!(
            "x = {x:.2}: perlin2 = {:+.4}, cell2_range = {:.4}",
            perlin2(&seed, &[x, 0.5]),
            cell2_range(&seed, &[x, 0.5])
        );
    }

    // The registry samples through a slice and checks its length.
    let noise = seednoise::noise_from_name("open_simplex3")?;
    let value = noise.sample(&seed, &[0.1, 0.2, 0.3])?;
    println!("{}: {value:+.4}", noise.description());

    assert!(noise.sample(&seed, &[0.1, 0.2]).is_err());

    Ok(())
}
