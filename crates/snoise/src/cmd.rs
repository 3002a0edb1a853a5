//! Command handlers for the `snoise` CLI.

use anyhow::{Context, Result};
use seednoise::{Seed, noise_from_name, registry};
use tracing::{debug, info};

/// Sample the noise function `name` for `seed` at `coords`.
pub fn sample(name: &str, seed: u32, coords: &[f64]) -> Result<f64> {
    let noise = noise_from_name(name)
        .with_context(|| format!("valid options: {}", registry::NOISE_NAMES.join(", ")))?;
    debug!(%noise, seed, ?coords, "sampling");

    let table = Seed::new(seed);
    let value = noise
        .sample(&table, coords)
        .with_context(|| format!("cannot sample {}", noise.description()))?;
    info!(%noise, value, "sampled");
    Ok(value)
}

/// One line per registered function: key, description and output range.
pub fn list() -> Vec<String> {
    registry::REGISTRY
        .iter()
        .map(|noise| {
            let (lo, hi) = noise.bounds();
            format!(
                "- {} — {} — [{lo}, {hi:.4}]",
                noise.key(),
                noise.description()
            )
        })
        .collect()
}
