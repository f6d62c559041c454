use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const SLOPE: f64 = 1.8;
const INTERCEPT: f64 = -4.0;
const NOISE: f64 = 2.5;
const ROWS: usize = 200;

/// Writes `sample_data.csv`: a preamble, a header and `ROWS` noisy samples
/// of `y = SLOPE * x + INTERCEPT`, plus a few malformed lines the parser and
/// extractor are expected to drop.
fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_data.csv".to_string());

    let mut file = File::create(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writeln!(file, "# Synthetic linear data, seed 42")?;
    writeln!(file, "# y = {SLOPE} * x + {INTERCEPT} + N(0, {NOISE})")?;

    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(file);
    writer.write_record(["x", "y", "noise"])?;
    for i in 0..ROWS {
        let x = i as f64 * 0.25;
        let noise = rng.gauss(0.0, NOISE);
        let y = SLOPE * x + INTERCEPT + noise;
        writer.write_record([format!("{x:.2}"), format!("{y:.4}"), format!("{noise:.4}")])?;

        // Sprinkle in rows that should be skipped.
        if i % 50 == 25 {
            writer.write_record(["n/a", "missing", "-"])?;
        }
    }
    writer.write_record(["end of data"])?;
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {ROWS} samples to {output_path}");
    Ok(())
}
