use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::Point;
use super::stats::Statistics;

/// Write `points` as a two-column CSV with the given header names.
pub fn write_points_csv<W: Write>(writer: W, x_name: &str, y_name: &str, points: &[Point]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record([x_name, y_name])
        .context("writing CSV header")?;
    for p in points {
        csv_writer
            .write_record([p.x.to_string(), p.y.to_string()])
            .context("writing CSV row")?;
    }
    csv_writer.flush().context("flushing CSV output")?;
    Ok(())
}

/// Save `points` to a CSV file.
pub fn save_points_csv(path: &Path, x_name: &str, y_name: &str, points: &[Point]) -> Result<()> {
    if points.is_empty() {
        bail!("no points to export");
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_points_csv(file, x_name, y_name, points)
}

/// Save the statistics summary as pretty-printed JSON.
pub fn save_statistics_json(path: &Path, stats: &Statistics) -> Result<()> {
    let json = serde_json::to_string_pretty(stats).context("serializing statistics")?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
