use super::model::{Point, RawTable};

/// Parse a decimal float literal (`-1.5`, `.5`, `3e-2`, `+7`).
///
/// Locale independent, `.` as the decimal separator. Non-finite spellings
/// such as `inf` or `NaN` are rejected.
pub fn parse_number(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Convert columns `x_col` / `y_col` (0-based) of every row into points.
///
/// Returns `None` when either index is out of range or the table has no
/// rows. Rows where either cell is not a number are dropped; order is kept.
pub fn to_points(x_col: usize, y_col: usize, table: &RawTable) -> Option<Vec<Point>> {
    let width = table.column_count();
    if x_col >= width || y_col >= width || table.is_empty() {
        return None;
    }

    let points: Vec<Point> = table
        .rows
        .iter()
        .filter_map(|row| {
            let x = parse_number(row.get(x_col)?)?;
            let y = parse_number(row.get(y_col)?)?;
            Some(Point::new(x, y))
        })
        .collect();

    if points.len() < table.len() {
        log::debug!(
            "dropped {} non-numeric rows from columns ({x_col}, {y_col})",
            table.len() - points.len()
        );
    }
    Some(points)
}
