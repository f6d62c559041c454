use super::model::Point;

// ---------------------------------------------------------------------------
// X-range filter
// ---------------------------------------------------------------------------

/// Keep the points whose `x` lies inside the inclusive window.
///
/// A `None` bound leaves that side open; with both bounds `None` the input
/// is returned unchanged. Statistics are not touched here, callers rerun
/// [`Statistics::compute`](super::stats::Statistics::compute) on the result.
pub fn filter_by_x_range(points: &[Point], x_min: Option<f64>, x_max: Option<f64>) -> Vec<Point> {
    if x_min.is_none() && x_max.is_none() {
        return points.to_vec();
    }
    points
        .iter()
        .filter(|p| x_min.map_or(true, |lo| lo <= p.x) && x_max.map_or(true, |hi| p.x <= hi))
        .copied()
        .collect()
}

/// Inclusive `(min, max)` of the x coordinates, `None` for no points.
pub fn x_extent(points: &[Point]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }
    let lo = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let hi = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    Some((lo, hi))
}
