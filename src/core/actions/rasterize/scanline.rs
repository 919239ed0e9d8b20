use crate::core::data::outline::Outline;

/// X coordinates where the outline's edges cross the horizontal scanline at
/// `y`, sorted ascending. Even-odd rule: pairing consecutive crossings yields
/// the interior spans of the polygon on that line.
///
/// Each edge counts its lower endpoint and excludes its upper one, so a
/// vertex shared by two edges is crossed exactly once and horizontal edges
/// contribute nothing.
#[must_use]
pub fn scanline_crossings(outline: &Outline, y: f64) -> Vec<f64> {
    let mut crossings: Vec<f64> = outline
        .segments()
        .filter_map(|(a, b)| {
            let spans_line = (a.y <= y && y < b.y) || (b.y <= y && y < a.y);
            if !spans_line {
                return None;
            }
            Some(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y))
        })
        .collect();

    crossings.sort_by(|a, b| a.total_cmp(b));
    crossings
}

/// Converts a pair of crossings into the inclusive pixel run whose centers
/// fall strictly inside the span. Returns `None` for spans thinner than a
/// pixel center.
#[must_use]
pub fn span_to_pixel_run(x_enter: f64, x_exit: f64) -> Option<(i32, i32)> {
    let first = (x_enter - 0.5).ceil() as i32;
    let last = (x_exit - 0.5).floor() as i32;

    if first > last {
        return None;
    }

    Some((first, last))
}
