use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

use crate::core::data::outline::Outline;
use crate::core::data::point::Point;
use crate::core::fractals::koch::errors::KochError;

/// Total points in a snowflake outline at the given depth: 3·4^d edges plus
/// the repeated closing point.
#[must_use]
pub fn snowflake_point_count(depth: u32) -> usize {
    3 * 4usize.pow(depth) + 1
}

/// Generates the Koch snowflake outline inscribed in a circle of `radius`
/// around `center`, subdivided `depth` times.
///
/// The walk starts at the top vertex and proceeds clockwise in screen
/// coordinates (y grows downward). The outline is explicitly closed: its last
/// point repeats the first. Point count follows [`snowflake_point_count`];
/// depth 0 is the bare triangle (4 points). Growth is exponential in `depth`,
/// and no bound is enforced here; callers clamp depth before asking.
pub fn generate_snowflake(center: Point, radius: f64, depth: u32) -> Result<Outline, KochError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(KochError::InvalidRadius { radius });
    }

    let vertices = triangle_vertices(center, radius);
    let mut points = Vec::with_capacity(snowflake_point_count(depth));

    for i in 0..3 {
        // each edge contributes its curve minus the shared endpoint, which
        // the next edge (or the closing point) supplies
        expand_edge(vertices[i], vertices[(i + 1) % 3], depth, &mut points);
    }
    points.push(vertices[0]);

    Ok(Outline::from_points(points).expect("snowflake walk is closed by construction"))
}

/// Vertices of the equilateral base triangle, inscribed in the circle of
/// `radius` around `center`. Vertex i sits at angle π/2 + i·2π/3.
fn triangle_vertices(center: Point, radius: f64) -> [Point; 3] {
    std::array::from_fn(|i| {
        let angle = FRAC_PI_2 + (i as f64) * (2.0 * PI / 3.0);
        Point {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    })
}

/// Appends the Koch curve from `a` to `b` at the given depth, excluding `b`
/// itself so that consecutive curves share no duplicate junction point.
fn expand_edge(a: Point, b: Point, depth: u32, out: &mut Vec<Point>) {
    if depth == 0 {
        out.push(a);
        return;
    }

    let third = (b - a) * (1.0 / 3.0);
    let p1 = a + third;
    let p2 = a + third * 2.0;

    // outward apex of the equilateral bump on the middle third
    let angle = a.angle_to(b) - FRAC_PI_3;
    let length = a.distance_to(b) / 3.0;
    let peak = Point {
        x: p1.x + angle.cos() * length,
        y: p1.y + angle.sin() * length,
    };

    expand_edge(a, p1, depth - 1, out);
    expand_edge(p1, peak, depth - 1, out);
    expand_edge(peak, p2, depth - 1, out);
    expand_edge(p2, b, depth - 1, out);
}
