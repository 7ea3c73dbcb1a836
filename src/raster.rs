//! Line rasterization
//!
//! Integer Bresenham walk between two grid points. Pure functions only; the
//! draw-line handler owns bounds checking and cell writes.

/// Compute the ordered grid coordinates of the line from `(x0, y0)` to
/// `(x1, y1)`, both endpoints included exactly once.
///
/// Works in all 8 octants, including horizontal, vertical, and
/// single-point lines. Swapping the endpoints yields the exact reverse
/// sequence: the walk always runs from the lexicographically smaller
/// endpoint, and the result is reversed when the caller asked for the
/// other direction. The raw error-accumulator walk breaks ties
/// differently depending on direction, so canonicalizing is what makes
/// the reversal law hold exactly.
pub fn line_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    if (x0, y0) <= (x1, y1) {
        walk(x0, y0, x1, y1)
    } else {
        let mut points = walk(x1, y1, x0, y0);
        points.reverse();
        points
    }
}

fn walk(mut x: i32, mut y: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut points = Vec::with_capacity((dx.max(dy) + 1) as usize);
    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = err * 2;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    points
}
