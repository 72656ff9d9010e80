//! Line traversal
//!
//! Implements Bresenham's line algorithm for walking the grid cells
//! between two points.

use crate::Position;

/// Generate all grid points on a line from p0 to p1 using Bresenham's
/// algorithm.
///
/// Both endpoints are always included and the result is an 8-connected
/// path with `max(|dx|, |dy|) + 1` points and no duplicates.
pub fn line_points(p0: Position, p1: Position) -> Vec<Position> {
    let dx = (p1.x - p0.x).abs();
    let dy = (p1.y - p0.y).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let sy = if p0.y < p1.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = p0.x;
    let mut y = p0.y;
    let mut points = Vec::with_capacity((dx.max(dy) + 1) as usize);

    loop {
        points.push(Position::new(x, y));

        if x == p1.x && y == p1.y {
            break;
        }

        let e2 = 2 * err;
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
