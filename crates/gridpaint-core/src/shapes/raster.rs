//! Integer rasterization helpers shared by the shape variants.

use super::{Cell, MAX_COORDINATE};

/// Cells of a digital line between two endpoints (Bresenham), endpoints included.
///
/// The run is 8-connected and ordered from `start` to `end`. Endpoints past
/// [`MAX_COORDINATE`] give no cells.
pub(crate) fn line_cells(start: Cell, end: Cell) -> Vec<Cell> {
    if !in_range(start) || !in_range(end) {
        return Vec::new();
    }

    let (mut x, mut y) = (i64::from(start.x), i64::from(start.y));
    let (end_x, end_y) = (i64::from(end.x), i64::from(end.y));
    let dx = (end_x - x).abs();
    let dy = -(end_y - y).abs();
    let sx = if x < end_x { 1 } else { -1 };
    let sy = if y < end_y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut cells = Vec::with_capacity(dx.max(-dy) as usize + 1);
    loop {
        cells.push(Cell::new(x as i32, y as i32));
        if x == end_x && y == end_y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}

/// Whether a cell lies within the rasterizable coordinate range.
pub(crate) fn in_range(cell: Cell) -> bool {
    coordinate_in_range(cell.x) && coordinate_in_range(cell.y)
}

pub(crate) fn coordinate_in_range(value: i32) -> bool {
    (-MAX_COORDINATE..=MAX_COORDINATE).contains(&value)
}

/// Border cells of an axis-aligned ellipse (midpoint algorithm).
///
/// Decision variables are kept at 4x scale so everything stays integral.
/// A center or radius past [`MAX_COORDINATE`] gives no cells.
pub(crate) fn ellipse_cells(center: Cell, radius_x: i32, radius_y: i32) -> Vec<Cell> {
    if !in_range(center) || !coordinate_in_range(radius_x) || !coordinate_in_range(radius_y) {
        return Vec::new();
    }

    let rx = i64::from(radius_x.unsigned_abs());
    let ry = i64::from(radius_y.unsigned_abs());

    if rx == 0 || ry == 0 {
        let near = Cell::new(center.x - rx as i32, center.y - ry as i32);
        let far = Cell::new(center.x + rx as i32, center.y + ry as i32);
        return line_cells(near, far);
    }

    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let mut cells = Vec::new();
    let mut plot = |x: i64, y: i64| {
        let (x, y) = (x as i32, y as i32);
        cells.push(center.offset(x, y));
        cells.push(center.offset(-x, y));
        cells.push(center.offset(x, -y));
        cells.push(center.offset(-x, -y));
    };

    let mut x = 0i64;
    let mut y = ry;
    let mut dx = 0i64;
    let mut dy = 2 * rx2 * y;

    // Region 1: slope magnitude below 1.
    let mut p = 4 * ry2 - 4 * rx2 * ry + rx2;
    while dx < dy {
        plot(x, y);
        x += 1;
        dx += 2 * ry2;
        if p < 0 {
            p += 4 * (dx + ry2);
        } else {
            y -= 1;
            dy -= 2 * rx2;
            p += 4 * (dx - dy + ry2);
        }
    }

    // Region 2: step along y.
    let mut p = ry2 * (2 * x + 1) * (2 * x + 1) + 4 * rx2 * (y - 1) * (y - 1) - 4 * rx2 * ry2;
    let mut end_x = x;
    while y >= 0 {
        plot(x, y);
        if y == 0 {
            end_x = x;
        }
        y -= 1;
        dy -= 2 * rx2;
        if p > 0 {
            p += 4 * (rx2 - dy);
        } else {
            x += 1;
            dx += 2 * ry2;
            p += 4 * (dx - dy + rx2);
        }
    }

    // Very flat ellipses leave region 2 short of the horizontal extreme.
    for tail in end_x + 1..=rx {
        plot(tail, 0);
    }

    dedup(cells)
}

/// Sort and drop repeated cells.
pub(crate) fn dedup(mut cells: Vec<Cell>) -> Vec<Cell> {
    cells.sort_unstable();
    cells.dedup();
    cells
}
