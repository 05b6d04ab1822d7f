//! Linear-index addressing for grid corners.
//!
//! Rectangle corners live on grid *lines*, not pixels, so corner addresses use
//! a `width + 1` stride. With a plain `width` stride a rectangle ending at the
//! right edge would collide with column 0 of the next row.

use crate::runs::RunRect;

pub fn index_to_xy(i: u32, stride: u32) -> (u32, u32) {
    (i % stride, i / stride)
}

pub fn xy_to_index(x: u32, y: u32, stride: u32) -> u32 {
    y * stride + x
}

/// Remap row `y` to `height - y`, converting between top-left-origin and
/// bottom-left-origin conventions. Self-inverse when applied with the same
/// `height`. Requires `y <= height` (grid-line rows).
pub fn flip_vertical(i: u32, stride: u32, height: u32) -> u32 {
    let (x, y) = index_to_xy(i, stride);
    xy_to_index(x, height - y, stride)
}

/// Corner vertices of a unit-height run rectangle in the `(width+1)`-stride
/// grid-line space, ordered top-left, bottom-left, bottom-right, top-right.
/// `flip_height` additionally flips rows for a bottom-left-origin consumer.
pub fn rect_corners(rect: &RunRect, width: u32, flip_height: Option<u32>) -> [u32; 4] {
    let stride = width + 1;
    let (top, bottom) = match flip_height {
        Some(h) => (h - rect.row, h - rect.row - 1),
        None => (rect.row, rect.row + 1),
    };
    [
        xy_to_index(rect.col_start, top, stride),
        xy_to_index(rect.col_start, bottom, stride),
        xy_to_index(rect.col_end, bottom, stride),
        xy_to_index(rect.col_end, top, stride),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_xy_roundtrip() {
        let stride = 7;
        for i in 0..stride * 5 {
            let (x, y) = index_to_xy(i, stride);
            assert_eq!(xy_to_index(x, y, stride), i);
            assert!(x < stride);
        }
    }

    #[test]
    fn flip_vertical_is_self_inverse() {
        let stride = 5;
        let height = 4;
        for i in 0..stride * (height + 1) {
            assert_eq!(flip_vertical(flip_vertical(i, stride, height), stride, height), i);
        }
    }

    #[test]
    fn right_edge_corner_is_distinct_from_next_row() {
        // A 4-wide image: column 4 of row 0 must not alias column 0 of row 1.
        let width = 4;
        let rect = RunRect {
            row: 0,
            col_start: 0,
            col_end: width,
        };
        let [_, _, _, top_right] = rect_corners(&rect, width, None);
        let next_row_left = xy_to_index(0, 1, width + 1);
        assert_ne!(top_right, next_row_left);
    }

    #[test]
    fn corners_without_flip() {
        let rect = RunRect {
            row: 1,
            col_start: 2,
            col_end: 4,
        };
        // stride 5: TL=(2,1)=7, BL=(2,2)=12, BR=(4,2)=14, TR=(4,1)=9
        assert_eq!(rect_corners(&rect, 4, None), [7, 12, 14, 9]);
    }

    #[test]
    fn corners_with_flip() {
        let rect = RunRect {
            row: 0,
            col_start: 0,
            col_end: 1,
        };
        // height 3, stride 2: rows 0 and 1 flip to 3 and 2.
        assert_eq!(rect_corners(&rect, 1, Some(3)), [6, 4, 5, 7]);
    }
}
