use crate::model::{IndexedImage, PALETTE_SIZE};

/// A maximal single-row horizontal run of identical-color pixels.
/// `col_end` is exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunRect {
    pub row: u32,
    pub col_start: u32,
    pub col_end: u32,
}

/// Scan the pixel grid once and bucket maximal horizontal runs by palette
/// slot. Runs never cross a row boundary, so the result is a set of
/// one-row-tall rectangles that exactly partitions the grid.
///
/// The returned vector always has [`PALETTE_SIZE`] entries; slots with no
/// pixels get an empty list.
pub fn extract_runs(image: &IndexedImage) -> Vec<Vec<RunRect>> {
    let w = image.width as usize;
    let mut runs: Vec<Vec<RunRect>> = vec![Vec::new(); PALETTE_SIZE];

    let mut i = 0usize;
    while i < image.pixels.len() {
        let color = image.pixels[i];
        let row = i / w;
        let row_end = (row + 1) * w;

        let mut j = i + 1;
        while j < row_end && image.pixels[j] == color {
            j += 1;
        }

        runs[usize::from(color)].push(RunRect {
            row: row as u32,
            col_start: (i - row * w) as u32,
            col_end: (j - row * w) as u32,
        });
        i = j;
    }

    runs
}
