use crate::{
    coords::rect_corners,
    error::{PolycycleError, PolycycleResult},
    runs::RunRect,
};

/// Default hard cap on entries per output polygon expression.
pub const MAX_VERTICES: usize = 2000;

/// One entry in a batched vertex list: either a corner address in the
/// `(width+1)`-stride space, or the separator sentinel that tells the renderer
/// to lift the pen between unconnected sub-polygons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchEntry {
    Vertex(u32),
    Break,
}

/// An ordered vertex sequence holding one or more closed rectangles,
/// guaranteed to stay strictly below the vertex cap it was built with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolygonBatch {
    pub entries: Vec<BatchEntry>,
}

impl PolygonBatch {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pack one color's rectangles into as few batches as fit under
/// `max_vertices`. Each rectangle contributes its 4 corners, a repeat of the
/// first corner (closing the loop), and a [`BatchEntry::Break`].
///
/// A single rectangle whose footprint alone meets the cap is a fatal
/// configuration error: batching cannot proceed and no partial output is
/// produced.
pub fn batch_color(
    rects: &[RunRect],
    width: u32,
    flip_height: Option<u32>,
    max_vertices: usize,
) -> PolycycleResult<Vec<PolygonBatch>> {
    let mut batches = Vec::new();
    let mut current = PolygonBatch::default();

    for rect in rects {
        let corners = rect_corners(rect, width, flip_height);
        let footprint = corners.len() + 2; // closing repeat + separator

        if footprint >= max_vertices {
            return Err(PolycycleError::budget(format!(
                "single rectangle needs {} entries but the cap is {}",
                footprint, max_vertices
            )));
        }

        if current.len() + footprint >= max_vertices {
            batches.push(std::mem::take(&mut current));
        }

        current
            .entries
            .extend(corners.iter().map(|&v| BatchEntry::Vertex(v)));
        current.entries.push(BatchEntry::Vertex(corners[0]));
        current.entries.push(BatchEntry::Break);
    }

    if !current.is_empty() {
        batches.push(current);
    }

    Ok(batches)
}
