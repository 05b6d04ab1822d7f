use crate::{
    batch::{MAX_VERTICES, PolygonBatch, batch_color},
    cycle::encode_slots,
    document::{GraphState, build_graph_state},
    error::PolycycleResult,
    model::IndexedImage,
    runs::extract_runs,
};

/// Explicit configuration for one conversion run. There is no ambient state;
/// everything the pipeline varies on passes through here.
#[derive(Clone, Copy, Debug)]
pub struct ConvertOptions {
    /// Hard cap on entries per polygon expression.
    pub max_vertices: usize,
    /// Whether a cycle's `reverse` flag flips rotation direction.
    pub honor_reverse: bool,
    /// Whether to flip rows for a bottom-left-origin renderer.
    pub flip_vertical: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_vertices: MAX_VERTICES,
            honor_reverse: true,
            flip_vertical: true,
        }
    }
}

/// Diagnostics about a conversion, matching what the polygon pass produces.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ConversionStats {
    pub width: u32,
    pub height: u32,
    pub polygon_count: usize,
    pub vertex_count: usize,
    pub batch_count: usize,
    pub unused_slots: Vec<u8>,
}

/// Convert a decoded image into the renderer's graph-state document.
///
/// Pure and deterministic: validates the input, extracts per-color runs,
/// packs them into vertex batches, derives the per-slot animation formulas,
/// and assembles the document. Fails atomically; a vertex-budget violation
/// yields no partial output.
#[tracing::instrument(skip(image), fields(width = image.width, height = image.height))]
pub fn convert(image: &IndexedImage, options: &ConvertOptions) -> PolycycleResult<GraphState> {
    image.validate()?;

    let runs = extract_runs(image);
    let batches = batch_runs(&runs, image, options)?;
    let slots = encode_slots(&image.cycles, image.colors.len(), options.honor_reverse);

    tracing::debug!(
        batches = batches.iter().map(Vec::len).sum::<usize>(),
        cycling = slots
            .iter()
            .filter(|s| matches!(s, crate::cycle::SlotFormula::Cycling { .. }))
            .count(),
        "assembled conversion outputs"
    );

    Ok(build_graph_state(image, &batches, &slots))
}

/// Report conversion diagnostics without building the document.
pub fn stats(image: &IndexedImage, options: &ConvertOptions) -> PolycycleResult<ConversionStats> {
    image.validate()?;

    let runs = extract_runs(image);
    let batches = batch_runs(&runs, image, options)?;

    let unused_slots = (0..image.colors.len())
        .filter(|&slot| runs[slot].is_empty())
        .map(|slot| slot as u8)
        .collect();

    Ok(ConversionStats {
        width: image.width,
        height: image.height,
        polygon_count: runs.iter().map(Vec::len).sum(),
        vertex_count: batches
            .iter()
            .flatten()
            .map(PolygonBatch::len)
            .sum(),
        batch_count: batches.iter().map(Vec::len).sum(),
        unused_slots,
    })
}

fn batch_runs(
    runs: &[Vec<crate::runs::RunRect>],
    image: &IndexedImage,
    options: &ConvertOptions,
) -> PolycycleResult<Vec<Vec<PolygonBatch>>> {
    let flip = options.flip_vertical.then_some(image.height);
    runs.iter()
        .map(|rects| batch_color(rects, image.width, flip, options.max_vertices))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PolycycleError;
    use crate::model::{PaletteCycle, Rgb};

    fn checker() -> IndexedImage {
        IndexedImage {
            width: 2,
            height: 2,
            colors: vec![Rgb(0, 0, 0), Rgb(200, 100, 50), Rgb(1, 2, 3)],
            cycles: vec![PaletteCycle {
                low: 1,
                high: 2,
                rate: 768,
                reverse: 0,
            }],
            pixels: vec![0, 1, 1, 0],
        }
    }

    #[test]
    fn convert_rejects_invalid_input() {
        let mut img = checker();
        img.pixels.pop();
        assert!(matches!(
            convert(&img, &ConvertOptions::default()),
            Err(PolycycleError::Validation(_))
        ));
    }

    #[test]
    fn budget_violation_aborts_whole_conversion() {
        let img = checker();
        let options = ConvertOptions {
            max_vertices: 6,
            ..ConvertOptions::default()
        };
        assert!(matches!(
            convert(&img, &options),
            Err(PolycycleError::Budget(_))
        ));
    }

    #[test]
    fn stats_count_runs_batches_and_unused_slots() {
        let img = checker();
        let s = stats(&img, &ConvertOptions::default()).unwrap();
        // Rows 0,1 each split into two single-pixel runs: 4 polygons total,
        // two used colors, one batch each.
        assert_eq!(s.polygon_count, 4);
        assert_eq!(s.batch_count, 2);
        assert_eq!(s.vertex_count, 4 * 6);
        assert_eq!(s.unused_slots, vec![2]);
    }

    #[test]
    fn convert_emits_a_batch_per_used_color() {
        let img = checker();
        let state = convert(&img, &ConvertOptions::default()).unwrap();
        let polys = state
            .expressions
            .list
            .iter()
            .filter(|item| match item {
                crate::document::ExprItem::Expression(e) => {
                    e.folder_id.as_deref() == Some("polygons")
                }
                _ => false,
            })
            .count();
        assert_eq!(polys, 2);
    }
}
