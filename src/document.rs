//! The graph-state document consumed by the external renderer, plus the
//! builder that assembles one from conversion results.

use crate::{
    batch::PolygonBatch,
    cycle::{SlotFormula, TIME_BASE},
    latex,
    model::IndexedImage,
};

pub const GRAPH_STATE_VERSION: u32 = 9;

/// Viewport padding around the image, in grid units.
const VIEWPORT_MARGIN: f64 = 10.0;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct GraphState {
    pub version: u32,
    pub graph: GraphSettings,
    pub expressions: Expressions,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct GraphSettings {
    pub viewport: Viewport,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Expressions {
    pub list: Vec<ExprItem>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExprItem {
    Folder(Folder),
    Expression(Expression),
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Folder {
    pub id: String,
    pub title: String,
    pub collapsed: bool,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expression {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    pub latex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_latex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slider: Option<Slider>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slider {
    pub hard_min: bool,
    pub hard_max: bool,
    pub min: String,
    pub max: String,
    pub loop_mode: String,
    pub is_playing: bool,
}

impl Expression {
    fn in_folder(folder_id: &str, latex: String) -> Self {
        Self {
            folder_id: Some(folder_id.to_string()),
            latex,
            ..Self::default()
        }
    }
}

/// Assemble the output document: an auto-advancing time driver, the palette
/// formulas, and one filled polygon expression per batch, grouped into
/// collapsible folders. `batches` is indexed by palette slot and `slots` must
/// cover every slot that has batches.
pub fn build_graph_state(
    image: &IndexedImage,
    batches: &[Vec<PolygonBatch>],
    slots: &[SlotFormula],
) -> GraphState {
    let stride = image.width + 1;
    let mut list = Vec::new();

    list.push(ExprItem::Folder(Folder {
        id: "animation".to_string(),
        title: "Animation".to_string(),
        collapsed: true,
    }));
    list.push(ExprItem::Expression(Expression {
        slider: Some(Slider {
            hard_min: true,
            hard_max: true,
            min: "0".to_string(),
            max: TIME_BASE.to_string(),
            loop_mode: "LOOP_FORWARD".to_string(),
            is_playing: true,
        }),
        ..Expression::in_folder("animation", latex::time_driver_latex())
    }));

    list.push(ExprItem::Folder(Folder {
        id: "palette".to_string(),
        title: "Palette".to_string(),
        collapsed: true,
    }));
    list.push(ExprItem::Expression(Expression::in_folder(
        "palette",
        latex::component_list_latex("R_{c}", &image.colors, |c| c.0),
    )));
    list.push(ExprItem::Expression(Expression::in_folder(
        "palette",
        latex::component_list_latex("G_{c}", &image.colors, |c| c.1),
    )));
    list.push(ExprItem::Expression(Expression::in_folder(
        "palette",
        latex::component_list_latex("B_{c}", &image.colors, |c| c.2),
    )));
    list.push(ExprItem::Expression(Expression::in_folder(
        "palette",
        latex::color_formula_latex(),
    )));
    for formula in slots {
        list.push(ExprItem::Expression(Expression::in_folder(
            "palette",
            latex::slot_latex(formula),
        )));
    }

    list.push(ExprItem::Folder(Folder {
        id: "polygons".to_string(),
        title: "Polygons".to_string(),
        collapsed: true,
    }));
    for (slot, color_batches) in batches.iter().enumerate() {
        for batch in color_batches {
            list.push(ExprItem::Expression(Expression {
                color_latex: Some(latex::polygon_color_latex(slot as u8)),
                lines: Some(false),
                fill_opacity: Some("1".to_string()),
                ..Expression::in_folder("polygons", latex::polygon_latex(&batch.entries, stride))
            }));
        }
    }

    GraphState {
        version: GRAPH_STATE_VERSION,
        graph: GraphSettings {
            viewport: Viewport {
                xmin: -VIEWPORT_MARGIN,
                ymin: -VIEWPORT_MARGIN,
                xmax: f64::from(image.width) + VIEWPORT_MARGIN,
                ymax: f64::from(image.height) + VIEWPORT_MARGIN,
            },
        },
        expressions: Expressions { list },
    }
}
