#![forbid(unsafe_code)]

pub mod batch;
pub mod convert;
pub mod coords;
pub mod cycle;
pub mod document;
pub mod error;
pub mod latex;
pub mod model;
pub mod runs;
pub mod template;

pub use batch::{BatchEntry, MAX_VERTICES, PolygonBatch};
pub use convert::{ConversionStats, ConvertOptions, convert, stats};
pub use cycle::{PLAYBACK_FPS, SlotFormula, TIME_BASE, encode_slots};
pub use document::{ExprItem, Expression, Folder, GraphState};
pub use error::{PolycycleError, PolycycleResult};
pub use model::{IndexedImage, PALETTE_SIZE, PaletteCycle, Rgb};
pub use runs::{RunRect, extract_runs};
pub use template::TemplateKind;
