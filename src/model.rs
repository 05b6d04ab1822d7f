use crate::error::{PolycycleError, PolycycleResult};

/// Maximum number of palette slots an indexed image may address.
pub const PALETTE_SIZE: usize = 256;

/// One palette entry, serialized as a `[r, g, b]` triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A palette-cycling descriptor: slots `low..=high` rotate their displayed
/// colors at `rate` / 16384 cycles per reference time unit. `rate == 0`
/// disables the cycle.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct PaletteCycle {
    pub low: u8,
    pub high: u8,
    pub rate: u32,
    #[serde(default)]
    pub reverse: u8,
}

/// A decoded indexed-color image: palette, cycling descriptors, and a
/// row-major pixel array of palette indices.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct IndexedImage {
    pub width: u32,
    pub height: u32,
    pub colors: Vec<Rgb>,
    #[serde(default)]
    pub cycles: Vec<PaletteCycle>,
    pub pixels: Vec<u8>,
}

impl IndexedImage {
    /// Parse an image description from JSON. Does not validate; callers run
    /// [`IndexedImage::validate`] (or [`crate::convert`], which does) next.
    pub fn from_json_reader(reader: impl std::io::Read) -> PolycycleResult<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| PolycycleError::serde(format!("parse image JSON: {e}")))
    }

    pub fn validate(&self) -> PolycycleResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PolycycleError::validation("width/height must be > 0"));
        }
        if self.colors.is_empty() || self.colors.len() > PALETTE_SIZE {
            return Err(PolycycleError::validation(format!(
                "palette must have 1..={} colors, got {}",
                PALETTE_SIZE,
                self.colors.len()
            )));
        }

        let expected = self.width as usize * self.height as usize;
        if self.pixels.len() != expected {
            return Err(PolycycleError::validation(format!(
                "pixel array length {} does not match {}x{} image",
                self.pixels.len(),
                self.width,
                self.height
            )));
        }

        if let Some(&p) = self
            .pixels
            .iter()
            .find(|&&p| usize::from(p) >= self.colors.len())
        {
            return Err(PolycycleError::validation(format!(
                "pixel references palette slot {} but palette has {} colors",
                p,
                self.colors.len()
            )));
        }

        for cycle in &self.cycles {
            if cycle.low > cycle.high {
                return Err(PolycycleError::validation(format!(
                    "cycle has low {} > high {}",
                    cycle.low, cycle.high
                )));
            }
        }

        Ok(())
    }
}
