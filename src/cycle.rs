use crate::model::PaletteCycle;

/// Time-base divisor: a cycle with `rate == TIME_BASE` completes one rotation
/// per reference time unit at the playback frame rate.
pub const TIME_BASE: u32 = 16384;

/// Animation frames per reference time unit, the convention the rate values
/// were authored against.
pub const PLAYBACK_FPS: u32 = 60;

/// The displayed-index function for one palette slot, kept as data; latex
/// rendering is a separate step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum SlotFormula {
    /// No cycle covers the slot: it always displays its own color.
    Static { slot: u8 },
    /// The slot rotates through `low..low+period` with phase
    /// `floor(direction * 60 * rate * t / 16384)`.
    Cycling {
        slot: u8,
        low: u8,
        period: u16,
        rate: u32,
        direction: i8,
    },
}

impl SlotFormula {
    pub fn slot(&self) -> u8 {
        match self {
            Self::Static { slot } | Self::Cycling { slot, .. } => *slot,
        }
    }

    /// Evaluate the formula at reference time `t`. The result is always in
    /// `[low, low+period)` for cycling slots and exactly `slot` otherwise,
    /// for any `t`, including negative phases.
    pub fn displayed_index(&self, t: f64) -> u8 {
        match *self {
            Self::Static { slot } => slot,
            Self::Cycling {
                slot,
                low,
                period,
                rate,
                direction,
            } => {
                let speed = f64::from(direction) * f64::from(PLAYBACK_FPS) * f64::from(rate);
                let phase = (speed * t / f64::from(TIME_BASE)).floor() as i64;
                let offset = i64::from(slot) - i64::from(low);
                let shifted = (phase + offset).rem_euclid(i64::from(period));
                low + shifted as u8
            }
        }
    }
}

/// Derive one formula per palette slot. A slot belongs to the first cycle in
/// descriptor order with `low <= slot <= high` and a nonzero rate; overlap
/// resolution is first-match, with no priority inference. `honor_reverse`
/// selects whether the `reverse` flag flips direction or is ignored (both
/// behaviors exist in the wild).
pub fn encode_slots(
    cycles: &[PaletteCycle],
    palette_len: usize,
    honor_reverse: bool,
) -> Vec<SlotFormula> {
    (0..palette_len)
        .map(|i| {
            let slot = i as u8;
            let found = cycles
                .iter()
                .find(|c| c.rate > 0 && c.low <= slot && slot <= c.high);
            match found {
                Some(c) => SlotFormula::Cycling {
                    slot,
                    low: c.low,
                    period: u16::from(c.high - c.low) + 1,
                    rate: c.rate,
                    direction: if honor_reverse && c.reverse != 0 { -1 } else { 1 },
                },
                None => SlotFormula::Static { slot },
            }
        })
        .collect()
}
