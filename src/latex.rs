//! The single serialization step from structured conversion results to the
//! latex strings the graphing renderer evaluates. All animation math lives in
//! [`crate::cycle`]; this module only formats.

use crate::{
    batch::BatchEntry,
    cycle::{PLAYBACK_FPS, SlotFormula, TIME_BASE},
    model::Rgb,
};

/// Undefined-point literal: indexing an empty list yields an undefined value,
/// which the renderer treats as "lift the pen". Must be preserved
/// byte-for-byte.
pub const SEPARATOR_SENTINEL: &str = "[][1]";

fn opname(name: &str, inner: &str) -> String {
    format!("\\operatorname{{{name}}}\\left({inner}\\right)")
}

fn point(x: &str, y: &str) -> String {
    format!("\\left({x},{y}\\right)")
}

fn frac(num: &str, den: &str) -> String {
    format!("\\frac{{{num}}}{{{den}}}")
}

/// `polygon([ (mod(i, stride), floor(i / stride)) for i = [entries] ])`.
/// `stride` must be the image width plus one, matching the corner addressing.
pub fn polygon_latex(entries: &[BatchEntry], stride: u32) -> String {
    let coord = point(
        &opname("mod", &format!("i,{stride}")),
        &opname("floor", &frac("i", &stride.to_string())),
    );
    let list = entries
        .iter()
        .map(|e| match e {
            BatchEntry::Vertex(v) => v.to_string(),
            BatchEntry::Break => SEPARATOR_SENTINEL.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",");
    opname(
        "polygon",
        &format!("\\left[{coord} \\operatorname{{for}} i=\\left[{list}\\right]\\right]"),
    )
}

/// The time driver the sliders reference.
pub fn time_driver_latex() -> String {
    "t_{0}=0".to_string()
}

/// `d_{slot} = ...`: the displayed palette index as a function of `t_0`.
pub fn slot_latex(formula: &SlotFormula) -> String {
    match *formula {
        SlotFormula::Static { slot } => format!("d_{{{slot}}}={slot}"),
        SlotFormula::Cycling {
            slot,
            low,
            period,
            rate,
            direction,
        } => {
            // The sign lives inside the floor, matching displayed_index:
            // -floor(x) and floor(-x) differ by one at non-integer x.
            let sign = if direction < 0 { "-" } else { "" };
            let phase = opname(
                "floor",
                &frac(
                    &format!("{sign}{PLAYBACK_FPS}\\cdot{rate}t_{{0}}"),
                    &TIME_BASE.to_string(),
                ),
            );
            let offset = slot - low;
            format!(
                "d_{{{slot}}}={low}+{}",
                opname("mod", &format!("{phase}+{offset},{period}"))
            )
        }
    }
}

/// One palette component list, e.g. `R_{c}=[12,0,...]`.
pub fn component_list_latex(name: &str, colors: &[Rgb], component: fn(&Rgb) -> u8) -> String {
    let values = colors
        .iter()
        .map(|c| component(c).to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("{name}=\\left[{values}\\right]")
}

/// The aggregate index-to-color formula. Renderer lists are 1-indexed, so
/// callers pass `slot + 1`.
pub fn color_formula_latex() -> String {
    format!(
        "C\\left(n\\right)={}",
        opname(
            "rgb",
            "R_{c}\\left[n\\right],G_{c}\\left[n\\right],B_{c}\\left[n\\right]"
        )
    )
}

/// The fill-color reference for a polygon of palette slot `slot`, routed
/// through the slot's displayed-index formula so the fill animates.
pub fn polygon_color_latex(slot: u8) -> String {
    format!("C\\left(d_{{{slot}}}+1\\right)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_latex_embeds_stride_and_sentinel() {
        let entries = [
            BatchEntry::Vertex(0),
            BatchEntry::Vertex(5),
            BatchEntry::Vertex(6),
            BatchEntry::Vertex(1),
            BatchEntry::Vertex(0),
            BatchEntry::Break,
        ];
        let s = polygon_latex(&entries, 5);
        assert!(s.starts_with("\\operatorname{polygon}"));
        assert!(s.contains("\\operatorname{mod}\\left(i,5\\right)"));
        assert!(s.contains("\\frac{i}{5}"));
        assert!(s.contains("i=\\left[0,5,6,1,0,[][1]\\right]"));
    }

    #[test]
    fn static_slot_formula_is_identity() {
        assert_eq!(slot_latex(&SlotFormula::Static { slot: 7 }), "d_{7}=7");
    }

    #[test]
    fn cycling_slot_formula_spells_out_the_modular_phase() {
        let f = SlotFormula::Cycling {
            slot: 11,
            low: 10,
            period: 3,
            rate: 1536,
            direction: 1,
        };
        assert_eq!(
            slot_latex(&f),
            "d_{11}=10+\\operatorname{mod}\\left(\\operatorname{floor}\\left(\\frac{60\\cdot1536t_{0}}{16384}\\right)+1,3\\right)"
        );
    }

    #[test]
    fn reversed_slot_formula_negates_inside_the_floor() {
        let f = SlotFormula::Cycling {
            slot: 10,
            low: 10,
            period: 3,
            rate: 8,
            direction: -1,
        };
        let s = slot_latex(&f);
        assert_eq!(
            s,
            "d_{10}=10+\\operatorname{mod}\\left(\\operatorname{floor}\\left(\\frac{-60\\cdot8t_{0}}{16384}\\right)+0,3\\right)"
        );
        assert!(!s.contains("-\\operatorname{floor}"));
    }

    #[test]
    fn reversed_formula_arithmetic_matches_the_numeric_encoder() {
        let f = SlotFormula::Cycling {
            slot: 10,
            low: 10,
            period: 3,
            rate: 1536,
            direction: -1,
        };
        let step = f64::from(TIME_BASE) / (60.0 * 1536.0);
        for k in 0..24 {
            let t = (f64::from(k) + 0.5) * step;
            // Evaluate the emitted formula's arithmetic: the negation sits in
            // the fraction's numerator, inside the floor.
            let phase = (-60.0 * 1536.0 * t / f64::from(TIME_BASE)).floor() as i64;
            let expected = 10 + phase.rem_euclid(3) as u8;
            assert_eq!(f.displayed_index(t), expected, "t = {t}");
        }
    }

    #[test]
    fn component_list_formats_each_channel() {
        let colors = [Rgb(1, 2, 3), Rgb(4, 5, 6)];
        assert_eq!(
            component_list_latex("R_{c}", &colors, |c| c.0),
            "R_{c}=\\left[1,4\\right]"
        );
        assert_eq!(
            component_list_latex("B_{c}", &colors, |c| c.2),
            "B_{c}=\\left[3,6\\right]"
        );
    }

    #[test]
    fn polygon_color_routes_through_displayed_index() {
        assert_eq!(polygon_color_latex(3), "C\\left(d_{3}+1\\right)");
    }
}
