//! ASCII rendering of the diamond Kundli chart.
//!
//! This is intentionally "dumb" (fixed-size character grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Chart elements:
//! - grid outlines: `.` line segments
//! - house number above each anchor, ascendant sign abbreviation below it
//! - planet abbreviations at their house anchor; co-resident planets
//!   overplot at the same cells (no collision avoidance, matching the
//!   layout contract)

use crate::domain::ChartInputs;
use crate::plot::layout::{HOUSE_ANCHORS, OUTLINES, anchor, outline_points};

/// Render the chart into a `width` x `height` character grid.
pub fn render_kundli_chart(inputs: &ChartInputs, width: usize, height: usize) -> String {
    let width = width.max(40);
    let height = height.max(20);

    let mut grid = vec![vec![' '; width]; height];

    // Outlines first, so labels drawn afterwards sit on top.
    for outline in &OUTLINES {
        let points = outline_points(outline);
        for pair in points.windows(2) {
            draw_segment(&mut grid, to_cell(pair[0], width, height), to_cell(pair[1], width, height));
        }
    }

    // House number above each anchor, ascendant sign below.
    for &(house, xy) in &HOUSE_ANCHORS {
        let (col, row) = to_cell(xy, width, height);

        if let Some(label) = inputs.house_labels.get(&house) {
            put_text(&mut grid, col, row.saturating_sub(1), label);
        }
        if let Some(sign) = inputs.ascendants.sign_for(house) {
            put_text(&mut grid, col, row + 1, sign.abbrev());
        }
    }

    // Planets last; all bodies sharing a house write to the same cells.
    for (&body, &house) in &inputs.planets_in_houses {
        let (col, row) = to_cell(anchor(house), width, height);
        put_text(&mut grid, col, row + 2, body.abbrev());
    }

    let mut out = String::new();
    out.push_str("Vedic Kundli Chart with Ascendants\n");
    for row in grid {
        let line: String = row.into_iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Map chart coordinates ([-1, 1], +y up) to a grid cell (col, row-down).
fn to_cell(xy: (f64, f64), width: usize, height: usize) -> (usize, usize) {
    let col = ((xy.0 + 1.0) / 2.0 * (width - 1) as f64).round() as usize;
    let row = ((1.0 - xy.1) / 2.0 * (height - 1) as f64).round() as usize;
    (col.min(width - 1), row.min(height - 1))
}

/// Draw a straight segment by sampling along its longer axis.
fn draw_segment(grid: &mut [Vec<char>], from: (usize, usize), to: (usize, usize)) {
    let (x0, y0) = (from.0 as f64, from.1 as f64);
    let (x1, y1) = (to.0 as f64, to.1 as f64);

    let steps = (x1 - x0).abs().max((y1 - y0).abs()).round() as usize;
    let steps = steps.max(1);

    for i in 0..=steps {
        let u = i as f64 / steps as f64;
        let col = (x0 + u * (x1 - x0)).round() as usize;
        let row = (y0 + u * (y1 - y0)).round() as usize;
        if row < grid.len() && col < grid[row].len() {
            grid[row][col] = '.';
        }
    }
}

/// Write `text` centered on `col`, clipped to the grid.
fn put_text(grid: &mut [Vec<char>], col: usize, row: usize, text: &str) {
    if row >= grid.len() {
        return;
    }
    let width = grid[row].len();
    let start = col.saturating_sub(text.chars().count() / 2);
    for (i, ch) in text.chars().enumerate() {
        let at = start + i;
        if at < width {
            grid[row][at] = ch;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ALL_BODIES, AscendantTable, Body, ZodiacSign};
    use std::collections::BTreeMap;

    fn sample_inputs() -> ChartInputs {
        let house_labels: BTreeMap<u8, String> =
            (1..=12u8).map(|h| (h, h.to_string())).collect();

        let planets_in_houses: BTreeMap<Body, u8> = ALL_BODIES
            .iter()
            .enumerate()
            .map(|(i, &body)| (body, (i as u8 % 12) + 1))
            .collect();

        let mut ascendants = AscendantTable::new();
        for house in 1..=12u8 {
            ascendants.insert(house, ZodiacSign::from_index(house as usize - 1));
        }

        ChartInputs {
            house_labels,
            planets_in_houses,
            ascendants,
        }
    }

    #[test]
    fn chart_is_deterministic() {
        let inputs = sample_inputs();
        let a = render_kundli_chart(&inputs, 64, 32);
        let b = render_kundli_chart(&inputs, 64, 32);
        assert_eq!(a, b);
    }

    #[test]
    fn chart_contains_title_and_outlines() {
        let text = render_kundli_chart(&sample_inputs(), 64, 32);
        assert!(text.starts_with("Vedic Kundli Chart with Ascendants\n"));
        assert!(text.contains('.'), "no outline cells drawn");
    }

    #[test]
    fn chart_places_every_ascendant_abbrev() {
        let text = render_kundli_chart(&sample_inputs(), 80, 40);
        for house in 1..=12u8 {
            let abbrev = ZodiacSign::from_index(house as usize - 1).abbrev();
            assert!(text.contains(abbrev), "missing ascendant {abbrev}");
        }
    }

    #[test]
    fn chart_places_planets_at_distinct_houses() {
        // With one planet per house there is no overplotting, so every
        // abbreviation must survive into the output.
        let text = render_kundli_chart(&sample_inputs(), 80, 40);
        for body in ALL_BODIES {
            assert!(text.contains(body.abbrev()), "missing {}", body.abbrev());
        }
    }

    #[test]
    fn shared_house_overplots_without_panic() {
        let mut inputs = sample_inputs();
        inputs.planets_in_houses = ALL_BODIES.iter().map(|&b| (b, 5u8)).collect();
        let text = render_kundli_chart(&inputs, 64, 32);
        // Last writer in body order wins the shared cells.
        assert!(text.contains(Body::Ketu.abbrev()));
    }

    #[test]
    fn small_dimensions_are_clamped() {
        let text = render_kundli_chart(&sample_inputs(), 1, 1);
        assert!(text.lines().count() >= 20);
    }
}
