//! Plotters-powered Kundli chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Canvas` widget?
//! - line drawing quality is better for the diagonal grid outlines
//! - text placement uses the same coordinate space as the lines
//! - easy to extend later (exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::ChartInputs;
use crate::plot::layout::{HOUSE_ANCHORS, OUTLINES, anchor, outline_points};

/// A lightweight, render-only chart description.
///
/// The widget is intentionally data-driven: everything it draws comes from
/// the `ChartInputs` computed by the report assembler. This keeps `render()`
/// focused on drawing and the data prep testable on its own.
pub struct KundliPlottersChart<'a> {
    pub inputs: &'a ChartInputs,
}

impl Widget for KundliPlottersChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. In that case, we render a small hint rather than panicking.
        if area.width < 24 || area.height < 12 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let inputs = self.inputs;

        // `plotters-ratatui-backend` draws Plotters primitives via Ratatui's
        // `Canvas` widget, which ultimately writes to the terminal buffer.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .build_cartesian_2d(-1.0..1.0, -1.0..1.0)?;

            // No mesh or axes: the Kundli grid is the whole picture.
            chart.configure_mesh().disable_mesh().draw()?;

            let grid_color = WHITE;
            let house_color = RGBColor(0, 255, 255); // cyan
            let asc_color = RGBColor(0, 128, 255); // blue
            let planet_color = RGBColor(255, 0, 0); // red

            // 1) The four closed outlines.
            for outline in &OUTLINES {
                let points = outline_points(outline);
                chart.draw_series(LineSeries::new(points.iter().copied(), &grid_color))?;
            }

            // 2) House numbers above, ascendant signs below each anchor.
            let label_font = ("sans-serif", 12).into_font();
            for &(house, (x, y)) in &HOUSE_ANCHORS {
                if let Some(label) = inputs.house_labels.get(&house) {
                    chart.draw_series(std::iter::once(Text::new(
                        label.clone(),
                        (x, y + 0.08),
                        label_font.clone().color(&house_color),
                    )))?;
                }
                if let Some(sign) = inputs.ascendants.sign_for(house) {
                    chart.draw_series(std::iter::once(Text::new(
                        sign.abbrev().to_string(),
                        (x, y - 0.08),
                        label_font.clone().color(&asc_color),
                    )))?;
                }
            }

            // 3) Planets at their house anchors. Co-resident planets are
            // overplotted at the same point, matching the layout contract.
            for (&body, &house) in &inputs.planets_in_houses {
                let (x, y) = anchor(house);
                chart.draw_series(std::iter::once(Text::new(
                    body.abbrev().to_string(),
                    (x, y - 0.15),
                    label_font.clone().color(&planet_color),
                )))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}
