//! Animated bar strip, painted onto a half-block canvas

use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Painter, Shape},
    Frame,
};

use crate::model::VisualizerFrame;

const BACKGROUND: Color = Color::Rgb(10, 10, 10);

/// Surface size in canvas pixels for a terminal area. Half-block markers
/// give two pixels per cell vertically.
pub fn surface_size(area: Rect) -> (f64, f64) {
    (f64::from(area.width), f64::from(area.height) * 2.0)
}

pub fn render_visualizer(frame: &mut Frame, area: Rect, visualizer: &VisualizerFrame) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let (width, height) = surface_size(area);

    // Bounds of `size - 1` make canvas coordinates land exactly on pixel indices
    let canvas = Canvas::default()
        .marker(Marker::HalfBlock)
        .background_color(BACKGROUND)
        .x_bounds([0.0, (width - 1.0).max(1.0)])
        .y_bounds([0.0, (height - 1.0).max(1.0)])
        .paint(|ctx| ctx.draw(&Bars { visualizer }));

    frame.render_widget(canvas, area);
}

struct Bars<'a> {
    visualizer: &'a VisualizerFrame,
}

impl Shape for Bars<'_> {
    fn draw(&self, painter: &mut Painter) {
        let surface_width = self.visualizer.layout().surface_width;

        for bar in self.visualizer.bars() {
            let left = bar.x.ceil().max(0.0);
            let right = (bar.x + bar.width).min(surface_width);
            let mut columns: Vec<f64> = Vec::new();
            let mut px = left;
            while px < right {
                columns.push(px);
                px += 1.0;
            }
            if columns.is_empty() {
                let x = bar.x.round();
                if x < 0.0 || x >= surface_width {
                    continue;
                }
                columns.push(x);
            }

            let rows = bar.height.round() as usize;
            if rows == 0 {
                continue;
            }
            let rounded = columns.len() >= 3 && rows >= 2;

            for row in 0..rows {
                let color = gradient(bar.hue, row as f64 / rows as f64);
                let is_top = row + 1 == rows;
                for (i, &x) in columns.iter().enumerate() {
                    if rounded && is_top && (i == 0 || i + 1 == columns.len()) {
                        continue;
                    }
                    if let Some((gx, gy)) = painter.get_point(x, row as f64) {
                        painter.paint(gx, gy, color);
                    }
                }
            }
        }
    }
}

/// Base-to-tip colour: lighter and more saturated towards the tip
fn gradient(hue: f64, position: f64) -> Color {
    let position = position.clamp(0.0, 1.0);
    let saturation = 0.8 + 0.2 * position;
    let lightness = 0.5 + 0.2 * position;
    let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
    Color::Rgb(r, g, b)
}

pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_byte(r), to_byte(g), to_byte(b))
}
