//! SVG output via Plotters.
//!
//! The renderer is a straight walk over a [`SlideRule`]: background, frames,
//! guide lines, scales (baseline, ticks, labels), legend markers, free text.
//! All layout decisions were made by `rule`; nothing here computes positions
//! beyond the label offset along the tick direction.
//!
//! Plotters backends address an integer pixel grid and take integer stroke
//! widths, so coordinates are rounded and strokes are at least 1 px.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::domain::{Anchor, LineItem, Rgb, Scale, SlideRule};
use crate::error::AppError;

const FONT_FAMILY: &str = "Arial";
const BASELINE_STROKE: u32 = 2;

type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Draw `rule` and save it as an SVG file.
pub fn render_to_file(rule: &SlideRule, path: &Path) -> Result<(), AppError> {
    let size = (rule.canvas.width, rule.canvas.height);
    let root = SVGBackend::new(path, size).into_drawing_area();
    draw_rule(&root, rule).map_err(|e| AppError::render(format!("Failed to draw slide rule: {e}")))?;
    root.present()
        .map_err(|e| AppError::render(format!("Failed to write SVG '{}': {e}", path.display())))?;
    Ok(())
}

/// Draw `rule` into an in-memory SVG document.
pub fn render_to_string(rule: &SlideRule) -> Result<String, AppError> {
    let size = (rule.canvas.width, rule.canvas.height);
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, size).into_drawing_area();
        draw_rule(&root, rule).map_err(|e| AppError::render(format!("Failed to draw slide rule: {e}")))?;
        root.present()
            .map_err(|e| AppError::render(format!("Failed to finish SVG document: {e}")))?;
    }
    Ok(buffer)
}

fn draw_rule<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, rule: &SlideRule) -> DrawResult<DB> {
    root.fill(&color(rule.background))?;

    for frame in &rule.frames {
        root.draw(&Rectangle::new(
            [px(frame.x, frame.y), px(frame.x + frame.width, frame.y + frame.height)],
            color(frame.color).stroke_width(stroke(frame.stroke_width)),
        ))?;
    }

    for line in &rule.lines {
        draw_line(root, line)?;
    }

    for scale in &rule.scales {
        draw_scale(root, scale)?;
    }

    for circle in &rule.circles {
        root.draw(&Circle::new(
            px(circle.center.0, circle.center.1),
            circle.radius.round() as i32,
            color(circle.color).filled(),
        ))?;
    }

    for text in &rule.texts {
        let style = text_style(text.font_size, text.color, text.anchor, text.bold, false);
        root.draw(&Text::new(text.text.as_str(), px(text.x, text.y), style))?;
    }

    Ok(())
}

fn draw_scale<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, scale: &Scale) -> DrawResult<DB> {
    let y = scale.baseline_y;
    let tick_color = color(scale.color);

    root.draw(&PathElement::new(
        vec![px(scale.x_start, y), px(scale.x_end, y)],
        tick_color.stroke_width(BASELINE_STROKE),
    ))?;

    let sign = scale.direction.sign();
    for tick in &scale.ticks {
        root.draw(&PathElement::new(
            vec![px(tick.x, y), px(tick.x, y + sign * tick.size)],
            tick_color.stroke_width(stroke(tick.stroke_width)),
        ))?;

        if let Some(label) = &tick.label {
            let style = text_style(label.font_size, scale.label_color, Anchor::Middle, false, label.rotated);
            root.draw(&Text::new(
                label.text.as_str(),
                px(tick.x, y + sign * label.offset),
                style,
            ))?;
        }
    }

    Ok(())
}

fn draw_line<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, line: &LineItem) -> DrawResult<DB> {
    let style = color(line.color).stroke_width(stroke(line.stroke_width));
    let segments = match line.dash {
        Some((on, off)) => dash_segments(line.from, line.to, on, off),
        None => vec![(line.from, line.to)],
    };
    for (a, b) in segments {
        root.draw(&PathElement::new(vec![px(a.0, a.1), px(b.0, b.1)], style))?;
    }
    Ok(())
}

type Point = (f64, f64);

/// Split a segment into `on`-long dashes separated by `off`-long gaps.
fn dash_segments(from: Point, to: Point, on: f64, off: f64) -> Vec<(Point, Point)> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = dx.hypot(dy);
    if !(length > 0.0 && on > 0.0 && off >= 0.0) {
        return vec![(from, to)];
    }
    let (ux, uy) = (dx / length, dy / length);
    let at = |d: f64| (from.0 + ux * d, from.1 + uy * d);

    let mut out = Vec::new();
    let mut start = 0.0;
    while start < length {
        let end = (start + on).min(length);
        out.push((at(start), at(end)));
        start = end + off;
    }
    out
}

fn color(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

fn px(x: f64, y: f64) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn stroke(width: f64) -> u32 {
    width.round().max(1.0) as u32
}

fn text_style(size: f64, fill: Rgb, anchor: Anchor, bold: bool, rotated: bool) -> TextStyle<'static> {
    let weight = if bold { FontStyle::Bold } else { FontStyle::Normal };
    let mut font = FontDesc::new(FontFamily::Name(FONT_FAMILY), size, weight);
    if rotated {
        font = font.transform(FontTransform::Rotate90);
    }
    let h_pos = match anchor {
        Anchor::Start => HPos::Left,
        Anchor::Middle => HPos::Center,
        Anchor::End => HPos::Right,
    };
    TextStyle {
        font,
        color: color(fill).to_backend_color(),
        pos: Pos::new(h_pos, VPos::Bottom),
    }
}
