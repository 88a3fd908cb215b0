// src/gui/components/bar_chart.rs
//
// Single-series bar chart painted straight onto the Ui. Bars grow from the
// zero line, so negative changes hang below it. Missing values draw no bar
// and an "n/a" label.

use eframe::egui::{self, Align2, FontId, Pos2, Rect, RichText, Sense, Stroke, Vec2};

use crate::config::consts::{CHART_BAR_GAP, CHART_HEIGHT};
use crate::data::TownSeries;

const AXIS_W: f32 = 72.0;
const TOP_PAD: f32 = 18.0;
const BOTTOM_PAD: f32 = 22.0;
const TICKS: usize = 4;

/// Value range to plot, always containing zero and never zero-width.
pub fn value_range(values: &[Option<f64>]) -> (f64, f64) {
    let (lo, hi) = values
        .iter()
        .flatten()
        .fold((0.0_f64, 0.0_f64), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if hi - lo <= f64::EPSILON { (lo, lo + 1.0) } else { (lo, hi) }
}

/// "451,000" for large values, "12.5" for fractional ones, "-3" for whole.
pub fn fmt_value(v: f64) -> String {
    if v.abs() >= 1000.0 {
        let n = v.round() as i64;
        let digits = n.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        if n < 0 { join!("-", &out) } else { out }
    } else if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}

pub fn draw(ui: &mut egui::Ui, title: &str, series: &TownSeries) {
    ui.label(RichText::new(format!("{title}: {}", series.town)).strong());

    let width = ui.available_width().max(240.0);
    let (resp, painter) = ui.allocate_painter(Vec2::new(width, CHART_HEIGHT), Sense::hover());
    let rect = resp.rect;

    let plot = Rect::from_min_max(
        Pos2::new(rect.left() + AXIS_W, rect.top() + TOP_PAD),
        Pos2::new(rect.right() - 8.0, rect.bottom() - BOTTOM_PAD),
    );

    let visuals = ui.visuals();
    let text_color = visuals.text_color();
    let grid = Stroke::new(1.0, visuals.weak_text_color().linear_multiply(0.3));
    let bar_fill = visuals.selection.bg_fill;
    let font = FontId::proportional(11.0);

    let values = series.values();
    let (lo, hi) = value_range(&values);
    let y_of = |v: f64| plot.bottom() - ((v - lo) / (hi - lo)) as f32 * plot.height();

    // y grid + labels
    for i in 0..=TICKS {
        let v = lo + (hi - lo) * i as f64 / TICKS as f64;
        let y = y_of(v);
        painter.line_segment([Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)], grid);
        painter.text(
            Pos2::new(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            fmt_value(v),
            font.clone(),
            text_color,
        );
    }

    let zero_y = y_of(0.0);
    painter.line_segment(
        [Pos2::new(plot.left(), zero_y), Pos2::new(plot.right(), zero_y)],
        Stroke::new(1.0, text_color),
    );

    let n = series.bars.len().max(1);
    let slot = plot.width() / n as f32;
    let bar_w = slot * (1.0 - CHART_BAR_GAP);
    let hover = resp.hover_pos();
    let mut tip: Option<String> = None;

    for (i, bar) in series.bars.iter().enumerate() {
        let x0 = plot.left() + slot * i as f32 + (slot - bar_w) / 2.0;
        let cx = x0 + bar_w / 2.0;

        painter.text(
            Pos2::new(cx, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            &bar.label,
            font.clone(),
            text_color,
        );

        match bar.value {
            Some(v) => {
                let y = y_of(v);
                let r = Rect::from_min_max(
                    Pos2::new(x0, y.min(zero_y)),
                    Pos2::new(x0 + bar_w, y.max(zero_y)),
                );
                painter.rect_filled(r, 2.0, bar_fill);

                let (anchor, label_y) = if v >= 0.0 {
                    (Align2::CENTER_BOTTOM, r.top() - 2.0)
                } else {
                    (Align2::CENTER_TOP, r.bottom() + 2.0)
                };
                painter.text(Pos2::new(cx, label_y), anchor, fmt_value(v), font.clone(), text_color);

                if hover.is_some_and(|p| r.expand(2.0).contains(p)) {
                    tip = Some(format!("{}: {}", bar.label, bar.raw));
                }
            }
            None => {
                painter.text(
                    Pos2::new(cx, zero_y - 2.0),
                    Align2::CENTER_BOTTOM,
                    "n/a",
                    font.clone(),
                    visuals.weak_text_color(),
                );
            }
        }
    }

    if let Some(t) = tip {
        resp.on_hover_text_at_pointer(t);
    }
}
