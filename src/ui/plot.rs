use std::f32::consts::{PI, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, RichText, Sense, Shape, Stroke, Ui, vec2};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::charts::{ChartRenderer, ChartSpec, Layout, RenderOptions, Series};
use crate::color::{hex_color, lighten, nth_color};
use crate::data::aggregate::Bin;

const PLOT_HEIGHT: f32 = 280.0;

// ---------------------------------------------------------------------------
// egui renderer: draws each chart stacked in the given Ui
// ---------------------------------------------------------------------------

pub struct EguiRenderer<'a> {
    ui: &'a mut Ui,
}

impl<'a> EguiRenderer<'a> {
    pub fn new(ui: &'a mut Ui) -> Self {
        Self { ui }
    }
}

impl ChartRenderer for EguiRenderer<'_> {
    fn render(&mut self, spec: &ChartSpec, options: &RenderOptions) {
        let ui = &mut *self.ui;
        ui.add_space(6.0);
        ui.label(RichText::new(&spec.layout.title).heading().strong());

        match &spec.series {
            Series::HorizontalBar { labels, values } => {
                horizontal_bars(ui, spec, labels, values, options)
            }
            Series::Histogram { bins } => histogram(ui, spec, bins, options),
            Series::Donut {
                labels,
                values,
                hole,
            } => donut(ui, &spec.layout, labels, values, *hole),
        }

        ui.separator();
    }
}

fn series_color(layout: &Layout) -> Color32 {
    layout
        .colors
        .first()
        .map(|hex| hex_color(hex))
        .unwrap_or(Color32::LIGHT_BLUE)
}

fn axis_title(title: &Option<String>) -> String {
    title.clone().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Bar chart
// ---------------------------------------------------------------------------

fn horizontal_bars(
    ui: &mut Ui,
    spec: &ChartSpec,
    labels: &[String],
    values: &[f64],
    options: &RenderOptions,
) {
    let color = series_color(&spec.layout);
    let bar_width = f64::from(1.0 - spec.layout.bar_gap);

    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let name = labels.get(i).cloned().unwrap_or_default();
            Bar::new(i as f64, v).name(name).width(bar_width)
        })
        .collect();

    let axis_labels = labels.to_vec();
    Plot::new(spec.target.id())
        .height(PLOT_HEIGHT)
        .allow_drag(options.interactive)
        .allow_zoom(options.interactive)
        .allow_scroll(options.interactive)
        .allow_boxed_zoom(options.interactive)
        .x_axis_label(axis_title(&spec.layout.x_title))
        .include_x(0.0)
        .y_axis_min_width(spec.layout.left_margin)
        .y_axis_formatter(move |mark, _range| category_label(&axis_labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().color(color));
        });
}

/// Name of the bar sitting on integer position `value`, if any.
fn category_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

fn histogram(ui: &mut Ui, spec: &ChartSpec, bins: &[Bin], options: &RenderOptions) {
    let color = series_color(&spec.layout);
    let gap = f64::from(spec.layout.bar_gap);

    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| {
            Bar::new(b.center(), b.count as f64)
                .width(b.width() * (1.0 - gap))
                .name(format!("{:.1} – {:.1}", b.start, b.end))
        })
        .collect();

    Plot::new(spec.target.id())
        .height(PLOT_HEIGHT)
        .allow_drag(options.interactive)
        .allow_zoom(options.interactive)
        .allow_scroll(options.interactive)
        .allow_boxed_zoom(options.interactive)
        .x_axis_label(axis_title(&spec.layout.x_title))
        .y_axis_label(axis_title(&spec.layout.y_title))
        .legend(Legend::default())
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(color).name("Age"));
        });
}

// ---------------------------------------------------------------------------
// Donut chart (painted directly, egui_plot has no pie)
// ---------------------------------------------------------------------------

/// Angular step used to approximate arcs with convex quads.
const ARC_STEP: f32 = PI / 90.0;

fn donut(ui: &mut Ui, layout: &Layout, labels: &[String], values: &[f64], hole: f32) {
    let size = vec2(ui.available_width().min(360.0), PLOT_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    let text_color = ui.visuals().text_color();

    let center = rect.center();
    let outer = rect.height().min(rect.width()) * 0.45;
    let inner = outer * hole.clamp(0.0, 0.95);
    let total: f64 = values.iter().sum();

    if total <= 0.0 {
        painter.circle_stroke(
            center,
            (outer + inner) / 2.0,
            Stroke::new(outer - inner, Color32::from_gray(80)),
        );
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "No data",
            FontId::proportional(14.0),
            text_color,
        );
        return;
    }

    let slices = slice_angles(values, total);
    let hovered = response
        .hover_pos()
        .and_then(|pos| slice_at(pos, center, inner, outer, &slices));

    for (i, &(start, end)) in slices.iter().enumerate() {
        let mut color = nth_color(&layout.colors, i, values.len());
        if hovered == Some(i) {
            color = lighten(color, 0.25);
        }
        paint_ring_segment(&painter, center, inner, outer, start, end, color);
    }

    let center_text = match hovered {
        Some(i) => format!(
            "{}\n{} ({:.1}%)",
            labels.get(i).map(String::as_str).unwrap_or(""),
            values[i],
            values[i] / total * 100.0
        ),
        None => format!("{total} records"),
    };
    painter.text(
        center,
        Align2::CENTER_CENTER,
        center_text,
        FontId::proportional(13.0),
        text_color,
    );

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (i, label) in labels.iter().enumerate() {
            let (swatch, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
            ui.painter()
                .rect_filled(swatch, 2.0, nth_color(&layout.colors, i, values.len()));
            let share = values.get(i).copied().unwrap_or(0.0) / total * 100.0;
            ui.label(format!("{label} {share:.1}%"));
            ui.add_space(8.0);
        }
    });
}

/// Start/end angle of each slice, clockwise from twelve o'clock.
fn slice_angles(values: &[f64], total: f64) -> Vec<(f32, f32)> {
    let mut angle = -PI / 2.0;
    values
        .iter()
        .map(|&v| {
            let start = angle;
            angle += (v / total) as f32 * TAU;
            (start, angle)
        })
        .collect()
}

fn slice_at(
    pos: Pos2,
    center: Pos2,
    inner: f32,
    outer: f32,
    slices: &[(f32, f32)],
) -> Option<usize> {
    let d = pos - center;
    let r = d.length();
    if r < inner || r > outer {
        return None;
    }
    let mut angle = d.y.atan2(d.x);
    if angle < -PI / 2.0 {
        angle += TAU;
    }
    slices
        .iter()
        .position(|&(start, end)| angle >= start && angle < end)
}

fn paint_ring_segment(
    painter: &egui::Painter,
    center: Pos2,
    inner: f32,
    outer: f32,
    start: f32,
    end: f32,
    color: Color32,
) {
    let point = |radius: f32, angle: f32| center + vec2(angle.cos(), angle.sin()) * radius;
    let mut a0 = start;
    while a0 < end {
        let a1 = (a0 + ARC_STEP).min(end);
        painter.add(Shape::convex_polygon(
            vec![point(outer, a0), point(outer, a1), point(inner, a1), point(inner, a0)],
            color,
            Stroke::NONE,
        ));
        a0 = a1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_only_on_whole_positions() {
        let labels = vec!["Run".to_string(), "Swim".to_string()];
        assert_eq!(category_label(&labels, 1.0), "Swim");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }

    #[test]
    fn slices_cover_the_full_circle() {
        let slices = slice_angles(&[1.0, 1.0, 2.0], 4.0);
        assert_eq!(slices[0].0, -PI / 2.0);
        assert!((slices[2].1 - (TAU - PI / 2.0)).abs() < 1e-5);
        assert!((slices[1].1 - PI / 2.0).abs() < 1e-5);
    }

    #[test]
    fn hover_position_maps_to_slice() {
        let slices = slice_angles(&[1.0, 1.0, 2.0], 4.0);
        let center = Pos2::new(100.0, 100.0);
        // Upper right quadrant.
        assert_eq!(slice_at(Pos2::new(135.0, 65.0), center, 20.0, 80.0, &slices), Some(0));
        // Lower right quadrant.
        assert_eq!(slice_at(Pos2::new(135.0, 135.0), center, 20.0, 80.0, &slices), Some(1));
        // Below centre.
        assert_eq!(slice_at(Pos2::new(100.0, 150.0), center, 20.0, 80.0, &slices), Some(2));
        // Left of centre.
        assert_eq!(slice_at(Pos2::new(50.0, 100.0), center, 20.0, 80.0, &slices), Some(2));
        // Inside the hole.
        assert_eq!(slice_at(Pos2::new(105.0, 100.0), center, 20.0, 80.0, &slices), None);
    }
}
