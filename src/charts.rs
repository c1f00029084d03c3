//! Chart descriptions handed to the renderer.
//!
//! Building a [`ChartSpec`] is pure: aggregate the records, attach a title
//! and colours. Drawing it is the job of a [`ChartRenderer`].

use crate::data::aggregate::{self, Bin};
use crate::data::model::Record;

/// Which of the three dashboard slots a chart goes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartTarget {
    Bar,
    Histogram,
    Pie,
}

impl ChartTarget {
    /// Stable widget id for the slot.
    pub fn id(self) -> &'static str {
        match self {
            ChartTarget::Bar => "bar_chart",
            ChartTarget::Histogram => "histogram_chart",
            ChartTarget::Pie => "pie_chart",
        }
    }
}

/// The data of one chart.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    /// Bars listed bottom to top.
    HorizontalBar { labels: Vec<String>, values: Vec<f64> },
    Histogram { bins: Vec<Bin> },
    /// A pie with a hole; `hole` is the inner radius as a fraction of the outer.
    Donut {
        labels: Vec<String>,
        values: Vec<f64>,
        hole: f32,
    },
}

/// Titles, spacing and colours of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub title: String,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    /// Fraction of a bar slot left empty.
    pub bar_gap: f32,
    /// Room reserved for category labels on the left, in points.
    pub left_margin: f32,
    /// Hex colours; one per series, or one per slice for a donut.
    pub colors: Vec<String>,
}

impl Layout {
    fn titled(title: impl Into<String>) -> Self {
        Layout {
            title: title.into(),
            x_title: None,
            y_title: None,
            bar_gap: 0.2,
            left_margin: 60.0,
            colors: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub target: ChartTarget,
    pub series: Series,
    pub layout: Layout,
}

/// Host-level switches that apply to every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Allow drag, zoom and scroll on the axis charts.
    pub interactive: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { interactive: true }
    }
}

/// Something that can draw a [`ChartSpec`].
pub trait ChartRenderer {
    fn render(&mut self, spec: &ChartSpec, options: &RenderOptions);
}

/// Tunables for building the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    pub top_n: usize,
    pub histogram_bins: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            histogram_bins: 20,
        }
    }
}

pub const BAR_COLOR: &str = "#667eea";
pub const HISTOGRAM_COLOR: &str = "#f0c419";
pub const DIFFICULTY_COLORS: [&str; 3] = ["#45b7d1", "#f0c419", "#e95a49"];

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Horizontal bars of the exercises with the highest calorie totals.
pub fn bar_chart(records: &[&Record], config: &ChartConfig) -> ChartSpec {
    let top = aggregate::top_calories(records, config.top_n);
    let (labels, values) = top.into_iter().unzip();

    let mut layout = Layout::titled(format!("Top {} Calorie-Burning Exercises", config.top_n));
    layout.x_title = Some("Calories burned".to_string());
    layout.left_margin = 150.0;
    layout.colors = vec![BAR_COLOR.to_string()];

    ChartSpec {
        target: ChartTarget::Bar,
        series: Series::HorizontalBar { labels, values },
        layout,
    }
}

/// Age distribution in equal-width buckets.
pub fn histogram(records: &[&Record], config: &ChartConfig) -> ChartSpec {
    let ages = aggregate::age_values(records);
    let bins = aggregate::bucket(&ages, config.histogram_bins);

    let mut layout = Layout::titled("Age Frequency Distribution");
    layout.x_title = Some("Age group".to_string());
    layout.y_title = Some("Number of users".to_string());
    layout.bar_gap = 0.05;
    layout.colors = vec![HISTOGRAM_COLOR.to_string()];

    ChartSpec {
        target: ChartTarget::Histogram,
        series: Series::Histogram { bins },
        layout,
    }
}

/// Donut of the three difficulty levels.
pub fn pie_chart(records: &[&Record]) -> ChartSpec {
    let counts = aggregate::difficulty_counts(records);
    log::debug!(
        "{} of {} records have a known difficulty level",
        counts.total(),
        records.len()
    );
    let (labels, values) = counts
        .iter()
        .map(|(level, n)| (level.label().to_string(), n as f64))
        .unzip();

    let mut layout = Layout::titled("Difficulty Level Proportion");
    layout.colors = DIFFICULTY_COLORS.iter().map(|c| c.to_string()).collect();

    ChartSpec {
        target: ChartTarget::Pie,
        series: Series::Donut {
            labels,
            values,
            hole: 0.4,
        },
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Measure;

    fn rows() -> Vec<Record> {
        let rec = |name: &str, kcal: f64, age: f64, level: &str| Record {
            exercise: Some(name.to_string()),
            calories_burned: Measure::new(kcal),
            age: Measure::new(age),
            difficulty: Some(level.to_string()),
            ..Default::default()
        };
        vec![
            rec("Run", 100.0, 25.0, "Beginner"),
            rec("Run", 50.0, 35.0, "Beginner"),
            rec("Swim", 400.0, 45.0, "Advanced"),
        ]
    }

    #[test]
    fn bar_chart_lists_largest_last() {
        let rows = rows();
        let refs: Vec<&Record> = rows.iter().collect();
        let spec = bar_chart(&refs, &ChartConfig::default());
        assert_eq!(spec.target, ChartTarget::Bar);
        assert_eq!(spec.layout.title, "Top 10 Calorie-Burning Exercises");
        assert_eq!(
            spec.series,
            Series::HorizontalBar {
                labels: vec!["Run".into(), "Swim".into()],
                values: vec![150.0, 400.0],
            }
        );
    }

    #[test]
    fn histogram_uses_configured_bin_count() {
        let rows = rows();
        let refs: Vec<&Record> = rows.iter().collect();
        let spec = histogram(
            &refs,
            &ChartConfig {
                top_n: 10,
                histogram_bins: 4,
            },
        );
        let Series::Histogram { bins } = spec.series else {
            panic!("expected histogram series");
        };
        assert_eq!(bins.len(), 4);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
        assert_eq!(spec.layout.bar_gap, 0.05);
    }

    #[test]
    fn pie_chart_has_one_colour_per_level() {
        let rows = rows();
        let refs: Vec<&Record> = rows.iter().collect();
        let spec = pie_chart(&refs);
        let Series::Donut { labels, values, hole } = spec.series else {
            panic!("expected donut series");
        };
        assert_eq!(labels, ["Beginner", "Intermediate", "Advanced"]);
        assert_eq!(values, [2.0, 0.0, 1.0]);
        assert_eq!(hole, 0.4);
        assert_eq!(spec.layout.colors.len(), 3);
    }
}
