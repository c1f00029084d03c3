use std::sync::Arc;

use crate::charts::{self, ChartConfig, ChartRenderer, ChartSpec, RenderOptions};
use crate::data::filter::{Selector, filter_records};
use crate::data::loader::LoadError;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Dashboard view: everything derived from one filter choice
// ---------------------------------------------------------------------------

/// The three charts for one selector, recomputed on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub selector: Selector,
    /// Number of records that passed the filter.
    pub shown: usize,
    pub charts: [ChartSpec; 3],
}

impl DashboardView {
    /// Hand every chart to the renderer (full redraw).
    pub fn render_all(&self, renderer: &mut dyn ChartRenderer, options: &RenderOptions) {
        for spec in &self.charts {
            renderer.render(spec, options);
        }
    }
}

/// Filter the dataset, run the three aggregations and describe the charts.
pub fn update_dashboard(
    dataset: &Dataset,
    selector: &Selector,
    config: &ChartConfig,
) -> DashboardView {
    let records = filter_records(dataset, selector);
    log::info!(
        "Filter changed to {selector}: {} of {} rows",
        records.len(),
        dataset.len()
    );

    DashboardView {
        selector: selector.clone(),
        shown: records.len(),
        charts: [
            charts::bar_chart(&records, config),
            charts::histogram(&records, config),
            charts::pie_chart(&records),
        ],
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Nothing rendered yet, or the data never loaded.
    Initial,
    Rendered(DashboardView),
}

/// The full UI state, independent of rendering.
pub struct DashboardState {
    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<Arc<Dataset>>,

    pub phase: Phase,

    pub chart_config: ChartConfig,

    pub render_options: RenderOptions,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl DashboardState {
    pub fn new(chart_config: ChartConfig) -> Self {
        Self {
            dataset: None,
            phase: Phase::Initial,
            chart_config,
            render_options: RenderOptions::default(),
            status_message: None,
        }
    }

    /// Current view, if the charts have been rendered.
    pub fn view(&self) -> Option<&DashboardView> {
        match &self.phase {
            Phase::Rendered(view) => Some(view),
            Phase::Initial => None,
        }
    }

    /// Ingest the result of loading a data file.
    ///
    /// Success stores the dataset and renders everything with `All`. Failure
    /// is logged and leaves the current phase untouched.
    pub fn on_load_complete(&mut self, result: Result<Dataset, LoadError>) {
        match result {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records, distinct workout types: {:?}",
                    dataset.len(),
                    dataset.workout_types
                );
                if dataset.is_empty() {
                    log::warn!("Data file has a header but no rows");
                }
                let dataset = Arc::new(dataset);
                let view = update_dashboard(&dataset, &Selector::all(), &self.chart_config);
                self.dataset = Some(dataset);
                self.phase = Phase::Rendered(view);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load or process the data file: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// React to the workout-type control. Ignored until data is rendered.
    pub fn on_filter_change(&mut self, value: &str) {
        let Phase::Rendered(_) = self.phase else {
            return;
        };
        let Some(dataset) = &self.dataset else {
            return;
        };
        let view = update_dashboard(dataset, &Selector::new(value), &self.chart_config);
        self.phase = Phase::Rendered(view);
    }
}
