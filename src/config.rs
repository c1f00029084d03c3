use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

use crate::charts::ChartConfig;

pub const DEFAULT_DATA_FILE: &str = "SmartFitnesNutrition.csv";

/// Upper bounds on the chart tunables; the histogram allocates one slot per bin.
pub const MAX_TOP_N: usize = 1000;
pub const MAX_HISTOGRAM_BINS: usize = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Parser, Debug, Default)]
#[command(name = "fitness-dashboard")]
#[command(about = "Workout dashboard for fitness CSV data")]
#[command(version)]
pub struct Args {
    /// CSV or JSON file with one exercise session per row
    pub data: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of exercises in the calorie chart
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Number of buckets in the age histogram
    #[arg(long)]
    pub bins: Option<usize>,
}

// ---------------------------------------------------------------------------
// Config file
// ---------------------------------------------------------------------------

/// Settings read from the optional JSON config file.
///
/// ```json
/// { "data_path": "SmartFitnesNutrition.csv", "top_n": 10, "histogram_bins": 20 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub top_n: usize,
    pub histogram_bins: usize,
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let charts = ChartConfig::default();
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            top_n: charts.top_n,
            histogram_bins: charts.histogram_bins,
            window_size: [1200.0, 800.0],
        }
    }
}

impl DashboardConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the effective configuration: command-line flags win over the
    /// config file, which wins over defaults.
    pub fn resolve(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(data) = &args.data {
            config.data_path = data.clone();
        }
        if let Some(n) = args.top_n {
            config.top_n = n;
        }
        if let Some(bins) = args.bins {
            config.histogram_bins = bins;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_TOP_N).contains(&self.top_n) {
            return Err(ConfigError::Invalid(format!(
                "top_n must be between 1 and {MAX_TOP_N}, got {}",
                self.top_n
            )));
        }
        if !(1..=MAX_HISTOGRAM_BINS).contains(&self.histogram_bins) {
            return Err(ConfigError::Invalid(format!(
                "histogram_bins must be between 1 and {MAX_HISTOGRAM_BINS}, got {}",
                self.histogram_bins
            )));
        }
        Ok(())
    }

    pub fn charts(&self) -> ChartConfig {
        ChartConfig {
            top_n: self.top_n,
            histogram_bins: self.histogram_bins,
        }
    }
}
