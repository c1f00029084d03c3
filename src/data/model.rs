use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Column names of the fitness CSV
// ---------------------------------------------------------------------------

pub const COL_EXERCISE: &str = "Name of Exercise";
pub const COL_CALORIES: &str = "Calories_Burned";
pub const COL_AVG_BPM: &str = "Avg_BPM";
pub const COL_AGE: &str = "Age";
pub const COL_WORKOUT_TYPE: &str = "Workout_Type";
pub const COL_DIFFICULTY: &str = "Difficulty Level";

/// One row as it comes out of the file: column name → raw text.
pub type RawRecord = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// Measure – a coerced numeric cell
// ---------------------------------------------------------------------------

/// A numeric field after coercion.
///
/// Text that does not parse as a number becomes the non-numeric sentinel
/// instead of an error. The sentinel contributes nothing to sums.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measure(Option<f64>);

impl Measure {
    /// The non-numeric sentinel.
    pub const NAN: Measure = Measure(None);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::NAN
        } else {
            Measure(Some(value))
        }
    }

    pub fn value(&self) -> Option<f64> {
        self.0
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_none()
    }

    /// The value, with the sentinel mapped to `f64::NAN`.
    pub fn as_f64(&self) -> f64 {
        self.0.unwrap_or(f64::NAN)
    }

    /// The value, with the sentinel counted as zero.
    pub fn or_zero(&self) -> f64 {
        self.0.unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Difficulty – the fixed set of levels counted by the pie chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All levels in display order.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Exact, case-sensitive match on the level name.
impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or(())
    }
}

// ---------------------------------------------------------------------------
// Record – one exercise session
// ---------------------------------------------------------------------------

/// A single normalized exercise session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub exercise: Option<String>,
    pub calories_burned: Measure,
    pub avg_bpm: Measure,
    pub age: Measure,
    pub workout_type: Option<String>,
    /// Kept as text; only the three known levels are counted downstream.
    pub difficulty: Option<String>,
}

impl Record {
    pub fn difficulty_level(&self) -> Option<Difficulty> {
        self.difficulty.as_deref()?.parse().ok()
    }
}

/// Render a record back to text. The sentinel becomes an empty cell and
/// absent text fields stay absent.
impl From<&Record> for RawRecord {
    fn from(record: &Record) -> Self {
        let mut raw = RawRecord::new();
        let mut put_text = |col: &str, value: &Option<String>| {
            if let Some(v) = value {
                raw.insert(col.to_string(), v.clone());
            }
        };
        put_text(COL_EXERCISE, &record.exercise);
        put_text(COL_WORKOUT_TYPE, &record.workout_type);
        put_text(COL_DIFFICULTY, &record.difficulty);

        for (col, measure) in [
            (COL_CALORIES, record.calories_burned),
            (COL_AVG_BPM, record.avg_bpm),
            (COL_AGE, record.age),
        ] {
            let text = measure.value().map(|v| v.to_string()).unwrap_or_default();
            raw.insert(col.to_string(), text);
        }
        raw
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full normalized dataset. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    /// Sorted distinct non-empty workout types, for the selector.
    pub workout_types: BTreeSet<String>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        let workout_types = records
            .iter()
            .filter_map(|r| r.workout_type.as_deref())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Dataset {
            records,
            workout_types,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_exact_names_only() {
        assert_eq!("Advanced".parse::<Difficulty>(), Ok(Difficulty::Advanced));
        assert!("advanced".parse::<Difficulty>().is_err());
        assert!("Expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn measure_sentinel_counts_as_zero() {
        assert_eq!(Measure::NAN.or_zero(), 0.0);
        assert!(Measure::NAN.as_f64().is_nan());
        assert!(Measure::new(f64::NAN).is_nan());
        assert_eq!(Measure::new(12.5).or_zero(), 12.5);
    }

    #[test]
    fn dataset_collects_distinct_workout_types() {
        let rec = |t: Option<&str>| Record {
            workout_type: t.map(str::to_string),
            ..Default::default()
        };
        let ds = Dataset::from_records(vec![
            rec(Some("Strength")),
            rec(Some("Cardio")),
            rec(Some("Cardio")),
            rec(Some("")),
            rec(None),
        ]);
        assert_eq!(ds.len(), 5);
        let types: Vec<&str> = ds.workout_types.iter().map(String::as_str).collect();
        assert_eq!(types, ["Cardio", "Strength"]);
    }

    #[test]
    fn raw_record_leaves_absent_text_absent() {
        let record = Record {
            exercise: Some("Run".into()),
            calories_burned: Measure::new(100.0),
            ..Default::default()
        };
        let raw = RawRecord::from(&record);
        assert_eq!(raw.get(COL_EXERCISE).map(String::as_str), Some("Run"));
        assert_eq!(raw.get(COL_CALORIES).map(String::as_str), Some("100"));
        assert_eq!(raw.get(COL_AGE).map(String::as_str), Some(""));
        assert!(!raw.contains_key(COL_WORKOUT_TYPE));
    }
}
