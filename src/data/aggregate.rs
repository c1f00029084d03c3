use std::collections::HashMap;

use super::model::{Difficulty, Record};

// ---------------------------------------------------------------------------
// Top-N calories by exercise (bar chart)
// ---------------------------------------------------------------------------

/// Sum calories per exercise name and keep the `n` largest totals.
///
/// The result is in **ascending** order so a horizontal bar chart shows the
/// biggest total at the top. Ties keep first-seen order before the final
/// reversal. Records without an exercise name are grouped under `""`.
pub fn top_calories(records: &[&Record], n: usize) -> Vec<(String, f64)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(String, f64)> = Vec::new();

    for r in records {
        let name = r.exercise.as_deref().unwrap_or("");
        let calories = r.calories_burned.or_zero();
        match index.get(name) {
            Some(&i) => totals[i].1 += calories,
            None => {
                index.insert(name, totals.len());
                totals.push((name.to_string(), calories));
            }
        }
    }

    // `sort_by` is stable, so equal totals stay in insertion order.
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals.truncate(n);
    totals.reverse();
    totals
}

// ---------------------------------------------------------------------------
// Age distribution (histogram)
// ---------------------------------------------------------------------------

/// Raw ages in input order; the non-numeric sentinel is passed through as NaN.
pub fn age_values(records: &[&Record]) -> Vec<f64> {
    records.iter().map(|r| r.age.as_f64()).collect()
}

/// One histogram bucket, `[start, end)` (the last one is closed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Bin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Split the finite `values` into `bins` equal-width buckets spanning the
/// observed range.
///
/// Non-finite values are not counted. When every value is the same, a single
/// bucket of width 1 centred on it is returned.
pub fn bucket(values: &[f64], bins: usize) -> Vec<Bin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if (max - min).abs() < f64::EPSILON {
        return vec![Bin {
            start: min - 0.5,
            end: min + 0.5,
            count: finite.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for v in &finite {
        let idx = (((v - min) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            start: min + i as f64 * width,
            end: if i + 1 == bins {
                max
            } else {
                min + (i + 1) as f64 * width
            },
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Difficulty counts (pie chart)
// ---------------------------------------------------------------------------

/// Record count per difficulty level, always holding all three levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DifficultyCounts([usize; 3]);

impl DifficultyCounts {
    pub fn get(&self, level: Difficulty) -> usize {
        self.0[slot(level)]
    }

    /// `(level, count)` in the fixed display order.
    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, usize)> + '_ {
        Difficulty::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    fn increment(&mut self, level: Difficulty) {
        self.0[slot(level)] += 1;
    }
}

fn slot(level: Difficulty) -> usize {
    match level {
        Difficulty::Beginner => 0,
        Difficulty::Intermediate => 1,
        Difficulty::Advanced => 2,
    }
}

/// Count records per known difficulty level; anything else is ignored.
pub fn difficulty_counts(records: &[&Record]) -> DifficultyCounts {
    let mut counts = DifficultyCounts::default();
    for level in records.iter().filter_map(|r| r.difficulty_level()) {
        counts.increment(level);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Measure;

    fn session(name: &str, calories: Option<f64>, level: &str) -> Record {
        Record {
            exercise: Some(name.to_string()),
            calories_burned: calories.map(Measure::new).unwrap_or(Measure::NAN),
            difficulty: Some(level.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn sums_calories_per_exercise() {
        let rows = [
            session("Run", Some(100.0), "Beginner"),
            session("Run", Some(50.0), "Beginner"),
        ];
        let refs: Vec<&Record> = rows.iter().collect();
        assert_eq!(top_calories(&refs, 10), [("Run".to_string(), 150.0)]);
        assert_eq!(difficulty_counts(&refs).get(Difficulty::Beginner), 2);
    }

    #[test]
    fn keeps_ten_largest_in_ascending_order() {
        let rows: Vec<Record> = (0..15)
            .map(|i| session(&format!("ex{i}"), Some(((i * 7) % 15) as f64 * 10.0), "Advanced"))
            .collect();
        let refs: Vec<&Record> = rows.iter().collect();
        let top = top_calories(&refs, 10);
        assert_eq!(top.len(), 10);
        assert!(top.windows(2).all(|w| w[0].1 <= w[1].1));
        assert_eq!(top.last().map(|t| t.1), Some(140.0));
        assert_eq!(top.first().map(|t| t.1), Some(50.0));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let rows = [
            session("A", Some(10.0), "Beginner"),
            session("B", Some(10.0), "Beginner"),
            session("C", Some(5.0), "Beginner"),
        ];
        let refs: Vec<&Record> = rows.iter().collect();
        let names: Vec<String> = top_calories(&refs, 2).into_iter().map(|t| t.0).collect();
        // Descending [A, B], reversed for the chart.
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn missing_calories_count_as_zero_and_unnamed_rows_share_a_bar() {
        let mut unnamed = session("x", Some(999.0), "Beginner");
        unnamed.exercise = None;
        let rows = [
            session("Run", Some(100.0), "Beginner"),
            session("Run", None, "Beginner"),
            unnamed,
            session("", Some(1.0), "Beginner"),
        ];
        let refs: Vec<&Record> = rows.iter().collect();
        assert_eq!(
            top_calories(&refs, 10),
            [("Run".to_string(), 100.0), ("".to_string(), 1000.0)]
        );
    }

    #[test]
    fn difficulty_counts_ignore_unknown_levels() {
        let mut none = session("z", None, "");
        none.difficulty = None;
        let rows = [
            session("a", None, "Beginner"),
            session("b", None, "Advanced"),
            session("c", None, "Expert"),
            session("d", None, "advanced"),
            session("e", None, "Intermediate"),
            none,
        ];
        let refs: Vec<&Record> = rows.iter().collect();
        let counts = difficulty_counts(&refs);
        let keys: Vec<Difficulty> = counts.iter().map(|(d, _)| d).collect();
        assert_eq!(keys, Difficulty::ALL);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.get(Difficulty::Intermediate), 1);
    }

    #[test]
    fn empty_input_still_has_three_levels() {
        let counts = difficulty_counts(&[]);
        assert_eq!(counts.iter().count(), 3);
        assert_eq!(counts.total(), 0);
        assert!(top_calories(&[], 10).is_empty());
    }

    #[test]
    fn ages_pass_through_with_sentinel() {
        let mut a = Record::default();
        a.age = Measure::new(30.0);
        let b = Record::default();
        let ages = age_values(&[&a, &b]);
        assert_eq!(ages[0], 30.0);
        assert!(ages[1].is_nan());
    }

    #[test]
    fn buckets_span_observed_range() {
        let values = [18.0, 20.0, 59.0, f64::NAN, 38.5, 59.0];
        let bins = bucket(&values, 20);
        assert_eq!(bins.len(), 20);
        assert_eq!(bins[0].start, 18.0);
        assert_eq!(bins[19].end, 59.0);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 5);
        assert_eq!(bins[19].count, 2);
        let w = bins[0].width();
        assert!(bins.iter().all(|b| (b.width() - w).abs() < 1e-9));
    }

    #[test]
    fn bucket_edge_cases() {
        assert!(bucket(&[], 20).is_empty());
        assert!(bucket(&[f64::NAN], 20).is_empty());
        assert!(bucket(&[1.0, 2.0], 0).is_empty());
        let single = bucket(&[40.0, 40.0, 40.0], 20);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].count, 3);
        assert_eq!(single[0].center(), 40.0);
    }
}
