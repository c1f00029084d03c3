use super::model::{
    COL_AGE, COL_AVG_BPM, COL_CALORIES, COL_DIFFICULTY, COL_EXERCISE, COL_WORKOUT_TYPE, Measure,
    RawRecord, Record,
};

// ---------------------------------------------------------------------------
// Normalizer: raw text row → typed Record
// ---------------------------------------------------------------------------

/// Coerce one raw row into a [`Record`].
///
/// Never fails: numeric cells that are missing, empty or not a number become
/// [`Measure::NAN`]; text cells are trimmed when present and left `None`
/// when the column is absent.
pub fn normalize(raw: &RawRecord) -> Record {
    Record {
        exercise: text(raw, COL_EXERCISE),
        calories_burned: numeric(raw, COL_CALORIES),
        avg_bpm: numeric(raw, COL_AVG_BPM),
        age: numeric(raw, COL_AGE),
        workout_type: text(raw, COL_WORKOUT_TYPE),
        difficulty: text(raw, COL_DIFFICULTY),
    }
}

fn text(raw: &RawRecord, col: &str) -> Option<String> {
    raw.get(col).map(|v| v.trim().to_string())
}

fn numeric(raw: &RawRecord, col: &str) -> Measure {
    raw.get(col)
        .map(|v| parse_measure(v))
        .unwrap_or(Measure::NAN)
}

/// Parse a numeric cell, surrounding whitespace allowed.
pub fn parse_measure(s: &str) -> Measure {
    let s = s.trim();
    if s.is_empty() {
        return Measure::NAN;
    }
    s.parse::<f64>().map(Measure::new).unwrap_or(Measure::NAN)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn coerces_numbers_and_trims_text() {
        let r = normalize(&raw(&[
            (COL_EXERCISE, "  Push Ups "),
            (COL_CALORIES, " 312.5"),
            (COL_AVG_BPM, "140"),
            (COL_AGE, "34"),
            (COL_WORKOUT_TYPE, "Strength  "),
            (COL_DIFFICULTY, " Beginner"),
            ("Protein_Per_Kg", "1.6"),
        ]));
        assert_eq!(r.exercise.as_deref(), Some("Push Ups"));
        assert_eq!(r.calories_burned.value(), Some(312.5));
        assert_eq!(r.avg_bpm.value(), Some(140.0));
        assert_eq!(r.age.value(), Some(34.0));
        assert_eq!(r.workout_type.as_deref(), Some("Strength"));
        assert_eq!(r.difficulty.as_deref(), Some("Beginner"));
    }

    #[test]
    fn bad_numbers_become_sentinel() {
        let r = normalize(&raw(&[
            (COL_CALORIES, ""),
            (COL_AVG_BPM, "fast"),
            (COL_AGE, "NaN"),
        ]));
        assert!(r.calories_burned.is_nan());
        assert_eq!(r.calories_burned.or_zero(), 0.0);
        assert!(r.avg_bpm.is_nan());
        assert!(r.age.is_nan());
    }

    #[test]
    fn missing_columns_degrade() {
        let r = normalize(&RawRecord::new());
        assert_eq!(r.exercise, None);
        assert_eq!(r.workout_type, None);
        assert_eq!(r.difficulty, None);
        assert!(r.calories_burned.is_nan());
        assert!(r.age.is_nan());
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let rows = [
            raw(&[
                (COL_EXERCISE, " Run "),
                (COL_CALORIES, "100"),
                (COL_AGE, " 25 "),
                (COL_WORKOUT_TYPE, "Cardio "),
                (COL_DIFFICULTY, "Beginner"),
            ]),
            raw(&[(COL_CALORIES, "abc"), (COL_AVG_BPM, "1e3")]),
            raw(&[(COL_WORKOUT_TYPE, ""), (COL_AGE, "-0.5")]),
            RawRecord::new(),
        ];
        for row in &rows {
            let once = normalize(row);
            let twice = normalize(&RawRecord::from(&once));
            assert_eq!(once, twice, "row {row:?}");
        }
    }

    fn cell() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            any::<f64>().prop_map(|v| v.to_string()),
            (any::<i32>(), "[ \t]{0,2}").prop_map(|(v, pad)| format!("{pad}{v}{pad}")),
            "\\PC{0,12}",
        ]
    }

    fn arb_raw() -> impl Strategy<Value = RawRecord> {
        let columns = [
            COL_EXERCISE,
            COL_CALORIES,
            COL_AVG_BPM,
            COL_AGE,
            COL_WORKOUT_TYPE,
            COL_DIFFICULTY,
        ];
        prop::collection::vec(prop::option::of(cell()), 6).prop_map(move |cells| {
            columns
                .iter()
                .zip(cells)
                .filter_map(|(col, cell)| cell.map(|c| (col.to_string(), c)))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(row in arb_raw()) {
            let once = normalize(&row);
            let twice = normalize(&RawRecord::from(&once));
            prop_assert_eq!(once, twice);
        }
    }
}
