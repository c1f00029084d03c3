use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

/// Write a synthetic fitness CSV with the columns the dashboard reads.
#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
struct Args {
    /// Output file
    #[arg(short, long, default_value = "SmartFitnesNutrition.csv")]
    output: PathBuf,

    /// Number of sessions to write
    #[arg(short, long, default_value_t = 500)]
    rows: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Serialize)]
struct Session<'a> {
    #[serde(rename = "Name of Exercise")]
    exercise: &'a str,
    #[serde(rename = "Calories_Burned")]
    calories: String,
    #[serde(rename = "Avg_BPM")]
    avg_bpm: u32,
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "Workout_Type")]
    workout_type: String,
    #[serde(rename = "Difficulty Level")]
    difficulty: &'a str,
    #[serde(rename = "Session_Duration (hours)")]
    duration_hours: f64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Exercise name, workout type, calories per hour.
const EXERCISES: [(&str, &str, f64); 12] = [
    ("Running", "Cardio", 650.0),
    ("Cycling", "Cardio", 550.0),
    ("Jump Rope", "Cardio", 720.0),
    ("Rowing", "Cardio", 600.0),
    ("Squats", "Strength", 420.0),
    ("Deadlifts", "Strength", 450.0),
    ("Bench Press", "Strength", 380.0),
    ("Burpees", "HIIT", 800.0),
    ("Mountain Climbers", "HIIT", 700.0),
    ("Sun Salutation", "Yoga", 250.0),
    ("Warrior Pose", "Yoga", 180.0),
    ("Plank", "Strength", 300.0),
];

const LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    for _ in 0..args.rows {
        let &(exercise, workout_type, kcal_per_hour) = rng.pick(&EXERCISES);
        let difficulty = *rng.pick(&LEVELS);
        let duration_hours = (rng.range(0.5, 2.0) * 100.0).round() / 100.0;
        let intensity = match difficulty {
            "Beginner" => 0.8,
            "Intermediate" => 1.0,
            _ => 1.2,
        };
        // Roughly one session in fifty has no calorie reading.
        let calories = if rng.next_f64() < 0.02 {
            String::new()
        } else {
            format!("{:.1}", kcal_per_hour * duration_hours * intensity)
        };

        writer.serialize(Session {
            exercise,
            calories,
            avg_bpm: rng.range(100.0, 180.0) as u32,
            age: rng.range(18.0, 60.0) as u32,
            // Stray padding, as in hand-edited spreadsheets.
            workout_type: if rng.next_f64() < 0.1 {
                format!(" {workout_type} ")
            } else {
                workout_type.to_string()
            },
            difficulty,
            duration_hours,
        })?;
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {} sessions to {}", args.rows, args.output.display());
    Ok(())
}
