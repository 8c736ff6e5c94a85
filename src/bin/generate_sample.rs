//! Write a synthetic `health.csv` so the dashboard can run without the
//! real dataset.

const AGE_GROUPS: [&str; 5] = ["20-30", "30-40", "40-50", "50-60", "60+"];
const GENDERS: [&str; 2] = ["Male", "Female"];
const DIETS: [&str; 3] = ["Healthy", "Medium", "Unhealthy"];
const MEDICATION: [&str; 2] = ["No", "Yes"];
const ROWS: usize = 500;

/// SplitMix64 stream; reproducible for a fixed seed.
struct SplitMix {
    state: u64,
    spare: Option<f64>,
}

impl SplitMix {
    fn seeded(seed: u64) -> Self {
        SplitMix { state: seed, spare: None }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Standard normal via the Marsaglia polar method; the second variate of
    /// each accepted pair is kept for the next call.
    fn standard_normal(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }
        loop {
            let u = 2.0 * self.unit() - 1.0;
            let v = 2.0 * self.unit() - 1.0;
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                let factor = (-2.0 * s.ln() / s).sqrt();
                self.spare = Some(v * factor);
                return u * factor;
            }
        }
    }

    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.standard_normal()
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn choose<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[self.below(options.len())]
    }
}

fn main() {
    let mut rng = SplitMix::seeded(42);
    let output_path = "health.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "",
            "Age_group",
            "Gender",
            "Sleep Quality",
            "Sleep Duration",
            "Physical Activity Level",
            "Dietary Habits",
            "Medication Usage",
            "Daily Steps",
            "Sleep Disorders",
            "Calories Burned",
        ])
        .expect("Failed to write header");

    for i in 0..ROWS {
        let age_group = rng.choose(&AGE_GROUPS);
        let gender = rng.choose(&GENDERS);
        let diet = rng.choose(&DIETS);
        let medication = rng.choose(&MEDICATION);
        let activity = rng.below(3) as i64;

        // More activity and a better diet nudge sleep upward.
        let diet_bonus = match diet {
            "Healthy" => 1.0,
            "Unhealthy" => -1.0,
            _ => 0.0,
        };
        let sleep_quality = rng
            .normal(5.5 + 0.6 * activity as f64 + diet_bonus, 1.6)
            .round()
            .clamp(1.0, 10.0) as i64;
        let sleep_duration = rng.normal(5.0 + 0.3 * sleep_quality as f64, 0.6).clamp(3.0, 11.0);
        let daily_steps = rng
            .normal(4000.0 + 3500.0 * activity as f64, 1200.0)
            .max(500.0)
            .round() as i64;
        let calories = 1500.0 + daily_steps as f64 * 0.08 + rng.normal(0.0, 120.0);
        let disorder = u8::from(sleep_quality <= 4 && rng.unit() < 0.6);

        writer
            .write_record([
                i.to_string(),
                age_group.to_string(),
                gender.to_string(),
                sleep_quality.to_string(),
                format!("{sleep_duration:.1}"),
                activity.to_string(),
                diet.to_string(),
                medication.to_string(),
                daily_steps.to_string(),
                disorder.to_string(),
                format!("{calories:.0}"),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {ROWS} records to {output_path}");
}
