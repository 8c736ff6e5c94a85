use serde::Deserialize;

// ---------------------------------------------------------------------------
// Column names – part of the file contract, matched by header name
// ---------------------------------------------------------------------------

pub const AGE_GROUP: &str = "Age_group";
pub const GENDER: &str = "Gender";
pub const SLEEP_QUALITY: &str = "Sleep Quality";
pub const SLEEP_DURATION: &str = "Sleep Duration";
pub const PHYSICAL_ACTIVITY: &str = "Physical Activity Level";
pub const DIETARY_HABITS: &str = "Dietary Habits";
pub const MEDICATION_USAGE: &str = "Medication Usage";
pub const DAILY_STEPS: &str = "Daily Steps";
pub const SLEEP_DISORDERS: &str = "Sleep Disorders";
pub const CALORIES_BURNED: &str = "Calories Burned";

/// Every column a [`Record`] is decoded from, in file order.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    AGE_GROUP,
    GENDER,
    SLEEP_QUALITY,
    SLEEP_DURATION,
    PHYSICAL_ACTIVITY,
    DIETARY_HABITS,
    MEDICATION_USAGE,
    DAILY_STEPS,
    SLEEP_DISORDERS,
    CALORIES_BURNED,
];

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// One individual's health profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(rename = "Age_group")]
    pub age_group: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    /// Rating 1–10.
    #[serde(rename = "Sleep Quality")]
    pub sleep_quality: i64,
    /// Hours.
    #[serde(rename = "Sleep Duration")]
    pub sleep_duration: f64,
    /// Ordinal level 0–2.
    #[serde(rename = "Physical Activity Level")]
    pub physical_activity: i64,
    #[serde(rename = "Dietary Habits")]
    pub dietary_habits: String,
    #[serde(rename = "Medication Usage")]
    pub medication_usage: String,
    #[serde(rename = "Daily Steps")]
    pub daily_steps: i64,
    #[serde(rename = "Sleep Disorders")]
    pub sleep_disorders: f64,
    #[serde(rename = "Calories Burned")]
    pub calories_burned: f64,
}

// ---------------------------------------------------------------------------
// FilterOptions – valid values for each categorical control
// ---------------------------------------------------------------------------

/// Distinct categorical values, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub age_groups: Vec<String>,
    pub genders: Vec<String>,
    pub dietary_habits: Vec<String>,
    pub medication_usage: Vec<String>,
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset, immutable after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    options: FilterOptions,
}

impl Dataset {
    /// Build the categorical option lists from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut options = FilterOptions::default();
        for rec in &records {
            push_unique(&mut options.age_groups, &rec.age_group);
            push_unique(&mut options.genders, &rec.gender);
            push_unique(&mut options.dietary_habits, &rec.dietary_habits);
            push_unique(&mut options.medication_usage, &rec.medication_usage);
        }
        Dataset { records, options }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Test fixtures
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Dataset, Record};

    pub fn record(age_group: &str, gender: &str, sleep_quality: i64) -> Record {
        Record {
            age_group: age_group.to_string(),
            gender: gender.to_string(),
            sleep_quality,
            sleep_duration: 7.0,
            physical_activity: 1,
            dietary_habits: "Healthy".to_string(),
            medication_usage: "No".to_string(),
            daily_steps: 8000,
            sleep_disorders: 0.0,
            calories_burned: 2200.0,
        }
    }

    /// The three-record dataset used by the scenario tests.
    pub fn scenario() -> Dataset {
        Dataset::from_records(vec![
            record("A", "M", 5),
            record("A", "F", 8),
            record("B", "M", 3),
        ])
    }
}
