use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use tracing::{debug, info};

use crate::errors::GenerationError;
use crate::features::{
    AGE, BLOOD_PRESSURE_NOISE_STD_DEV, BMI, EXERCISE_MINUTES, FeatureSampler, SODIUM_INTAKE_G,
    STRESS_SCORE, expected_systolic, round_to,
};
use crate::model::{GenerateOptions, Record};

/// Generate `count` records from an entropy-seeded engine.
pub fn generate(count: usize) -> Result<Vec<Record>, GenerationError> {
    Ok(GenerationEngine::new()?.generate(count))
}

/// Record generator holding its random source and samplers.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    rng: ChaCha8Rng,
    seeded: bool,
    bmi: FeatureSampler,
    sodium_intake_g: FeatureSampler,
    exercise_minutes: FeatureSampler,
    noise: Normal<f64>,
}

impl GenerationEngine {
    /// Engine seeded from operating-system entropy.
    pub fn new() -> Result<Self, GenerationError> {
        Self::with_rng(ChaCha8Rng::from_os_rng(), false)
    }

    /// Engine with a fixed seed; output is reproducible for the same seed.
    pub fn with_seed(seed: u64) -> Result<Self, GenerationError> {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed), true)
    }

    pub fn from_options(options: &GenerateOptions) -> Result<Self, GenerationError> {
        match options.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    fn with_rng(rng: ChaCha8Rng, seeded: bool) -> Result<Self, GenerationError> {
        Ok(Self {
            rng,
            seeded,
            bmi: FeatureSampler::new(BMI)?,
            sodium_intake_g: FeatureSampler::new(SODIUM_INTAKE_G)?,
            exercise_minutes: FeatureSampler::new(EXERCISE_MINUTES)?,
            noise: Normal::new(0.0, BLOOD_PRESSURE_NOISE_STD_DEV)?,
        })
    }

    /// Produce exactly `count` independent records, in generation order.
    pub fn generate(&mut self, count: usize) -> Vec<Record> {
        let start = Instant::now();
        info!(rows = count, seeded = self.seeded, "generation started");

        let records: Vec<Record> = (0..count).map(|_| self.next_record()).collect();

        info!(
            rows_generated = records.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "generation completed"
        );
        records
    }

    /// Draw one record. Each feature is clamped then rounded before it
    /// feeds the blood-pressure formula.
    pub fn next_record(&mut self) -> Record {
        let age = self.rng.random_range(AGE);
        let bmi = round_to(self.bmi.sample(&mut self.rng), 1);
        let sodium_intake_g = round_to(self.sodium_intake_g.sample(&mut self.rng), 2);
        let exercise_minutes_per_week = self.exercise_minutes.sample(&mut self.rng).trunc() as u32;
        let stress_score = round_to(self.rng.random_range(STRESS_SCORE), 1);

        let expected = expected_systolic(
            age,
            bmi,
            sodium_intake_g,
            exercise_minutes_per_week,
            stress_score,
        );
        let systolic_blood_pressure = round_to(expected + self.noise.sample(&mut self.rng), 1);

        debug!(age, bmi, systolic_blood_pressure, "record drawn");

        Record {
            age,
            bmi,
            sodium_intake_g,
            exercise_minutes_per_week,
            stress_score,
            systolic_blood_pressure,
        }
    }
}
