//! Per-field distributions and the blood-pressure formula.

use std::ops::RangeInclusive;

use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};

/// Age in years, drawn uniformly.
pub const AGE: RangeInclusive<u32> = 25..=80;
/// Stress score, drawn uniformly and kept to one decimal.
pub const STRESS_SCORE: RangeInclusive<f64> = 1.0..=10.0;

pub const BMI: ClampedNormal = ClampedNormal::new(27.0, 4.5, 18.0, 40.0);
pub const SODIUM_INTAKE_G: ClampedNormal = ClampedNormal::new(3.2, 0.8, 1.5, 5.5);
pub const EXERCISE_MINUTES: ClampedNormal = ClampedNormal::new(150.0, 40.0, 30.0, 300.0);

/// Standard deviation of the gaussian noise added to systolic blood pressure.
pub const BLOOD_PRESSURE_NOISE_STD_DEV: f64 = 5.5;

/// Normal distribution whose draws saturate at `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedNormal {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl ClampedNormal {
    pub const fn new(mean: f64, std_dev: f64, min: f64, max: f64) -> Self {
        Self {
            mean,
            std_dev,
            min,
            max,
        }
    }

    pub fn distribution(&self) -> Result<Normal<f64>, NormalError> {
        Normal::new(self.mean, self.std_dev)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// A [`ClampedNormal`] paired with its sampler.
#[derive(Debug, Clone)]
pub struct FeatureSampler {
    spec: ClampedNormal,
    normal: Normal<f64>,
}

impl FeatureSampler {
    pub fn new(spec: ClampedNormal) -> Result<Self, NormalError> {
        Ok(Self {
            normal: spec.distribution()?,
            spec,
        })
    }

    /// Draw once and clamp. Rounding is left to the caller.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.spec.clamp(self.normal.sample(rng))
    }
}

/// Round half away from zero to `decimals` digits.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Noise-free systolic blood pressure for the given (already rounded) features.
pub fn expected_systolic(
    age: u32,
    bmi: f64,
    sodium_intake_g: f64,
    exercise_minutes_per_week: u32,
    stress_score: f64,
) -> f64 {
    let age = f64::from(age);
    let baseline = 75.0 + 0.7 * age + 0.4 * bmi;
    let modulation = 8.0 * (age / 12.0).sin() + 4.0 * (2.0 * sodium_intake_g).ln_1p();
    let lifestyle = -0.05 * f64::from(exercise_minutes_per_week) + 1.8 * stress_score;
    baseline + modulation + lifestyle
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn round_to_keeps_requested_digits() {
        assert_eq!(round_to(27.349, 1), 27.3);
        assert_eq!(round_to(3.2051, 2), 3.21);
        assert_eq!(round_to(18.0, 1), 18.0);
        assert_eq!(round_to(-0.26, 1), -0.3);
    }

    #[test]
    fn clamped_normal_saturates_at_bounds() {
        assert_eq!(BMI.clamp(12.0), 18.0);
        assert_eq!(BMI.clamp(55.5), 40.0);
        assert_eq!(BMI.clamp(27.1), 27.1);
        assert!(SODIUM_INTAKE_G.contains(1.5));
        assert!(!SODIUM_INTAKE_G.contains(5.51));
    }

    #[test]
    fn sampler_never_leaves_bounds() {
        // A wide spread forces most draws into the clamp.
        let spec = ClampedNormal::new(0.0, 1000.0, -1.0, 1.0);
        let sampler = FeatureSampler::new(spec).expect("valid distribution");
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(spec.contains(sampler.sample(&mut rng)));
        }
    }

    #[test]
    fn invalid_std_dev_is_rejected() {
        let spec = ClampedNormal::new(0.0, f64::NAN, 0.0, 1.0);
        assert!(FeatureSampler::new(spec).is_err());
    }

    #[test]
    fn expected_systolic_matches_formula() {
        // 127.8 baseline + 8 sin(5) + 4 ln(7.4) + (-7.5 + 9.0)
        let value = expected_systolic(60, 27.0, 3.2, 150, 5.0);
        assert!((value - 129.634_525_8).abs() < 1e-6, "got {value}");
    }

    #[test]
    fn expected_systolic_rises_with_stress() {
        let calm = expected_systolic(45, 25.0, 3.0, 120, 1.0);
        let stressed = expected_systolic(45, 25.0, 3.0, 120, 10.0);
        assert!((stressed - calm - 16.2).abs() < 1e-9);
    }
}
