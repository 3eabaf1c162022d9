//! Response-time pacing for automated seats.
//!
//! Each seat gets a [`Pacing`] when the session is built. The delay only
//! shapes wall-clock presentation; it never changes which move is applied.

use std::time::Duration;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::config::TimingConfig;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pacing {
    /// No delay. Human seats and tests.
    Immediate,
    /// Normal distribution in seconds, clamped below at `floor`.
    Normal { distribution: Normal<f64>, floor: f64 },
}

impl Pacing {
    pub fn from_timing(timing: &TimingConfig) -> Result<Self, AppError> {
        timing.validate()?;
        if timing.mean <= 0.0
            && timing.standard_deviation == 0.0
            && timing.minimum_response_time == 0.0
        {
            return Ok(Pacing::Immediate);
        }
        let distribution = Normal::new(timing.mean, timing.standard_deviation)
            .map_err(|e| AppError::config(format!("invalid timing distribution: {e}")))?;
        Ok(Pacing::Normal {
            distribution,
            floor: timing.minimum_response_time,
        })
    }

    /// Pacing for a seat: human seats never wait.
    pub fn for_seat(is_human: bool, timing: &TimingConfig) -> Result<Self, AppError> {
        if is_human {
            Ok(Pacing::Immediate)
        } else {
            Self::from_timing(timing)
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        match self {
            Pacing::Immediate => Duration::ZERO,
            Pacing::Normal {
                distribution,
                floor,
            } => {
                let secs = distribution.sample(rng).max(*floor).max(0.0);
                Duration::from_secs_f64(secs)
            }
        }
    }
}
