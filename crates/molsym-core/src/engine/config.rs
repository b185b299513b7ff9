use super::easing::Easing;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);
pub const DEFAULT_HOLD: Duration = Duration::from_millis(1000);
/// Default invariance tolerance, in Angstroms.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

/// Timing and easing of a forward / hold / reverse animation cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Length of the forward phase; the reverse phase takes equally long.
    pub duration: Duration,
    /// Time spent showing the transformed configuration.
    pub hold: Duration,
    pub easing: Easing,
}

/// Length of a forward / hold / reverse cycle, or `None` if it does not fit
/// in a [`Duration`].
pub fn checked_cycle_length(duration: Duration, hold: Duration) -> Option<Duration> {
    duration.checked_mul(2).and_then(|d| d.checked_add(hold))
}

impl AnimationConfig {
    /// Total length of one cycle: forward, hold and reverse. Saturates at
    /// [`Duration::MAX`].
    pub fn cycle_length(&self) -> Duration {
        self.duration.saturating_mul(2).saturating_add(self.hold)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            hold: DEFAULT_HOLD,
            easing: Easing::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub animation: AnimationConfig,
    /// Maximum distance (Angstroms) at which a transformed atom still counts
    /// as coinciding with an original one.
    pub tolerance: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            animation: AnimationConfig::default(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

#[derive(Default)]
pub struct AnimationConfigBuilder {
    duration: Option<Duration>,
    hold: Option<Duration>,
    easing: Option<Easing>,
}

impl AnimationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
    pub fn hold(mut self, hold: Duration) -> Self {
        self.hold = Some(hold);
        self
    }
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn build(self) -> Result<AnimationConfig, ConfigError> {
        let duration = self
            .duration
            .ok_or(ConfigError::MissingParameter("duration"))?;
        if duration.is_zero() {
            return Err(ConfigError::InvalidValue {
                parameter: "duration",
                reason: "must be greater than zero".to_string(),
            });
        }
        let hold = self.hold.ok_or(ConfigError::MissingParameter("hold"))?;
        if checked_cycle_length(duration, hold).is_none() {
            return Err(ConfigError::InvalidValue {
                parameter: "duration",
                reason: format!(
                    "a cycle of {:?} forward, {:?} hold and {:?} reverse is too long",
                    duration, hold, duration
                ),
            });
        }
        Ok(AnimationConfig {
            duration,
            hold,
            easing: self.easing.ok_or(ConfigError::MissingParameter("easing"))?,
        })
    }
}

#[derive(Default)]
pub struct SessionConfigBuilder {
    animation: Option<AnimationConfig>,
    tolerance: Option<f64>,
}

impl SessionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = Some(animation);
        self
    }
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    pub fn build(self) -> Result<SessionConfig, ConfigError> {
        let tolerance = self
            .tolerance
            .ok_or(ConfigError::MissingParameter("tolerance"))?;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::InvalidValue {
                parameter: "tolerance",
                reason: format!("must be a finite, non-negative distance (got {})", tolerance),
            });
        }
        Ok(SessionConfig {
            animation: self
                .animation
                .ok_or(ConfigError::MissingParameter("animation"))?,
            tolerance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classroom_timings() {
        let config = SessionConfig::default();
        assert_eq!(config.animation.duration, Duration::from_secs(2));
        assert_eq!(config.animation.hold, Duration::from_secs(1));
        assert_eq!(config.animation.easing, Easing::CubicInOut);
        assert_eq!(config.tolerance, 1e-3);
        assert_eq!(config.animation.cycle_length(), Duration::from_secs(5));
    }

    #[test]
    fn animation_builder_succeeds_with_all_parameters() {
        let config = AnimationConfigBuilder::new()
            .duration(Duration::from_millis(1500))
            .hold(Duration::ZERO)
            .easing(Easing::Linear)
            .build()
            .unwrap();
        assert_eq!(config.duration, Duration::from_millis(1500));
        assert_eq!(config.hold, Duration::ZERO);
        assert_eq!(config.easing, Easing::Linear);
    }

    #[test]
    fn animation_builder_fails_if_parameter_is_missing() {
        let result = AnimationConfigBuilder::new()
            .duration(Duration::from_secs(1))
            .easing(Easing::Linear)
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("hold")));
    }

    #[test]
    fn animation_builder_rejects_zero_duration() {
        let result = AnimationConfigBuilder::new()
            .duration(Duration::ZERO)
            .hold(Duration::from_secs(1))
            .easing(Easing::Linear)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                parameter: "duration",
                ..
            })
        ));
    }

    #[test]
    fn animation_builder_rejects_cycle_that_overflows() {
        let result = AnimationConfigBuilder::new()
            .duration(Duration::MAX / 2)
            .hold(Duration::from_secs(2))
            .easing(Easing::Linear)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                parameter: "duration",
                ..
            })
        ));
    }

    #[test]
    fn cycle_length_saturates_for_hand_built_configs() {
        let config = AnimationConfig {
            duration: Duration::MAX,
            hold: Duration::from_secs(1),
            easing: Easing::Linear,
        };
        assert_eq!(config.cycle_length(), Duration::MAX);
        assert_eq!(checked_cycle_length(Duration::MAX, Duration::ZERO), None);
        assert_eq!(
            checked_cycle_length(Duration::from_secs(2), Duration::from_secs(1)),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn session_builder_validates_tolerance() {
        let base = || SessionConfigBuilder::new().animation(AnimationConfig::default());
        assert!(base().tolerance(0.01).build().is_ok());
        assert!(base().tolerance(0.0).build().is_ok());
        assert!(matches!(
            base().tolerance(-1.0).build(),
            Err(ConfigError::InvalidValue { parameter: "tolerance", .. })
        ));
        assert!(base().tolerance(f64::NAN).build().is_err());
        assert_eq!(
            base().build(),
            Err(ConfigError::MissingParameter("tolerance"))
        );
    }

    #[test]
    fn session_builder_requires_animation() {
        let result = SessionConfigBuilder::new().tolerance(0.1).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("animation")));
    }
}
