use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Interpolation curve applied to normalized animation time.
///
/// Every curve maps 0 to exactly 0 and 1 to exactly 1, is monotonic, and
/// clamps its input to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Cubic ease-in-out: `4t³` for `t < 0.5`, else `1 − (−2t + 2)³ / 2`.
    #[default]
    CubicInOut,
    Linear,
    QuadInOut,
    SineInOut,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown easing '{0}' (expected one of: cubic-in-out, linear, quad-in-out, sine-in-out)")]
pub struct ParseEasingError(pub String);

impl Easing {
    pub const ALL: [Easing; 4] = [
        Self::CubicInOut,
        Self::Linear,
        Self::QuadInOut,
        Self::SineInOut,
    ];

    pub fn apply(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CubicInOut => "cubic-in-out",
            Self::Linear => "linear",
            Self::QuadInOut => "quad-in-out",
            Self::SineInOut => "sine-in-out",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Easing {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .find(|e| e.as_str() == needle)
            .copied()
            .ok_or_else(|| ParseEasingError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_curve_hits_endpoints_exactly() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{}", easing);
        }
    }

    #[test]
    fn input_is_clamped() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(-0.5), 0.0);
            assert_eq!(easing.apply(1.5), 1.0);
            assert_eq!(easing.apply(f64::NAN), 0.0);
        }
    }

    #[test]
    fn every_curve_is_monotonic() {
        for easing in Easing::ALL {
            let mut previous = 0.0;
            for step in 1..=200 {
                let value = easing.apply(step as f64 / 200.0);
                assert!(value >= previous, "{} decreases at step {}", easing, step);
                previous = value;
            }
        }
    }

    #[test]
    fn cubic_in_out_matches_reference_values() {
        let e = Easing::CubicInOut;
        assert!((e.apply(0.25) - 0.0625).abs() < 1e-12);
        assert!((e.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((e.apply(0.75) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn in_out_curves_are_symmetric_about_midpoint() {
        for easing in [Easing::CubicInOut, Easing::QuadInOut, Easing::SineInOut] {
            for t in [0.1, 0.2, 0.3, 0.45] {
                let sum = easing.apply(t) + easing.apply(1.0 - t);
                assert!((sum - 1.0).abs() < 1e-12, "{} at {}", easing, t);
            }
        }
    }

    #[test]
    fn parses_kebab_and_snake_case_names() {
        assert_eq!("cubic-in-out".parse::<Easing>(), Ok(Easing::CubicInOut));
        assert_eq!("Sine_In_Out".parse::<Easing>(), Ok(Easing::SineInOut));
        assert_eq!(" linear ".parse::<Easing>(), Ok(Easing::Linear));
        assert_eq!(
            "bounce".parse::<Easing>(),
            Err(ParseEasingError("bounce".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for easing in Easing::ALL {
            assert_eq!(easing.to_string().parse::<Easing>(), Ok(easing));
        }
    }
}
