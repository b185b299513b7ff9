use super::easing::Easing;
use nalgebra::Point3;
use std::fmt;
use std::time::Duration;

/// Phase of the animation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationPhase {
    /// Nothing in flight; the renderer shows the base geometry.
    #[default]
    Idle,
    /// Interpolating from the original toward the transformed configuration.
    Forward,
    /// Showing the transformed configuration.
    Holding,
    /// Interpolating back toward the original configuration.
    Reverse,
}

impl AnimationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Forward => "forward",
            Self::Holding => "holding",
            Self::Reverse => "reverse",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl fmt::Display for AnimationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one started animation. Ids increase with every `start`, so a
/// stale id can be told apart from the animation currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub(crate) u64);

impl AnimationId {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The in-flight animation owned by an [`Animator`](super::animator::Animator).
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub id: AnimationId,
    pub phase: AnimationPhase,
    /// Fraction of the full forward / hold / reverse cycle already played,
    /// as of the last sample.
    pub progress: f64,
    pub original: Vec<Point3<f64>>,
    pub target: Vec<Point3<f64>>,
    pub duration: Duration,
    pub hold: Duration,
    pub easing: Easing,
    /// `2 * duration + hold`, checked when the animation started.
    pub(crate) cycle_end: Duration,
}

impl AnimationState {
    pub fn cycle_length(&self) -> Duration {
        self.cycle_end
    }
}
