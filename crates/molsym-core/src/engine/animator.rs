use super::config::{AnimationConfig, checked_cycle_length};
use super::easing::Easing;
use super::error::EngineError;
use super::state::{AnimationId, AnimationPhase, AnimationState};
use crate::core::utils::geometry::lerp_point;
use nalgebra::Point3;
use std::time::Duration;
use tracing::{debug, trace};

/// Drives one symmetry animation at a time.
///
/// A cycle runs `Idle → Forward → Holding → Reverse → Idle`. The host calls
/// [`Animator::sample`] once per frame with the time elapsed since
/// [`Animator::start`]; the animator never keeps a clock of its own.
///
/// Starting a new animation supersedes the one in flight immediately. There
/// is no queue.
#[derive(Debug, Default)]
pub struct Animator {
    state: Option<AnimationState>,
    generation: u64,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts animating from `original` to `transformed` and back.
    ///
    /// Any animation already in flight is cancelled first.
    ///
    /// # Errors
    ///
    /// * [`EngineError::LengthMismatch`] if the configurations differ in size.
    /// * [`EngineError::InvalidDuration`] if `duration` is zero or the whole
    ///   cycle does not fit in a [`Duration`].
    ///
    /// On error the animation in flight, if any, keeps running.
    pub fn start(
        &mut self,
        original: &[Point3<f64>],
        transformed: &[Point3<f64>],
        duration: Duration,
        hold: Duration,
        easing: Easing,
    ) -> Result<AnimationId, EngineError> {
        if original.len() != transformed.len() {
            return Err(EngineError::LengthMismatch {
                original: original.len(),
                transformed: transformed.len(),
            });
        }
        if duration.is_zero() {
            return Err(EngineError::InvalidDuration(
                "forward duration must be greater than zero".to_string(),
            ));
        }
        let cycle_end = checked_cycle_length(duration, hold).ok_or_else(|| {
            EngineError::InvalidDuration(format!(
                "cycle of {:?} forward and {:?} hold overflows",
                duration, hold
            ))
        })?;

        self.cancel();
        self.generation += 1;
        let id = AnimationId(self.generation);
        self.state = Some(AnimationState {
            id,
            phase: AnimationPhase::Forward,
            progress: 0.0,
            original: original.to_vec(),
            target: transformed.to_vec(),
            duration,
            hold,
            easing,
            cycle_end,
        });
        debug!(
            "Started animation {} over {} atoms ({:?} forward, {:?} hold, {}).",
            id,
            original.len(),
            duration,
            hold,
            easing
        );
        Ok(id)
    }

    pub fn start_with(
        &mut self,
        original: &[Point3<f64>],
        transformed: &[Point3<f64>],
        config: &AnimationConfig,
    ) -> Result<AnimationId, EngineError> {
        self.start(
            original,
            transformed,
            config.duration,
            config.hold,
            config.easing,
        )
    }

    /// Positions at `elapsed` time since the current animation started.
    ///
    /// * `[0, d]`: eased interpolation from original to transformed
    /// * `(d, d + h]`: the transformed configuration
    /// * `(d + h, 2d + h)`: eased interpolation back to the original
    /// * `≥ 2d + h`: the original configuration; the animator becomes idle
    ///
    /// Returns `None` when no animation is in flight.
    pub fn sample(&mut self, elapsed: Duration) -> Option<Vec<Point3<f64>>> {
        let state = self.state.as_mut()?;
        let d = state.duration;
        let forward_end = d;
        let cycle_end = state.cycle_end;
        let hold_end = cycle_end.saturating_sub(d);

        state.progress = (elapsed.as_secs_f64() / cycle_end.as_secs_f64()).min(1.0);

        let (phase, positions) = if elapsed.is_zero() {
            (AnimationPhase::Forward, state.original.clone())
        } else if elapsed < forward_end {
            let t = state.easing.apply(elapsed.as_secs_f64() / d.as_secs_f64());
            (
                AnimationPhase::Forward,
                interpolate(&state.original, &state.target, t),
            )
        } else if elapsed <= hold_end {
            let phase = if elapsed == forward_end {
                AnimationPhase::Forward
            } else {
                AnimationPhase::Holding
            };
            (phase, state.target.clone())
        } else if elapsed < cycle_end {
            let t = state
                .easing
                .apply(elapsed.saturating_sub(hold_end).as_secs_f64() / d.as_secs_f64());
            (
                AnimationPhase::Reverse,
                interpolate(&state.target, &state.original, t),
            )
        } else {
            let id = state.id;
            let original = std::mem::take(&mut state.original);
            self.state = None;
            debug!("Animation {} completed.", id);
            return Some(original);
        };

        if phase != state.phase {
            trace!("Animation {} entered {} phase.", state.id, phase);
            state.phase = phase;
        }
        Some(positions)
    }

    /// Drops the animation in flight, if any. The next frame shows the base
    /// geometry.
    pub fn cancel(&mut self) {
        if let Some(state) = self.state.take() {
            debug!(
                "Cancelled animation {} during {} phase.",
                state.id, state.phase
            );
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.state
            .as_ref()
            .map_or(AnimationPhase::Idle, |s| s.phase)
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Number of animations started so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current(&self) -> Option<AnimationId> {
        self.state.as_ref().map(|s| s.id)
    }

    pub fn state(&self) -> Option<&AnimationState> {
        self.state.as_ref()
    }
}

fn interpolate(from: &[Point3<f64>], to: &[Point3<f64>], t: f64) -> Vec<Point3<f64>> {
    from.iter()
        .zip(to)
        .map(|(a, b)| lerp_point(a, b, t))
        .collect()
}
