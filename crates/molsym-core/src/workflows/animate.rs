use super::error::SessionError;
use super::session::{Frame, SymmetrySession};
use crate::core::models::molecule::Molecule;
use crate::core::symmetry::SymmetryOperation;
use crate::engine::config::{AnimationConfig, DEFAULT_TOLERANCE, SessionConfig};
use crate::engine::progress::{Progress, ProgressReporter};
use std::time::Duration;
use tracing::{info, instrument};

/// Upper bound on the number of frames one cycle may render.
pub const MAX_FRAMES: usize = 1_000_000;

/// Renders one full forward / hold / reverse cycle of `op` at `fps` frames
/// per second.
///
/// Frames are spaced `1 / fps` apart starting at zero. A final frame is
/// always emitted at the exact end of the cycle, so the last frame shows the
/// original configuration.
///
/// # Errors
///
/// * [`SessionError::InvalidFrameRate`] if `fps` is not a positive, finite
///   number, or would render more than [`MAX_FRAMES`] frames.
/// * [`SessionError::Symmetry`] if the operation's parameters are invalid.
/// * [`SessionError::Engine`] if the animation cannot be started.
#[instrument(skip_all, name = "animation_workflow", fields(molecule = molecule.name(), op = %op.symbol()))]
pub fn run(
    molecule: &Molecule,
    op: &SymmetryOperation,
    animation: &AnimationConfig,
    fps: f64,
    reporter: &ProgressReporter,
) -> Result<Vec<Frame>, SessionError> {
    if !fps.is_finite() || fps <= 0.0 {
        return Err(SessionError::InvalidFrameRate(fps));
    }

    let config = SessionConfig {
        animation: *animation,
        tolerance: DEFAULT_TOLERANCE,
    };
    let mut session = SymmetrySession::new(molecule.clone(), config);
    let outcome = session.perform(op)?;
    info!("{}", outcome.description);

    let cycle = animation.cycle_length();
    let step = 1.0 / fps;
    let frame_count = (cycle.as_secs_f64() * fps).ceil();
    if frame_count.is_nan() || frame_count >= MAX_FRAMES as f64 {
        return Err(SessionError::InvalidFrameRate(fps));
    }
    let regular_frames = frame_count as usize;

    reporter.report(Progress::PhaseStart {
        name: "Frame Rendering",
    });
    reporter.report(Progress::TaskStart {
        total_steps: regular_frames as u64 + 1,
    });

    let mut frames = Vec::with_capacity(regular_frames + 1);
    for i in 0..regular_frames {
        let elapsed = Duration::from_secs_f64(i as f64 * step).min(cycle);
        if elapsed >= cycle {
            break;
        }
        frames.push(session.tick(elapsed));
        reporter.report(Progress::TaskIncrement);
    }
    frames.push(session.tick(cycle));
    reporter.report(Progress::TaskIncrement);

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    info!(
        "Rendered {} frame(s) covering {:.2} s.",
        frames.len(),
        cycle.as_secs_f64()
    );
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::library;
    use crate::engine::easing::Easing;
    use crate::engine::error::EngineError;
    use crate::engine::state::AnimationPhase;
    use nalgebra::Vector3;

    fn short_config() -> AnimationConfig {
        AnimationConfig {
            duration: Duration::from_millis(1000),
            hold: Duration::from_millis(500),
            easing: Easing::CubicInOut,
        }
    }

    #[test]
    fn renders_full_cycle_ending_at_original() {
        let water = library::load("water").unwrap();
        let op = SymmetryOperation::rotation(Vector3::y(), 2);
        let frames = run(&water, &op, &short_config(), 10.0, &ProgressReporter::new()).unwrap();

        // 2.5 s at 10 fps, plus the closing frame.
        assert_eq!(frames.len(), 26);
        assert_eq!(frames[0].positions, water.atom_positions());
        assert_eq!(frames[0].phase, AnimationPhase::Forward);
        let last = frames.last().unwrap();
        assert_eq!(last.elapsed, Duration::from_millis(2500));
        assert_eq!(last.positions, water.atom_positions());
        assert_eq!(last.phase, AnimationPhase::Idle);
    }

    #[test]
    fn phases_appear_in_order() {
        let benzene = library::load("benzene").unwrap();
        let frames = run(
            &benzene,
            &SymmetryOperation::inversion(),
            &short_config(),
            8.0,
            &ProgressReporter::new(),
        )
        .unwrap();

        let mut phases: Vec<AnimationPhase> = frames.iter().map(|f| f.phase).collect();
        phases.dedup();
        assert_eq!(
            phases,
            vec![
                AnimationPhase::Forward,
                AnimationPhase::Holding,
                AnimationPhase::Reverse,
                AnimationPhase::Idle
            ]
        );
    }

    #[test]
    fn rejects_non_positive_frame_rate() {
        let water = library::load("water").unwrap();
        for fps in [0.0, -5.0, f64::NAN] {
            let result = run(
                &water,
                &SymmetryOperation::Identity,
                &short_config(),
                fps,
                &ProgressReporter::new(),
            );
            assert!(matches!(result, Err(SessionError::InvalidFrameRate(_))));
        }
    }

    #[test]
    fn rejects_frame_rate_that_renders_too_many_frames() {
        let water = library::load("water").unwrap();
        for fps in [1e300, f64::MAX, 1e6] {
            let result = run(
                &water,
                &SymmetryOperation::Identity,
                &AnimationConfig::default(),
                fps,
                &ProgressReporter::new(),
            );
            assert_eq!(result, Err(SessionError::InvalidFrameRate(fps)));
        }
    }

    #[test]
    fn rejects_zero_duration() {
        let water = library::load("water").unwrap();
        let config = AnimationConfig {
            duration: Duration::ZERO,
            ..short_config()
        };
        let result = run(
            &water,
            &SymmetryOperation::Identity,
            &config,
            30.0,
            &ProgressReporter::new(),
        );
        assert!(matches!(
            result,
            Err(SessionError::Engine(EngineError::InvalidDuration(_)))
        ));
    }

    #[test]
    fn reports_one_increment_per_frame() {
        let counter = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let sink = std::sync::Arc::clone(&counter);
        let reporter = ProgressReporter::with_callback(Box::new(move |e| {
            if e == Progress::TaskIncrement {
                sink.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            }
        }));
        let ammonia = library::load("ammonia").unwrap();
        let frames = run(
            &ammonia,
            &SymmetryOperation::rotation(Vector3::y(), 3),
            &short_config(),
            4.0,
            &reporter,
        )
        .unwrap();
        assert_eq!(
            counter.load(std::sync::atomic::Ordering::SeqCst),
            frames.len()
        );
    }
}
