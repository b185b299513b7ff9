use super::{default_axis, load_molecule};
use crate::cli::AnimateArgs;
use crate::config::builder::{ConfigOverrides, build_config};
use crate::error::{CliError, Result};
use crate::utils::parser;
use crate::utils::progress::CliProgressHandler;
use molsym::core::io::trajectory::TrajectoryWriter;
use molsym::engine::progress::ProgressReporter;
use molsym::workflows;
use std::path::Path;
use tracing::info;

pub fn run(args: AnimateArgs, config_path: Option<&Path>, set_values: &[String]) -> Result<()> {
    let overrides = ConfigOverrides {
        duration_secs: args.duration,
        hold_secs: args.hold,
        easing: args.easing.clone(),
        fps: args.fps,
        tolerance: None,
    };
    let app_config = build_config(config_path, set_values, &overrides)?;
    let molecule = load_molecule(&args.source)?;
    let op = parser::parse_operation(&args.op, default_axis(&molecule))
        .map_err(|e| CliError::Argument(e.to_string()))?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Animating {} on {} ({} easing, {} fps)...",
        op.symbol(),
        molecule.name(),
        app_config.session.animation.easing,
        app_config.fps
    );
    let frames = workflows::animate::run(
        &molecule,
        &op,
        &app_config.session.animation,
        app_config.fps,
        &reporter,
    )?;

    info!("Writing {} frame(s) to {:?}", frames.len(), &args.output);
    let to_file_error = |e: molsym::core::io::trajectory::TrajectoryError| CliError::FileParsing {
        path: args.output.clone(),
        source: e.into(),
    };
    let mut writer = TrajectoryWriter::create(&args.output).map_err(to_file_error)?;
    for frame in &frames {
        writer
            .write_frame(
                frame.elapsed.as_secs_f64(),
                frame.phase.as_str(),
                molecule.atoms(),
                &frame.positions,
            )
            .map_err(to_file_error)?;
    }
    let written = writer.frames_written();
    writer.finish().map_err(to_file_error)?;

    println!(
        "✓ {} frame(s) written to: {}",
        written,
        args.output.display()
    );
    Ok(())
}
