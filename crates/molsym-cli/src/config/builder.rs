use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::error::{CliError, Result};
use molsym::engine::config::{AnimationConfigBuilder, SessionConfigBuilder};
use molsym::engine::easing::Easing;
use std::path::Path;
use std::time::Duration;

/// Values given directly as command-line flags. They take precedence over
/// everything else.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub duration_secs: Option<f64>,
    pub hold_secs: Option<f64>,
    pub easing: Option<String>,
    pub fps: Option<f64>,
    pub tolerance: Option<f64>,
}

pub fn build_config(
    config_path: Option<&Path>,
    set_values: &[String],
    overrides: &ConfigOverrides,
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let mut file_config = apply_set_values(file_config, set_values)?;

    let animation_file = file_config.animation.take().unwrap_or_default();
    let validation_file = file_config.validation.take().unwrap_or_default();

    let duration_secs = overrides
        .duration_secs
        .or(animation_file.duration_secs)
        .unwrap_or(defaults.duration_secs);
    let hold_secs = overrides
        .hold_secs
        .or(animation_file.hold_secs)
        .unwrap_or(defaults.hold_secs);
    let easing = match overrides.easing.as_ref().or(animation_file.easing.as_ref()) {
        Some(name) => name
            .parse::<Easing>()
            .map_err(|e| CliError::Config(e.to_string()))?,
        None => defaults.easing,
    };
    let fps = overrides
        .fps
        .or(animation_file.fps)
        .unwrap_or(defaults.fps);
    if !fps.is_finite() || fps <= 0.0 {
        return Err(CliError::Config(format!(
            "`animation.fps` must be a positive number, got {}",
            fps
        )));
    }
    let tolerance = overrides
        .tolerance
        .or(validation_file.tolerance)
        .unwrap_or(defaults.tolerance);

    let animation = AnimationConfigBuilder::new()
        .duration(seconds("animation.duration-secs", duration_secs)?)
        .hold(seconds("animation.hold-secs", hold_secs)?)
        .easing(easing)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let session = SessionConfigBuilder::new()
        .animation(animation)
        .tolerance(tolerance)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig { session, fps })
}

fn seconds(key: &str, value: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(value).map_err(|_| {
        CliError::Config(format!(
            "`{}` must be a non-negative number of seconds, got {}",
            key, value
        ))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let float = || -> Result<f64> {
            value_str.parse().map_err(|_| {
                CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
            })
        };

        match key {
            "animation.duration-secs" => {
                config
                    .animation
                    .get_or_insert_with(Default::default)
                    .duration_secs = Some(float()?);
            }
            "animation.hold-secs" => {
                config
                    .animation
                    .get_or_insert_with(Default::default)
                    .hold_secs = Some(float()?);
            }
            "animation.fps" => {
                config.animation.get_or_insert_with(Default::default).fps = Some(float()?);
            }
            "animation.easing" => {
                config.animation.get_or_insert_with(Default::default).easing =
                    Some(value_str.to_string());
            }
            "validation.tolerance" => {
                config
                    .validation
                    .get_or_insert_with(Default::default)
                    .tolerance = Some(float()?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
