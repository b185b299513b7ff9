use molsym::engine::config::{DEFAULT_DURATION, DEFAULT_HOLD, DEFAULT_TOLERANCE};
use molsym::engine::easing::Easing;

pub struct DefaultsConfig {
    pub duration_secs: f64,
    pub hold_secs: f64,
    pub easing: Easing,
    pub fps: f64,
    pub tolerance: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION.as_secs_f64(),
            hold_secs: DEFAULT_HOLD.as_secs_f64(),
            easing: Easing::default(),
            fps: 30.0,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}
