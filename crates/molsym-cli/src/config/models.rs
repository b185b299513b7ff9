use molsym::engine::config::SessionConfig;

pub struct AppConfig {
    pub session: SessionConfig,
    pub fps: f64,
}
