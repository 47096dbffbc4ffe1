use painting::ValidationError;
use sketchpad_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid paint settings: {0}")]
    Settings(#[from] ValidationError),
    #[error("Window error: {0}")]
    Window(String),
}

impl From<minifb::Error> for AppError {
    fn from(err: minifb::Error) -> Self {
        AppError::Window(err.to_string())
    }
}
