use thiserror::Error;

/// Host-side failures. The canvas itself has no error surface; everything
/// that can go wrong lives at the window boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("window init failed: {0}")]
    WindowInit(String),
    #[error("window present failed: {0}")]
    Present(String),
}
