//! Error types shared by the controller and the platform shells.

use thiserror::Error;

/// Recoverable failures of the graphics resource cycle.
///
/// None of these close the window. The frame is skipped and the next paint
/// retries resource creation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// The device-independent factory could not be created.
    #[error("failed to create graphics factory: {0}")]
    Factory(String),

    /// The render target could not be created for the window.
    #[error("failed to create render target: {0}")]
    CreateTarget(String),

    /// The solid-colour brush could not be created on the render target.
    #[error("failed to create brush: {0}")]
    CreateBrush(String),

    /// Resizing an existing render target failed.
    #[error("failed to resize render target: {0}")]
    Resize(String),

    /// End of draw reported that the device must be recreated.
    #[error("graphics device lost")]
    DeviceLost,

    /// End of draw failed for a reason other than device loss.
    #[error("draw batch failed: {0}")]
    Draw(String),
}

/// Failures that prevent the window from ever being shown.
#[derive(Error, Debug)]
pub enum StartupError {
    /// A platform service needed before window creation failed.
    #[error("platform call failed: {0}")]
    Platform(String),

    /// The window class was rejected.
    #[error("failed to register window class `{0}`")]
    RegisterClass(String),

    /// `CreateWindowEx` failed, including a refused `WM_CREATE`.
    #[error("failed to create window: {0}")]
    CreateWindow(String),

    /// The binary was built without a windowing backend for this host.
    #[error("no windowing backend available on this platform")]
    Unsupported,
}

pub type GraphicsResult<T> = std::result::Result<T, GraphicsError>;
