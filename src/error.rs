//! Error types for layout compilation.
//!
//! Hit-testing never fails (a miss is `None`); only compiling a frame can,
//! and only on bad configuration or a solver refusal.

/// Convenience result type used by the layout compiler.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors returned by [`compile`](crate::layout::compile) and friends.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    /// Viewport dimensions must be finite and non-negative.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    /// Solver unit scale must be finite and positive.
    #[error("invalid unit scale {0}")]
    InvalidUnitScale(f32),

    /// The flex solver rejected an operation.
    #[error("flex solver error: {0}")]
    Solver(#[from] taffy::TaffyError),
}
