use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("grid half-extent must be positive, got {0}")]
    EmptyGrid(i32),
    #[error("grid spacing must be a positive finite number, got {0}")]
    InvalidSpacing(f32),
}
