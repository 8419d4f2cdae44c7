// Animation system
//
// - `animator`: named bool flags and one-shot triggers driving state selection
// - `clip`: frame-based clip playback

pub mod animator;
pub mod clip;

pub use animator::{AnimationGraph, Animator, ParameterKind};
pub use clip::{AnimationClip, ClipPlayer};

/// Animator parameter errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimatorError {
    #[error("Animator parameter does not exist: {0}")]
    UnknownParameter(String),

    #[error("Animator parameter {name} is a {actual}, expected a {expected}")]
    WrongKind {
        name: String,
        expected: ParameterKind,
        actual: ParameterKind,
    },
}
