// Character system
//
// This module contains everything related to the playable character:
// - Movement controller raising move/idle/jump/ground notifications
// - Animation adapter turning those into sprite flips and animator parameters
// - Animation state machine picking the clip from animator parameters
// - Character bundle wiring the pieces together

pub mod character;
pub mod character_animation;
pub mod controller;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use character::Character;
pub use character_animation::AnimationParams;
pub use controller::MoveInput;
pub use stats::MovementStats;

