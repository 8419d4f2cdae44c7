// Rendering-side data
//
// Only sprite state lives here; drawing is done by whatever host owns the window.

pub mod sprite;

pub use sprite::{Sprite, SpriteFlip};
