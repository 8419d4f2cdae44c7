// Sprite data and the horizontal flip seam

use glam::Vec2;

/// Anything that can mirror a 2D visual horizontally
pub trait SpriteFlip {
    /// Set horizontal mirroring
    fn set_flip_x(&mut self, flip: bool);

    /// Current horizontal mirroring
    fn flip_x(&self) -> bool;
}

impl<T: SpriteFlip + ?Sized> SpriteFlip for &mut T {
    fn set_flip_x(&mut self, flip: bool) {
        (**self).set_flip_x(flip);
    }

    fn flip_x(&self) -> bool {
        (**self).flip_x()
    }
}

/// A 2D sprite for rendering
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Position in world space
    pub position: Vec2,
    /// Size in world units (width, height)
    pub size: Vec2,
    /// Mirror horizontally
    pub flip_x: bool,
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ONE)
    }
}

impl Sprite {
    /// Create a new, unflipped sprite
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            flip_x: false,
        }
    }
}

impl SpriteFlip for Sprite {
    fn set_flip_x(&mut self, flip: bool) {
        self.flip_x = flip;
    }

    fn flip_x(&self) -> bool {
        self.flip_x
    }
}
