// Character animation adapter
//
// Turns movement notifications into sprite flips and animator parameter writes.

use crate::engine::animation::{AnimationGraph, Animator, AnimatorError, ParameterKind};
use crate::engine::renderer::SpriteFlip;

use super::controller::MovementListener;

/// Animator parameter names the adapter writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationParams {
    /// Bool flag, true while walking
    pub moving: String,
    /// Bool flag, true between jump and landing
    pub jumping: String,
    /// Trigger fired on landing from a jump
    pub jump_complete: String,
}

pub const DEFAULT_MOVING: &str = "move";
pub const DEFAULT_JUMPING: &str = "jump";
pub const DEFAULT_JUMP_COMPLETE: &str = "jumpcomplete";

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            moving: DEFAULT_MOVING.to_string(),
            jumping: DEFAULT_JUMPING.to_string(),
            jump_complete: DEFAULT_JUMP_COMPLETE.to_string(),
        }
    }
}

impl AnimationParams {
    /// An animator with exactly these parameters declared
    pub fn animator(&self) -> Animator {
        Animator::new()
            .with_bool(&self.moving, false)
            .with_bool(&self.jumping, false)
            .with_trigger(&self.jump_complete)
    }

    /// Check that an animator declares every parameter with the right kind
    pub fn validate(&self, animator: &Animator) -> Result<(), AnimatorError> {
        animator.require(&self.moving, ParameterKind::Bool)?;
        animator.require(&self.jumping, ParameterKind::Bool)?;
        animator.require(&self.jump_complete, ParameterKind::Trigger)?;
        Ok(())
    }
}

/// Forwards movement notifications to a sprite and an animation graph.
///
/// Both collaborators are handed in at construction, either owned or as
/// `&mut` borrows, so every handler can rely on them being present.
#[derive(Debug)]
pub struct CharacterAnimation<S: SpriteFlip, A: AnimationGraph> {
    sprite: S,
    graph: A,
    params: AnimationParams,
}

impl<S: SpriteFlip, A: AnimationGraph> CharacterAnimation<S, A> {
    /// Adapter using the default parameter names
    #[allow(dead_code)]
    pub fn new(sprite: S, graph: A) -> Self {
        Self::with_params(sprite, graph, AnimationParams::default())
    }

    pub fn with_params(sprite: S, graph: A, params: AnimationParams) -> Self {
        Self {
            sprite,
            graph,
            params,
        }
    }

    /// Started or kept moving. `direction` is -1 for left, 1 for right.
    pub fn on_move(&mut self, direction: i32) {
        self.graph.set_bool(&self.params.moving, true);
        self.sprite.set_flip_x(direction == -1);
    }

    pub fn on_idle(&mut self) {
        self.graph.set_bool(&self.params.moving, false);
    }

    pub fn on_jump(&mut self) {
        self.graph.set_bool(&self.params.jumping, true);
    }

    /// Touched ground. Only a landing from a jump completes it; repeats are no-ops.
    pub fn on_ground(&mut self) {
        if self.graph.get_bool(&self.params.jumping) {
            self.graph.set_trigger(&self.params.jump_complete);
            self.graph.set_bool(&self.params.jumping, false);
        }
    }

    pub fn sprite(&self) -> &S {
        &self.sprite
    }

    pub fn graph(&self) -> &A {
        &self.graph
    }

    pub fn sprite_mut(&mut self) -> &mut S {
        &mut self.sprite
    }

    pub fn graph_mut(&mut self) -> &mut A {
        &mut self.graph
    }

    pub fn params(&self) -> &AnimationParams {
        &self.params
    }
}

impl<S: SpriteFlip, A: AnimationGraph> MovementListener for CharacterAnimation<S, A> {
    fn on_move(&mut self, direction: i32) {
        CharacterAnimation::on_move(self, direction);
    }

    fn on_idle(&mut self) {
        CharacterAnimation::on_idle(self);
    }

    fn on_jump(&mut self) {
        CharacterAnimation::on_jump(self);
    }

    fn on_ground(&mut self) {
        CharacterAnimation::on_ground(self);
    }
}
