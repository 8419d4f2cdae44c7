// Character entity: body, sprite and animation wired together

use glam::Vec2;
use log::info;

use crate::engine::animation::{Animator, AnimatorError};
use crate::engine::renderer::Sprite;

use super::character_animation::{AnimationParams, CharacterAnimation};
use super::controller::{MoveInput, MovementController};
use super::state::{standard_clips, AnimationState, AnimationStateMachine};
use super::stats::MovementStats;

/// Unique identifier for a character
pub type CharacterId = u32;

/// A player-controlled character
#[derive(Debug)]
pub struct Character {
    pub id: CharacterId,
    /// Display name
    pub name: String,
    controller: MovementController,
    /// Owns the sprite and animator and receives the controller's notifications
    animation: CharacterAnimation<Sprite, Animator>,
    states: AnimationStateMachine,
}

impl Character {
    /// Create a character around an existing animator, checking it declares `params`
    pub fn with_animator(
        id: CharacterId,
        name: &str,
        stats: MovementStats,
        spawn: Vec2,
        animator: Animator,
        params: AnimationParams,
    ) -> Result<Self, AnimatorError> {
        params.validate(&animator)?;

        let sprite = Sprite::new(spawn, Vec2::new(stats.width, stats.height));
        let states = AnimationStateMachine::new(standard_clips(), params.clone());
        let controller = MovementController::new(stats, spawn);

        info!("Spawned character {} ({}) at {:?}", id, name, spawn);

        let mut character = Self {
            id,
            name: name.to_string(),
            controller,
            animation: CharacterAnimation::with_params(sprite, animator, params),
            states,
        };
        character.sync_sprite();
        Ok(character)
    }

    /// Run one fixed step: movement, then animation
    pub fn update(&mut self, dt: f32, input: &MoveInput) {
        self.controller.update(dt, input, &mut self.animation);
        self.states.update(dt, self.animation.graph_mut());
        self.sync_sprite();
    }

    /// Sprite is centred on the body, whose position is at the feet
    fn sync_sprite(&mut self) {
        let feet = self.controller.position();
        let sprite = self.animation.sprite_mut();
        sprite.position = feet + Vec2::new(0.0, sprite.size.y / 2.0);
    }

    pub fn sprite(&self) -> &Sprite {
        self.animation.sprite()
    }

    pub fn animator(&self) -> &Animator {
        self.animation.graph()
    }

    pub fn params(&self) -> &AnimationParams {
        self.animation.params()
    }

    pub fn animation_state(&self) -> AnimationState {
        self.states.state()
    }

    /// Clip frame to draw this frame
    pub fn current_frame(&self) -> usize {
        self.states.player().current_frame()
    }

    pub fn position(&self) -> Vec2 {
        self.controller.position()
    }

    pub fn velocity(&self) -> Vec2 {
        self.controller.velocity()
    }

    /// Put the character back at `position`. Landing is reported on a later step.
    pub fn respawn(&mut self, position: Vec2) {
        info!("Respawning {} at {:?}", self.name, position);
        self.controller.teleport(position);
        self.sync_sprite();
    }

    pub fn is_grounded(&self) -> bool {
        self.controller.is_grounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::animation::AnimationGraph;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    fn spawn_at(spawn: Vec2) -> Character {
        let params = AnimationParams::default();
        Character::with_animator(
            0,
            "Samus",
            MovementStats::default(),
            spawn,
            params.animator(),
            params,
        )
        .unwrap()
    }

    fn character() -> Character {
        spawn_at(Vec2::ZERO)
    }

    fn step(character: &mut Character, input: MoveInput, steps: usize) {
        for _ in 0..steps {
            character.update(DT, &input);
        }
    }

    #[test]
    fn test_spawn_idle() {
        let c = character();
        assert_eq!(c.animation_state(), AnimationState::Idle);
        assert!(c.is_grounded());
        assert!(!c.sprite().flip_x);
        assert_relative_eq!(c.sprite().position.y, 1.0);
    }

    #[test]
    fn test_walk_left_flips_sprite() {
        let mut c = character();
        step(&mut c, MoveInput::walk(-1.0), 10);

        assert!(c.sprite().flip_x);
        assert!(c.animator().get_bool("move"));
        assert_eq!(c.animation_state(), AnimationState::Run);
        assert!(c.position().x < 0.0);
        assert_relative_eq!(c.sprite().position.x, c.position().x);
    }

    #[test]
    fn test_turn_around_unflips() {
        let mut c = character();
        step(&mut c, MoveInput::walk(-1.0), 5);
        step(&mut c, MoveInput::walk(1.0), 5);
        assert!(!c.sprite().flip_x);
    }

    #[test]
    fn test_stop_goes_idle() {
        let mut c = character();
        step(&mut c, MoveInput::walk(1.0), 5);
        step(&mut c, MoveInput::idle(), 1);

        assert!(!c.animator().get_bool("move"));
        assert_eq!(c.animation_state(), AnimationState::Idle);
    }

    #[test]
    fn test_jump_then_land_fires_once() {
        let mut c = character();
        step(&mut c, MoveInput::jump(), 1);
        assert!(c.animator().get_bool("jump"));
        assert_eq!(c.animation_state(), AnimationState::Jump);

        let mut steps = 0;
        while !c.is_grounded() && steps < 600 {
            step(&mut c, MoveInput::idle(), 1);
            steps += 1;
        }

        assert!(c.is_grounded());
        assert!(!c.animator().get_bool("jump"));
        assert_eq!(c.animator().fire_count("jumpcomplete"), 1);
        assert_eq!(c.animation_state(), AnimationState::Land);

        // Standing around afterwards never fires it again
        step(&mut c, MoveInput::idle(), 60);
        assert_eq!(c.animator().fire_count("jumpcomplete"), 1);
        assert_eq!(c.animation_state(), AnimationState::Idle);
    }

    #[test]
    fn test_falling_spawn_lands_quietly() {
        let mut c = spawn_at(Vec2::new(0.0, 4.0));
        step(&mut c, MoveInput::idle(), 120);

        assert!(c.is_grounded());
        assert_eq!(c.animator().fire_count("jumpcomplete"), 0);
        assert_eq!(c.animation_state(), AnimationState::Idle);
    }

    #[test]
    fn test_respawn_mid_jump_lands() {
        let mut c = character();
        step(&mut c, MoveInput::jump(), 1);
        step(&mut c, MoveInput::idle(), 5);

        c.respawn(Vec2::new(5.0, 0.0));
        assert_relative_eq!(c.sprite().position.x, 5.0);
        step(&mut c, MoveInput::idle(), 1);

        assert!(c.is_grounded());
        assert!(!c.animator().get_bool("jump"));
        assert_eq!(c.animator().fire_count("jumpcomplete"), 1);
        assert_eq!(c.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_with_animator_validates() {
        let params = AnimationParams::default();
        let incomplete = Animator::new().with_bool("move", false);
        let result = Character::with_animator(
            2,
            "Kraid",
            MovementStats::default(),
            Vec2::ZERO,
            incomplete,
            params.clone(),
        );
        assert!(matches!(result, Err(AnimatorError::UnknownParameter(_))));

        let result = Character::with_animator(
            2,
            "Kraid",
            MovementStats::default(),
            Vec2::ZERO,
            params.animator(),
            params,
        );
        assert!(result.is_ok());
    }
}
