// Platformer movement controller
//
// Integrates input, jump impulse and gravity against a flat floor, and tells a
// listener about movement changes as they happen.

use glam::Vec2;
use log::debug;

use super::stats::MovementStats;

/// Receives movement notifications from a controller.
///
/// Calls arrive synchronously, in the order they happen within a step.
pub trait MovementListener {
    /// Started moving or changed direction. `direction` is -1 or 1.
    fn on_move(&mut self, direction: i32);
    /// Horizontal input released
    fn on_idle(&mut self);
    /// Left the ground by jumping
    fn on_jump(&mut self);
    /// Made contact with the ground
    fn on_ground(&mut self);
}

impl<T: MovementListener + ?Sized> MovementListener for &mut T {
    fn on_move(&mut self, direction: i32) {
        (**self).on_move(direction);
    }

    fn on_idle(&mut self) {
        (**self).on_idle();
    }

    fn on_jump(&mut self) {
        (**self).on_jump();
    }

    fn on_ground(&mut self) {
        (**self).on_ground();
    }
}

/// Input for one fixed step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveInput {
    /// Horizontal axis (-1 to 1)
    pub horizontal: f32,
    /// Jump pressed this step
    pub jump: bool,
}

impl MoveInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn walk(horizontal: f32) -> Self {
        Self {
            horizontal,
            jump: false,
        }
    }

    pub fn jump() -> Self {
        Self {
            horizontal: 0.0,
            jump: true,
        }
    }
}

/// Kinematic character body
#[derive(Debug, Clone)]
pub struct MovementController {
    stats: MovementStats,
    position: Vec2,
    velocity: Vec2,
    grounded: bool,
    /// Direction last reported through `on_move`, None while idle
    move_direction: Option<i32>,
}

impl MovementController {
    pub fn new(stats: MovementStats, spawn: Vec2) -> Self {
        let grounded = spawn.y <= stats.ground_level;
        Self {
            position: Vec2::new(spawn.x, spawn.y.max(stats.ground_level)),
            velocity: Vec2::ZERO,
            grounded,
            move_direction: None,
            stats,
        }
    }

    /// Advance one fixed step, raising notifications on `listener`
    pub fn update<L: MovementListener + ?Sized>(
        &mut self,
        dt: f32,
        input: &MoveInput,
        listener: &mut L,
    ) {
        self.update_horizontal(input, listener);

        if input.jump && self.grounded {
            self.velocity.y = self.stats.jump_force;
            self.grounded = false;
            debug!("Jump at {:?}", self.position);
            listener.on_jump();
        }

        if !self.grounded {
            self.velocity.y =
                (self.velocity.y - self.stats.gravity * dt).max(-self.stats.max_fall_speed);
        }

        self.position += self.velocity * dt;

        if self.position.y <= self.stats.ground_level {
            self.position.y = self.stats.ground_level;
            self.velocity.y = self.velocity.y.max(0.0);
            if !self.grounded {
                self.grounded = true;
                debug!("Landed at {:?}", self.position);
                listener.on_ground();
            }
        }
    }

    fn update_horizontal<L: MovementListener + ?Sized>(
        &mut self,
        input: &MoveInput,
        listener: &mut L,
    ) {
        let axis = input.horizontal.clamp(-1.0, 1.0);

        if axis.abs() > self.stats.input_deadzone {
            let direction = if axis < 0.0 { -1 } else { 1 };
            let control = if self.grounded {
                1.0
            } else {
                self.stats.air_control
            };
            self.velocity.x = axis * self.stats.move_speed * control;

            if self.move_direction != Some(direction) {
                self.move_direction = Some(direction);
                listener.on_move(direction);
            }
        } else {
            // Air momentum carries until landing
            if self.grounded {
                self.velocity.x = 0.0;
            }
            if self.move_direction.take().is_some() {
                listener.on_idle();
            }
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Move the body, clearing velocity. Ground contact is re-evaluated next
    /// step, so a teleport onto the floor still reports `on_ground`.
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.grounded = false;
    }
}
