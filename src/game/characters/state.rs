// Character animation state machine
//
// Reads the animator parameters written by the adapter and picks the clip to show.

use log::debug;

use crate::engine::animation::{AnimationClip, AnimationGraph, Animator, ClipPlayer};

use super::character_animation::AnimationParams;

/// Visual state of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    /// Standing still on ground
    #[default]
    Idle,
    /// Moving horizontally on ground
    Run,
    /// In the air after a jump
    Jump,
    /// Touching down after a jump
    Land,
}

impl AnimationState {
    pub fn clip_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Run => "run",
            Self::Jump => "jump",
            Self::Land => "land",
        }
    }
}

/// Standard clip set, one clip per state
pub fn standard_clips() -> ClipPlayer {
    ClipPlayer::new()
        .with_clip(AnimationClip::looping("idle", 4, 8.0))
        .with_clip(AnimationClip::looping("run", 6, 12.0))
        .with_clip(AnimationClip::looping("jump", 2, 10.0))
        .with_clip(AnimationClip::one_shot("land", 3, 15.0))
}

#[derive(Debug)]
pub struct AnimationStateMachine {
    current_state: AnimationState,
    /// Time spent in the current state
    state_time: f32,
    player: ClipPlayer,
    params: AnimationParams,
}

impl Default for AnimationStateMachine {
    fn default() -> Self {
        Self::new(standard_clips(), AnimationParams::default())
    }
}

impl AnimationStateMachine {
    pub fn new(player: ClipPlayer, params: AnimationParams) -> Self {
        let mut machine = Self {
            current_state: AnimationState::Idle,
            state_time: 0.0,
            player,
            params,
        };
        machine.player.play(AnimationState::Idle.clip_name());
        machine
    }

    pub fn state(&self) -> AnimationState {
        self.current_state
    }

    pub fn player(&self) -> &ClipPlayer {
        &self.player
    }

    /// Pick the state for this frame and advance its clip
    pub fn update(&mut self, dt: f32, animator: &mut Animator) {
        if animator.consume_trigger(&self.params.jump_complete) {
            self.enter(AnimationState::Land, true);
        } else if animator.get_bool(&self.params.jumping) {
            // A new jump cuts the landing short
            self.enter(AnimationState::Jump, false);
        } else if self.current_state == AnimationState::Land && !self.player.is_finished() {
            // Landing plays through before running or idling
        } else if animator.get_bool(&self.params.moving) {
            self.enter(AnimationState::Run, false);
        } else {
            self.enter(AnimationState::Idle, false);
        }

        self.state_time += dt;
        self.player.update(dt);
    }

    fn enter(&mut self, state: AnimationState, restart: bool) {
        if self.current_state == state && !restart {
            return;
        }

        debug!(
            "Animation {:?} -> {:?} after {:.2}s",
            self.current_state, state, self.state_time
        );
        self.current_state = state;
        self.state_time = 0.0;
        self.player.play_from_start(state.clip_name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn setup() -> (AnimationStateMachine, Animator) {
        let animator = AnimationParams::default().animator();
        (AnimationStateMachine::default(), animator)
    }

    #[test]
    fn test_initial_state() {
        let (sm, _) = setup();
        assert_eq!(sm.state(), AnimationState::Idle);
        assert_eq!(
            sm.player().current_clip().map(|c| c.name.as_str()),
            Some("idle")
        );
    }

    #[test]
    fn test_moving_runs() {
        let (mut sm, mut animator) = setup();
        animator.set_bool("move", true);
        sm.update(DT, &mut animator);

        assert_eq!(sm.state(), AnimationState::Run);
        assert_eq!(
            sm.player().current_clip().map(|c| c.name.as_str()),
            Some("run")
        );
    }

    #[test]
    fn test_jump_beats_run() {
        let (mut sm, mut animator) = setup();
        animator.set_bool("move", true);
        animator.set_bool("jump", true);
        sm.update(DT, &mut animator);

        assert_eq!(sm.state(), AnimationState::Jump);
    }

    #[test]
    fn test_land_plays_through() {
        let (mut sm, mut animator) = setup();
        animator.set_bool("jump", true);
        sm.update(DT, &mut animator);

        animator.set_bool("jump", false);
        animator.set_trigger("jumpcomplete");
        sm.update(DT, &mut animator);
        assert_eq!(sm.state(), AnimationState::Land);
        assert!(!animator.consume_trigger("jumpcomplete"));

        // Still landing a few frames later, even though nothing is set
        sm.update(DT, &mut animator);
        assert_eq!(sm.state(), AnimationState::Land);

        // 3 frames at 15 fps
        for _ in 0..15 {
            sm.update(DT, &mut animator);
        }
        assert_eq!(sm.state(), AnimationState::Idle);
    }

    #[test]
    fn test_land_into_run() {
        let (mut sm, mut animator) = setup();
        animator.set_trigger("jumpcomplete");
        animator.set_bool("move", true);
        sm.update(DT, &mut animator);
        assert_eq!(sm.state(), AnimationState::Land);

        for _ in 0..15 {
            sm.update(DT, &mut animator);
        }
        assert_eq!(sm.state(), AnimationState::Run);
    }

    #[test]
    fn test_jump_interrupts_landing() {
        let (mut sm, mut animator) = setup();
        animator.set_trigger("jumpcomplete");
        sm.update(DT, &mut animator);
        assert_eq!(sm.state(), AnimationState::Land);

        animator.set_bool("jump", true);
        sm.update(DT, &mut animator);
        assert_eq!(sm.state(), AnimationState::Jump);
        assert_eq!(
            sm.player().current_clip().map(|c| c.name.as_str()),
            Some("jump")
        );
    }

    #[test]
    fn test_same_state_keeps_clip_progress() {
        let (mut sm, mut animator) = setup();
        animator.set_bool("move", true);
        for _ in 0..10 {
            sm.update(DT, &mut animator);
        }
        assert!(sm.player().current_frame() > 0);
    }

    #[test]
    fn test_clip_names() {
        assert_eq!(AnimationState::Idle.clip_name(), "idle");
        assert_eq!(AnimationState::Run.clip_name(), "run");
        assert_eq!(AnimationState::Jump.clip_name(), "jump");
        assert_eq!(AnimationState::Land.clip_name(), "land");
    }
}
