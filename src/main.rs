use std::time::Duration;

use anyhow::Result;
use glam::Vec2;
use log::{debug, info};

mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::renderer::SpriteFlip;
use game::characters::{AnimationParams, Character, MoveInput, MovementStats};

/// Simulated host frame length (a 50 Hz display)
const FRAME_TIME: Duration = Duration::from_millis(20);

/// What the script does for one segment
enum Action {
    /// Hold an input for this many fixed steps
    Hold(MoveInput, usize),
    /// Stop the clock for this many host frames
    Pause(usize),
    /// Put the character back at a position
    Respawn(Vec2),
}

struct Segment {
    label: &'static str,
    action: Action,
}

impl Segment {
    fn new(label: &'static str, action: Action) -> Self {
        Self { label, action }
    }
}

fn script() -> Vec<Segment> {
    vec![
        Segment::new("walk right", Action::Hold(MoveInput::walk(1.0), 45)),
        Segment::new("walk left", Action::Hold(MoveInput::walk(-1.0), 45)),
        Segment::new("stop", Action::Hold(MoveInput::idle(), 20)),
        Segment::new("jump", Action::Hold(MoveInput::jump(), 1)),
        Segment::new("airborne", Action::Hold(MoveInput::walk(-1.0), 20)),
        Segment::new("pause", Action::Pause(10)),
        Segment::new("airborne", Action::Hold(MoveInput::walk(-1.0), 40)),
        Segment::new("rest", Action::Hold(MoveInput::idle(), 30)),
        Segment::new("jump", Action::Hold(MoveInput::jump(), 1)),
        Segment::new("respawn", Action::Respawn(Vec2::new(0.0, 0.0))),
        Segment::new("rest", Action::Hold(MoveInput::idle(), 30)),
    ]
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting character animation demo...");

    let stats = MovementStats::default();
    info!(
        "Jump reaches {:.2} units and lasts {:.2}s",
        stats.jump_height(),
        stats.airtime()
    );

    let params = AnimationParams::default();
    let animator = params.animator();
    let mut character = Character::with_animator(
        0,
        "Player",
        stats,
        Vec2::new(0.0, 2.0),
        animator,
        params,
    )?;

    let mut game_loop = GameLoop::new();
    let mut last_state = character.animation_state();
    // Fixed updates granted by the clock and not yet run
    let mut pending = 0;

    for segment in script() {
        info!("Input: {}", segment.label);

        match segment.action {
            Action::Hold(input, steps) => {
                for _ in 0..steps {
                    while pending == 0 {
                        pending = game_loop.advance(FRAME_TIME);
                        debug!(
                            "Frame {}: {} updates, alpha {:.2}, frame {} of {:?}",
                            game_loop.frame_count(),
                            pending,
                            game_loop.alpha(),
                            character.current_frame(),
                            character.animation_state()
                        );
                    }
                    pending -= 1;

                    character.update(game_loop.fixed_timestep(), &input);

                    let state = character.animation_state();
                    if state != last_state {
                        info!(
                            "Animation {:?} -> {:?} at {:?} (velocity {:?}, grounded: {}, flip_x: {})",
                            last_state,
                            state,
                            character.position(),
                            character.velocity(),
                            character.is_grounded(),
                            character.sprite().flip_x()
                        );
                        last_state = state;
                    }
                }
            }
            Action::Pause(frames) => {
                game_loop.pause();
                for _ in 0..frames {
                    game_loop.advance(FRAME_TIME);
                }
                debug!(
                    "Clock paused: {}, sprite at {:?}",
                    game_loop.is_paused(),
                    character.sprite().position
                );
                game_loop.resume();
            }
            Action::Respawn(position) => character.respawn(position),
        }
    }

    let animator = character.animator();
    info!(
        "{} #{} finished after {:?} simulated ({} frames, {} updates): {} landing(s), facing {}",
        character.name,
        character.id,
        game_loop.elapsed(),
        game_loop.frame_count(),
        game_loop.update_count(),
        animator.fire_count(&character.params().jump_complete),
        if character.sprite().flip_x() { "left" } else { "right" }
    );

    Ok(())
}
