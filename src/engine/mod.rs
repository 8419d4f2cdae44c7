// Engine modules: frame clock, sprite data, animation

pub mod animation;
pub mod game_loop;
pub mod renderer;
