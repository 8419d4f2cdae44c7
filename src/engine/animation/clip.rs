// Frame-based clip playback

use log::warn;

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Name of the clip (e.g., "idle", "run", "land")
    pub name: String,
    /// Number of frames in the clip
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the clip wraps back to frame 0
    pub looping: bool,
}

impl AnimationClip {
    /// `fps` below zero or zero is clamped to the slowest representable rate
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count: frame_count.max(1),
            frame_duration: 1.0 / fps.max(f32::EPSILON),
            looping,
        }
    }

    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    /// A clip that plays once and holds its last frame
    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }
}

/// Plays one clip at a time out of a small clip library
#[derive(Debug, Default)]
pub struct ClipPlayer {
    clips: Vec<AnimationClip>,
    current: Option<usize>,
    current_frame: usize,
    frame_timer: f32,
    finished: bool,
}

impl ClipPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clip, replacing any clip with the same name
    pub fn add_clip(&mut self, clip: AnimationClip) {
        match self.clips.iter().position(|c| c.name == clip.name) {
            Some(index) => self.clips[index] = clip,
            None => self.clips.push(clip),
        }
    }

    pub fn with_clip(mut self, clip: AnimationClip) -> Self {
        self.add_clip(clip);
        self
    }

    /// Switch to a clip. Does nothing if it is already playing.
    pub fn play(&mut self, name: &str) {
        if self.current_clip().map(|c| c.name.as_str()) != Some(name) {
            self.play_from_start(name);
        }
    }

    /// Restart a clip even if it is already playing
    pub fn play_from_start(&mut self, name: &str) {
        self.current = self.clips.iter().position(|c| c.name == name);
        if self.current.is_none() {
            warn!("No animation clip named {}", name);
        }
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;
    }

    /// Advance playback (called every frame)
    pub fn update(&mut self, dt: f32) {
        if self.finished {
            return;
        }
        let Some(clip) = self.current.map(|index| &self.clips[index]) else {
            return;
        };
        // The timer never drains on a zero, negative or NaN duration
        if clip.frame_duration.is_nan() || clip.frame_duration <= 0.0 {
            return;
        }

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = clip.frame_count - 1;
                    self.finished = true;
                    break;
                }
            }
        }
    }

    pub fn current_clip(&self) -> Option<&AnimationClip> {
        self.current.map(|index| &self.clips[index])
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// A one-shot clip that reached its last frame. Looping clips never finish.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
