// Movement tuning for the player character

/// Movement constants used by the controller
#[derive(Debug, Clone)]
pub struct MovementStats {
    /// Horizontal speed while input is held (units/second)
    pub move_speed: f32,
    /// Upward velocity applied on jump
    pub jump_force: f32,
    /// Downward acceleration (units/second²)
    pub gravity: f32,
    /// Terminal fall speed
    pub max_fall_speed: f32,
    /// Horizontal control multiplier while airborne (0.0 = none, 1.0 = full)
    pub air_control: f32,
    /// Input magnitude below which the stick counts as released
    pub input_deadzone: f32,
    /// Height of the floor surface
    pub ground_level: f32,

    // Dimensions (for the sprite)
    /// Character width in world units
    pub width: f32,
    /// Character height in world units
    pub height: f32,
}

pub const BASE_STATS: MovementStats = MovementStats {
    move_speed: 6.0,
    jump_force: 12.0,
    gravity: 30.0,
    max_fall_speed: 20.0,
    air_control: 0.8,
    input_deadzone: 0.1,
    ground_level: 0.0,

    width: 1.0,
    height: 2.0,
};

impl Default for MovementStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl MovementStats {
    /// Seconds from take-off to landing on flat ground
    pub fn airtime(&self) -> f32 {
        2.0 * self.jump_force / self.gravity
    }

    /// Apex of a jump above the take-off point
    pub fn jump_height(&self) -> f32 {
        self.jump_force * self.jump_force / (2.0 * self.gravity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_stats() {
        let stats = MovementStats::default();
        assert_eq!(stats.move_speed, BASE_STATS.move_speed);
        assert_eq!(stats.ground_level, 0.0);
        assert!(stats.input_deadzone > 0.0);
    }

    #[test]
    fn test_jump_shape() {
        let stats = MovementStats::default();
        assert_relative_eq!(stats.airtime(), 0.8);
        assert_relative_eq!(stats.jump_height(), 2.4);
    }
}
