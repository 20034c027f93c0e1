use glam::Vec3;

/// Character translation state. Velocity chases the target speed with a
/// constant per-tick smoothing factor, so a held key converges geometrically
/// and a released key decays the same way. Yaw changes take effect on the
/// same tick they are applied.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MotionState {
    velocity: f32,
    target_speed: f32,
    position: Vec3,
    yaw_radians: f32,
}

impl MotionState {
    pub(crate) fn set_target_speed(&mut self, target_speed: f32) {
        self.target_speed = target_speed;
    }

    pub(crate) fn apply_yaw_delta(&mut self, delta_radians: f32) {
        self.yaw_radians += delta_radians;
    }

    /// One fixed tick: ease velocity toward the target, then translate along
    /// the yaw-rotated local forward axis.
    pub(crate) fn integrate(&mut self, smoothing: f32) {
        self.velocity += (self.target_speed - self.velocity) * smoothing;
        let forward = Vec3::new(self.yaw_radians.sin(), 0.0, self.yaw_radians.cos());
        self.position += forward * self.velocity;
    }

    pub(crate) fn position(&self) -> Vec3 {
        self.position
    }

    pub(crate) fn yaw_radians(&self) -> f32 {
        self.yaw_radians
    }

    pub(crate) fn velocity(&self) -> f32 {
        self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const SMOOTHING: f32 = 0.3;

    #[test]
    fn velocity_gap_shrinks_geometrically() {
        let mut motion = MotionState::default();
        motion.set_target_speed(0.2);

        for tick in 1..=20 {
            motion.integrate(SMOOTHING);
            let expected_gap = 0.2 * (1.0 - SMOOTHING).powi(tick);
            let actual_gap = 0.2 - motion.velocity();
            assert!(
                (actual_gap - expected_gap).abs() < 1e-6,
                "tick {tick}: expected gap {expected_gap}, got {actual_gap}"
            );
        }
    }

    #[test]
    fn velocity_never_overshoots_target() {
        let mut motion = MotionState::default();
        motion.set_target_speed(0.09);
        for _ in 0..500 {
            motion.integrate(SMOOTHING);
            assert!(motion.velocity() <= 0.09 + 1e-6);
        }
        assert!((motion.velocity() - 0.09).abs() < 1e-5);
    }

    #[test]
    fn released_target_decays_velocity_toward_zero() {
        let mut motion = MotionState::default();
        motion.set_target_speed(0.2);
        for _ in 0..50 {
            motion.integrate(SMOOTHING);
        }
        let peak = motion.velocity();

        motion.set_target_speed(0.0);
        for tick in 1..=20 {
            motion.integrate(SMOOTHING);
            let expected = peak * (1.0 - SMOOTHING).powi(tick);
            assert!((motion.velocity() - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn zero_yaw_moves_along_positive_z() {
        let mut motion = MotionState::default();
        motion.set_target_speed(0.09);
        for _ in 0..60 {
            motion.integrate(SMOOTHING);
        }
        let position = motion.position();
        assert!(position.z > 0.0);
        assert!(position.x.abs() < 1e-5);
        assert_eq!(position.y, 0.0);
    }

    #[test]
    fn quarter_turn_yaw_moves_along_positive_x() {
        let mut motion = MotionState::default();
        motion.apply_yaw_delta(FRAC_PI_2);
        motion.set_target_speed(0.09);
        for _ in 0..60 {
            motion.integrate(SMOOTHING);
        }
        let position = motion.position();
        assert!(position.x > 0.0);
        assert!(position.z.abs() < 1e-4);
    }

    #[test]
    fn yaw_applies_on_the_same_tick() {
        let mut motion = MotionState::default();
        motion.set_target_speed(0.2);
        motion.apply_yaw_delta(FRAC_PI_2);
        motion.integrate(SMOOTHING);

        let position = motion.position();
        assert!(position.x > 0.0);
        assert!(position.z.abs() < 1e-6);
    }

    #[test]
    fn negative_velocity_moves_backward_along_heading() {
        let mut motion = MotionState::default();
        motion.set_target_speed(-0.09);
        for _ in 0..60 {
            motion.integrate(SMOOTHING);
        }
        assert!(motion.position().z < 0.0);
    }
}
