use engine::CameraPose;
use glam::{Quat, Vec3};

use super::CameraRigConfig;

/// Spring-arm style follow camera. A smoothed copy of the character position
/// damps sudden movement, a rigid-rod correction keeps the follower at the
/// configured distance from that smoothed point, and the follower then eases
/// slowly toward the tail position behind the character's shoulder.
#[derive(Debug)]
pub(crate) struct CameraRig {
    config: CameraRigConfig,
    smoothed_character: Vec3,
    follower: Vec3,
}

impl CameraRig {
    pub(crate) fn new(config: CameraRigConfig, character_position: Vec3, yaw_radians: f32) -> Self {
        let follower = tail_world(&config, character_position, yaw_radians);
        Self {
            config,
            smoothed_character: character_position,
            follower,
        }
    }

    /// One fixed tick of camera motion for the character's new transform.
    pub(crate) fn follow(&mut self, character_position: Vec3, yaw_radians: f32) -> CameraPose {
        self.smoothed_character = self
            .smoothed_character
            .lerp(character_position, self.config.position_smoothing);

        let delta = self.smoothed_character - self.follower;
        let distance = delta.length();
        if distance > f32::EPSILON {
            // Pull the follower along the rod until it sits exactly at the
            // follow distance from the smoothed character.
            self.follower += delta / distance * (distance - self.config.follow_distance);
        }

        let tail = tail_world(&self.config, character_position, yaw_radians);
        self.follower = self.follower.lerp(tail, self.config.tail_easing);

        CameraPose {
            position: self.follower,
            look_target: Vec3::new(
                character_position.x,
                self.config.look_height,
                character_position.z,
            ),
        }
    }
}

/// The mount point behind and above the character, in world space.
fn tail_world(config: &CameraRigConfig, character_position: Vec3, yaw_radians: f32) -> Vec3 {
    let local = Vec3::new(0.0, config.tail_height, -config.follow_distance);
    character_position + Quat::from_rotation_y(yaw_radians) * local
}
