use engine::{InputAction, InputSnapshot};

use super::{ClipName, ControllerConfig};

/// What the held keys ask the character to do this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LocomotionCommand {
    pub(crate) target_speed: f32,
    pub(crate) clip: ClipName,
    pub(crate) yaw_delta_radians: f32,
}

/// Pure key-state to locomotion mapping. Backward wins over forward when
/// both movement keys are held; sprint only matters while moving forward.
pub(crate) fn resolve_locomotion(
    input: &InputSnapshot,
    config: &ControllerConfig,
) -> LocomotionCommand {
    let forward = input.is_down(InputAction::Forward);
    let backward = input.is_down(InputAction::Backward);
    let sprint = input.is_down(InputAction::Sprint);

    let (target_speed, clip) = if backward {
        (config.back_speed, ClipName::Back)
    } else if forward && sprint {
        (config.run_speed, ClipName::Run)
    } else if forward {
        (config.walk_speed, ClipName::Walk)
    } else {
        (0.0, ClipName::Idle)
    };

    let mut yaw_delta_radians = 0.0;
    if input.is_down(InputAction::TurnLeft) {
        yaw_delta_radians += config.turn_rate_radians;
    }
    if input.is_down(InputAction::TurnRight) {
        yaw_delta_radians -= config.turn_rate_radians;
    }

    LocomotionCommand {
        target_speed,
        clip,
        yaw_delta_radians,
    }
}
