use glam::Vec3;
use thiserror::Error;

use super::input::InputSnapshot;
use crate::content::GroundMaterialDesc;

/// Authoritative character transform for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterPose {
    pub position: Vec3,
    pub yaw_radians: f32,
}

/// Camera mount position plus the point it is aimed at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_target: Vec3,
}

/// The full per-frame output contract: everything a render backend needs
/// from the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePose {
    pub character: CharacterPose,
    pub camera: CameraPose,
}

#[derive(Debug, Error)]
#[error("render driver failure: {message}")]
pub struct RenderDriverError {
    pub message: String,
}

impl RenderDriverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Consumes the controller's per-frame outputs. The loop treats this as an
/// opaque backend: it resizes it, hands it the ground descriptor once, and
/// presents the latest pose (or `None` while assets are still loading).
pub trait RenderDriver {
    fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderDriverError>;
    fn apply_ground(&mut self, ground: &GroundMaterialDesc);
    fn present(&mut self, pose: Option<&FramePose>) -> Result<(), RenderDriverError>;
}

pub trait Scene {
    fn load(&mut self);
    /// Runs one fixed tick of the pipeline. Returns `None` until the
    /// character asset has resolved.
    fn update(&mut self, fixed_dt_seconds: f32, input: &InputSnapshot) -> Option<FramePose>;
    fn unload(&mut self);
    /// Ground descriptor once assets are ready; the loop forwards it to the
    /// render driver exactly once.
    fn ground_material(&self) -> Option<&GroundMaterialDesc> {
        None
    }
    fn debug_title(&self) -> Option<String> {
        None
    }
}
