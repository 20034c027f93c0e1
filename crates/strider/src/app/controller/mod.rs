mod blender;
mod camera_rig;
mod locomotion;
mod motion;

use engine::{
    AssetLoadHandle, CharacterPose, FramePose, GroundMaterialDesc, InputSnapshot, Scene,
};
use glam::Vec3;
use tracing::{error, info};

use blender::AnimationBlender;
use camera_rig::CameraRig;
use locomotion::resolve_locomotion;
use motion::MotionState;

/// The clips the controller drives, matched against the rig by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClipName {
    Idle,
    Walk,
    Run,
    Back,
}

impl ClipName {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ClipName::Idle => "idle",
            ClipName::Walk => "walk",
            ClipName::Run => "run",
            ClipName::Back => "back",
        }
    }
}

/// All controller tuning in one place. Speeds are world units per tick and
/// smoothing factors are per-tick lerp fractions; the loop's fixed timestep
/// keeps them deterministic.
#[derive(Debug, Clone)]
pub(crate) struct ControllerConfig {
    pub(crate) run_speed: f32,
    pub(crate) walk_speed: f32,
    pub(crate) back_speed: f32,
    pub(crate) turn_rate_radians: f32,
    pub(crate) velocity_smoothing: f32,
    pub(crate) crossfade_seconds: f32,
    pub(crate) camera: CameraRigConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            run_speed: 0.2,
            walk_speed: 0.09,
            back_speed: -0.09,
            turn_rate_radians: 0.05,
            velocity_smoothing: 0.3,
            crossfade_seconds: 0.3,
            camera: CameraRigConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct CameraRigConfig {
    pub(crate) follow_distance: f32,
    pub(crate) tail_height: f32,
    pub(crate) position_smoothing: f32,
    pub(crate) tail_easing: f32,
    pub(crate) look_height: f32,
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            follow_distance: 4.0,
            tail_height: 0.5,
            position_smoothing: 0.4,
            tail_easing: 0.02,
            look_height: 2.2,
        }
    }
}

#[derive(Debug)]
enum AssetState {
    Loading(AssetLoadHandle),
    Ready,
    Failed,
}

/// The whole character pipeline behind the engine's scene seam: poll the
/// async asset load, resolve input into a locomotion command, drive the
/// blender and motion state, then let the camera rig chase the result.
pub(crate) struct ThirdPersonScene {
    config: ControllerConfig,
    assets: AssetState,
    motion: MotionState,
    camera: CameraRig,
    blender: Option<AnimationBlender>,
    ground: Option<GroundMaterialDesc>,
}

impl ThirdPersonScene {
    pub(crate) fn new(config: ControllerConfig, asset_handle: AssetLoadHandle) -> Self {
        let camera = CameraRig::new(config.camera, Vec3::ZERO, 0.0);
        Self {
            config,
            assets: AssetState::Loading(asset_handle),
            motion: MotionState::default(),
            camera,
            blender: None,
            ground: None,
        }
    }

    fn poll_assets(&mut self) {
        let AssetState::Loading(handle) = &self.assets else {
            return;
        };
        match handle.poll() {
            None => {}
            Some(Ok(assets)) => {
                info!(
                    clip_count = assets.rig.clips().len(),
                    "character_assets_ready"
                );
                self.blender = Some(AnimationBlender::new(
                    &assets.rig,
                    self.config.crossfade_seconds,
                ));
                self.ground = Some(assets.ground);
                self.assets = AssetState::Ready;
            }
            Some(Err(err)) => {
                error!(error = %err, "character_asset_load_failed");
                self.assets = AssetState::Failed;
            }
        }
    }
}

impl Scene for ThirdPersonScene {
    fn load(&mut self) {
        info!("third_person_scene_loading");
    }

    fn update(&mut self, fixed_dt_seconds: f32, input: &InputSnapshot) -> Option<FramePose> {
        self.poll_assets();
        let blender = self.blender.as_mut()?;

        let command = resolve_locomotion(input, &self.config);
        blender.transition_to(command.clip);
        blender.advance(fixed_dt_seconds);

        self.motion.apply_yaw_delta(command.yaw_delta_radians);
        self.motion.set_target_speed(command.target_speed);
        self.motion.integrate(self.config.velocity_smoothing);

        let camera = self
            .camera
            .follow(self.motion.position(), self.motion.yaw_radians());

        Some(FramePose {
            character: CharacterPose {
                position: self.motion.position(),
                yaw_radians: self.motion.yaw_radians(),
            },
            camera,
        })
    }

    fn unload(&mut self) {
        info!("third_person_scene_unload");
    }

    fn ground_material(&self) -> Option<&GroundMaterialDesc> {
        self.ground.as_ref()
    }

    fn debug_title(&self) -> Option<String> {
        let blender = self.blender.as_ref()?;
        let position = self.motion.position();
        Some(format!(
            "Strider | Pos ({:.2}, {:.2}) | Vel {:.3} | Clip {}",
            position.x,
            position.z,
            self.motion.velocity(),
            blender.current_clip().as_str()
        ))
    }
}
