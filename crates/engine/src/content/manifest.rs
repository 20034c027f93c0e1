use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SCENE_MANIFEST_FILE: &str = "scene.json";

/// The clip names the controller transitions between. The manifest may
/// carry more; any of these that are absent simply disable transitions to
/// them instead of failing the load.
pub const CANONICAL_CLIP_NAMES: [&str; 4] = ["idle", "run", "walk", "back"];

/// Root of the scene asset manifest: one character rig plus one tileable
/// ground material descriptor.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SceneManifest {
    pub character: CharacterRigDesc,
    pub ground: GroundMaterialDesc,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CharacterRigDesc {
    pub model: PathBuf,
    pub clips: Vec<ClipDesc>,
}

/// A named, playable animation clip. Clips are bound by name, never by
/// position in the list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClipDesc {
    pub name: String,
    pub duration_seconds: f32,
}

/// Four tileable maps consumed verbatim by the render backend; this crate
/// never decodes them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroundMaterialDesc {
    pub color_map: PathBuf,
    pub displacement_map: PathBuf,
    pub normal_map: PathBuf,
    pub roughness_map: PathBuf,
    pub repeat: f32,
    pub plane_size: f32,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("character rig declares no animation clips")]
    NoClips,
    #[error("animation clip {name:?} has non-positive duration {duration_seconds}")]
    NonPositiveClipDuration { name: String, duration_seconds: f32 },
    #[error("duplicate animation clip name {name:?}")]
    DuplicateClipName { name: String },
    #[error("ground material repeat must be positive, got {repeat}")]
    NonPositiveRepeat { repeat: f32 },
    #[error("ground plane size must be positive, got {plane_size}")]
    NonPositivePlaneSize { plane_size: f32 },
}

impl SceneManifest {
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.character.clips.is_empty() {
            return Err(ManifestError::NoClips);
        }

        let mut seen = HashSet::new();
        for clip in &self.character.clips {
            if !(clip.duration_seconds > 0.0) {
                return Err(ManifestError::NonPositiveClipDuration {
                    name: clip.name.clone(),
                    duration_seconds: clip.duration_seconds,
                });
            }
            if !seen.insert(clip.name.as_str()) {
                return Err(ManifestError::DuplicateClipName {
                    name: clip.name.clone(),
                });
            }
        }

        if !(self.ground.repeat > 0.0) {
            return Err(ManifestError::NonPositiveRepeat {
                repeat: self.ground.repeat,
            });
        }
        if !(self.ground.plane_size > 0.0) {
            return Err(ManifestError::NonPositivePlaneSize {
                plane_size: self.ground.plane_size,
            });
        }

        Ok(())
    }

    /// Canonical clips the rig does not provide. Absence is fail-soft: the
    /// blender skips transitions to them.
    pub fn missing_canonical_clips(&self) -> Vec<&'static str> {
        CANONICAL_CLIP_NAMES
            .iter()
            .copied()
            .filter(|wanted| {
                !self
                    .character
                    .clips
                    .iter()
                    .any(|clip| clip.name == *wanted)
            })
            .collect()
    }
}
