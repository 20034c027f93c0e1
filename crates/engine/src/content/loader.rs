use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use thiserror::Error;
use tracing::{info, warn};

use super::manifest::{GroundMaterialDesc, ManifestError, SceneManifest};

#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error("failed to read scene manifest {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scene manifest {path:?} at {at}: {source}")]
    Parse {
        path: PathBuf,
        at: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid scene manifest {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },
    #[error("asset load worker exited without producing a result")]
    WorkerDisconnected,
}

/// A single named clip the blender can play and weight.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    pub duration_seconds: f32,
}

/// The loaded character: its clip set, looked up by name. Clips absent from
/// the rig simply resolve to `None`.
#[derive(Debug, Clone)]
pub struct CharacterRig {
    clips: Vec<AnimationClip>,
}

impl CharacterRig {
    pub fn new(clips: Vec<AnimationClip>) -> Self {
        Self { clips }
    }

    pub fn clip(&self, name: &str) -> Option<&AnimationClip> {
        self.clips.iter().find(|clip| clip.name == name)
    }

    pub fn clips(&self) -> &[AnimationClip] {
        &self.clips
    }
}

/// Everything `load_scene_assets` produces: the rig for the blender and the
/// ground descriptor for the render driver.
#[derive(Debug, Clone)]
pub struct SceneAssets {
    pub rig: CharacterRig,
    pub ground: GroundMaterialDesc,
}

/// Reads, parses and validates the scene manifest at `path`.
pub fn load_scene_assets(path: &Path) -> Result<SceneAssets, AssetLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| AssetLoadError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut deserializer = serde_json::Deserializer::from_str(&raw);
    let manifest: SceneManifest = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|error| {
            let at = error.path().to_string();
            AssetLoadError::Parse {
                path: path.to_path_buf(),
                at,
                source: error.into_inner(),
            }
        })?;

    manifest.validate().map_err(|source| AssetLoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    let missing = manifest.missing_canonical_clips();
    if !missing.is_empty() {
        warn!(clips = ?missing, "scene manifest is missing canonical clips");
    }

    let clips = manifest
        .character
        .clips
        .iter()
        .map(|desc| AnimationClip {
            name: desc.name.clone(),
            duration_seconds: desc.duration_seconds,
        })
        .collect();

    info!(
        manifest = %path.display(),
        clip_count = manifest.character.clips.len(),
        "scene_assets_loaded"
    );

    Ok(SceneAssets {
        rig: CharacterRig::new(clips),
        ground: manifest.ground,
    })
}

/// Handle to an asset load running on a background thread. The load happens
/// exactly once; the scene polls each tick until a result arrives.
#[derive(Debug)]
pub struct AssetLoadHandle {
    receiver: mpsc::Receiver<Result<SceneAssets, AssetLoadError>>,
}

impl AssetLoadHandle {
    /// Kicks off the load on its own thread and returns immediately.
    pub fn spawn(manifest_path: PathBuf) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let result = load_scene_assets(&manifest_path);
            // The receiver may already be gone if the app shut down.
            let _ = sender.send(result);
        });
        Self { receiver }
    }

    /// A handle that resolves immediately with already-loaded assets.
    pub fn ready(assets: SceneAssets) -> Self {
        let (sender, receiver) = mpsc::channel();
        let _ = sender.send(Ok(assets));
        Self { receiver }
    }

    /// Non-blocking check. Returns `None` while the load is still running.
    pub fn poll(&self) -> Option<Result<SceneAssets, AssetLoadError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(AssetLoadError::WorkerDisconnected)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID_MANIFEST: &str = r#"{
        "character": {
            "model": "models/character.glb",
            "clips": [
                { "name": "idle", "duration_seconds": 2.5 },
                { "name": "run", "duration_seconds": 0.8 },
                { "name": "walk", "duration_seconds": 1.2 },
                { "name": "back", "duration_seconds": 1.2 }
            ]
        },
        "ground": {
            "color_map": "textures/floor/color.png",
            "displacement_map": "textures/floor/disp.png",
            "normal_map": "textures/floor/normal.png",
            "roughness_map": "textures/floor/rough.png",
            "repeat": 40.0,
            "plane_size": 100.0
        }
    }"#;

    fn write_manifest(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("scene.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_a_valid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(&dir, VALID_MANIFEST);

        let assets = load_scene_assets(&path).unwrap();
        assert_eq!(assets.rig.clips().len(), 4);
        assert_eq!(assets.rig.clip("run").unwrap().duration_seconds, 0.8);
        assert_eq!(assets.ground.repeat, 40.0);
        assert_eq!(assets.ground.plane_size, 100.0);
    }

    #[test]
    fn missing_file_reports_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");

        let error = load_scene_assets(&path).unwrap_err();
        assert!(matches!(error, AssetLoadError::ReadFile { .. }));
    }

    #[test]
    fn malformed_json_reports_parse_error_with_location() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            &dir,
            r#"{ "character": { "model": "m.glb", "clips": [ { "name": "idle" } ] } }"#,
        );

        let error = load_scene_assets(&path).unwrap_err();
        match error {
            AssetLoadError::Parse { at, .. } => {
                assert!(at.contains("clips"), "unexpected path: {at}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_manifest_reports_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            &dir,
            &VALID_MANIFEST.replace("\"duration_seconds\": 0.8", "\"duration_seconds\": -1.0"),
        );

        let error = load_scene_assets(&path).unwrap_err();
        assert!(matches!(
            error,
            AssetLoadError::Invalid {
                source: ManifestError::NonPositiveClipDuration { .. },
                ..
            }
        ));
    }

    #[test]
    fn rig_with_missing_canonical_clip_still_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            &dir,
            r#"{
                "character": {
                    "model": "models/character.glb",
                    "clips": [
                        { "name": "idle", "duration_seconds": 2.5 },
                        { "name": "walk", "duration_seconds": 1.2 }
                    ]
                },
                "ground": {
                    "color_map": "textures/floor/color.png",
                    "displacement_map": "textures/floor/disp.png",
                    "normal_map": "textures/floor/normal.png",
                    "roughness_map": "textures/floor/rough.png",
                    "repeat": 40.0,
                    "plane_size": 100.0
                }
            }"#,
        );

        let assets = load_scene_assets(&path).unwrap();
        assert!(assets.rig.clip("back").is_none());
        assert!(assets.rig.clip("run").is_none());
        assert!(assets.rig.clip("idle").is_some());
    }

    #[test]
    fn ready_handle_resolves_on_first_poll() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(&dir, VALID_MANIFEST);
        let assets = load_scene_assets(&path).unwrap();

        let handle = AssetLoadHandle::ready(assets);
        let result = handle.poll().unwrap();
        assert!(result.is_ok());
    }

    #[test]
    fn spawned_handle_eventually_delivers_the_load_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(&dir, VALID_MANIFEST);

        let handle = AssetLoadHandle::spawn(path);
        let mut result = None;
        for _ in 0..200 {
            if let Some(outcome) = handle.poll() {
                result = Some(outcome);
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        let assets = result.expect("load did not finish").expect("load failed");
        assert_eq!(assets.rig.clips().len(), 4);
    }
}
