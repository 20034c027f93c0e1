mod loader;
mod manifest;

pub use loader::{
    load_scene_assets, AnimationClip, AssetLoadError, AssetLoadHandle, CharacterRig, SceneAssets,
};
pub use manifest::{
    CharacterRigDesc, ClipDesc, GroundMaterialDesc, ManifestError, SceneManifest,
    CANONICAL_CLIP_NAMES, SCENE_MANIFEST_FILE,
};
