use engine::{
    resolve_app_paths, AssetLoadHandle, LoopConfig, Scene, StartupError, SCENE_MANIFEST_FILE,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::controller::{ControllerConfig, ThirdPersonScene};

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
}

pub(crate) fn build_app() -> Result<AppWiring, StartupError> {
    init_tracing();
    info!("=== Strider Startup ===");

    let app_paths = resolve_app_paths()?;
    info!(
        root = %app_paths.root.display(),
        assets_dir = %app_paths.assets_dir.display(),
        "startup"
    );

    // The manifest load runs on its own thread; the scene polls it each tick
    // and stays in its loading state until the rig arrives.
    let asset_handle = AssetLoadHandle::spawn(app_paths.assets_dir.join(SCENE_MANIFEST_FILE));
    let scene = ThirdPersonScene::new(ControllerConfig::default(), asset_handle);

    Ok(AppWiring {
        config: LoopConfig::default(),
        scene: Box::new(scene),
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
