mod renderer;
mod transform;

pub use renderer::Renderer;
pub use transform::{world_to_screen, Viewport, PIXELS_PER_WORLD};
