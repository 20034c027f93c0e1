use glam::Vec3;

/// Scale of the top-down debug view.
pub const PIXELS_PER_WORLD: f32 = 24.0;

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Projects a world position onto the top-down debug view. The view looks
/// straight down the Y axis, so only X and Z matter; `view_center` lands at
/// the middle of the viewport and +Z points up the screen.
pub fn world_to_screen(
    world: Vec3,
    view_center: Vec3,
    viewport: Viewport,
    pixels_per_world: f32,
) -> (i32, i32) {
    let x = (world.x - view_center.x) * pixels_per_world + viewport.width as f32 * 0.5;
    let y = viewport.height as f32 * 0.5 - (world.z - view_center.z) * pixels_per_world;
    (x.round() as i32, y.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_center_maps_to_viewport_center() {
        let viewport = Viewport {
            width: 800,
            height: 600,
        };
        let center = Vec3::new(3.0, 0.0, -7.0);
        let (x, y) = world_to_screen(center, center, viewport, 32.0);
        assert_eq!(x, 400);
        assert_eq!(y, 300);
    }

    #[test]
    fn positive_z_moves_up_the_screen() {
        let viewport = Viewport {
            width: 800,
            height: 600,
        };
        let center = Vec3::ZERO;
        let (x, y) = world_to_screen(Vec3::new(2.0, 0.0, 1.0), center, viewport, 10.0);
        assert_eq!(x, 420);
        assert_eq!(y, 290);
    }

    #[test]
    fn world_height_does_not_affect_projection() {
        let viewport = Viewport {
            width: 800,
            height: 600,
        };
        let center = Vec3::ZERO;
        let low = world_to_screen(Vec3::new(1.0, 0.0, 1.0), center, viewport, 10.0);
        let high = world_to_screen(Vec3::new(1.0, 5.0, 1.0), center, viewport, 10.0);
        assert_eq!(low, high);
    }
}
