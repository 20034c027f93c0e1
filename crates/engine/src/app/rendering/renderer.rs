use glam::Vec3;
use pixels::{Error, Pixels, SurfaceTexture};
use tracing::info;
use winit::window::Window;

use crate::app::scene::{FramePose, RenderDriver, RenderDriverError};
use crate::content::GroundMaterialDesc;

use super::transform::{world_to_screen, Viewport, PIXELS_PER_WORLD};

const CLEAR_COLOR: [u8; 4] = [20, 22, 28, 255];
const GRID_CELL_WORLD: f32 = 1.0;
const GRID_MAJOR_EVERY: i32 = 5;
const GRID_MINOR_COLOR: [u8; 4] = [35, 39, 46, 255];
const GRID_MAJOR_COLOR: [u8; 4] = [52, 58, 70, 255];
const FLOOR_EDGE_COLOR: [u8; 4] = [74, 112, 56, 255];
const CHARACTER_COLOR: [u8; 4] = [220, 220, 240, 255];
const HEADING_COLOR: [u8; 4] = [255, 210, 70, 255];
const CAMERA_COLOR: [u8; 4] = [80, 220, 255, 255];
const LOOK_RAY_COLOR: [u8; 4] = [46, 92, 110, 255];
const CHARACTER_HALF_SIZE_PX: i32 = 5;
const CAMERA_HALF_SIZE_PX: i32 = 3;
const HEADING_LENGTH_WORLD: f32 = 1.0;

/// Top-down debug presenter for the controller's frame poses. Draws the
/// ground bounds, a world grid, the character with its heading, and the
/// camera with its look ray onto a CPU pixel buffer.
pub struct Renderer {
    window: &'static Window,
    pixels: Pixels<'static>,
    viewport: Viewport,
    floor_half_extent: Option<f32>,
}

impl Renderer {
    pub fn new(window: &'static Window, width: u32, height: u32) -> Result<Self, Error> {
        let pixels = Self::build_pixels(window, width, height)?;
        Ok(Self {
            window,
            pixels,
            viewport: Viewport { width, height },
            floor_half_extent: None,
        })
    }

    fn build_pixels(
        window: &'static Window,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(width, height, window);
        Pixels::new(width, height, surface)
    }

    fn draw_frame(&mut self, pose: Option<&FramePose>) {
        let width = self.viewport.width;
        let height = self.viewport.height;
        let frame = self.pixels.frame_mut();

        for chunk in frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&CLEAR_COLOR);
        }

        // Nothing to anchor the view on until the first pose arrives.
        let Some(pose) = pose else {
            return;
        };

        let viewport = Viewport { width, height };
        let center = pose.character.position;

        draw_world_grid(frame, viewport, center);

        if let Some(half_extent) = self.floor_half_extent {
            draw_world_rect_outline(frame, viewport, center, half_extent, FLOOR_EDGE_COLOR);
        }

        let (camera_x, camera_y) =
            world_to_screen(pose.camera.position, center, viewport, PIXELS_PER_WORLD);
        let (look_x, look_y) =
            world_to_screen(pose.camera.look_target, center, viewport, PIXELS_PER_WORLD);
        draw_line(frame, viewport, camera_x, camera_y, look_x, look_y, LOOK_RAY_COLOR);
        draw_filled_square(frame, viewport, camera_x, camera_y, CAMERA_HALF_SIZE_PX, CAMERA_COLOR);

        let yaw = pose.character.yaw_radians;
        let heading_tip = center + Vec3::new(yaw.sin(), 0.0, yaw.cos()) * HEADING_LENGTH_WORLD;
        let (char_x, char_y) = world_to_screen(center, center, viewport, PIXELS_PER_WORLD);
        let (tip_x, tip_y) = world_to_screen(heading_tip, center, viewport, PIXELS_PER_WORLD);
        draw_line(frame, viewport, char_x, char_y, tip_x, tip_y, HEADING_COLOR);
        draw_filled_square(
            frame,
            viewport,
            char_x,
            char_y,
            CHARACTER_HALF_SIZE_PX,
            CHARACTER_COLOR,
        );
    }
}

impl RenderDriver for Renderer {
    fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderDriverError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(self.window, width, height)
            .map_err(|error| RenderDriverError::new(error.to_string()))?;
        self.viewport = Viewport { width, height };
        Ok(())
    }

    fn apply_ground(&mut self, ground: &GroundMaterialDesc) {
        self.floor_half_extent = Some(ground.plane_size * 0.5);
        info!(
            color_map = %ground.color_map.display(),
            repeat = ground.repeat,
            plane_size = ground.plane_size,
            "ground_material_applied"
        );
    }

    fn present(&mut self, pose: Option<&FramePose>) -> Result<(), RenderDriverError> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Ok(());
        }
        self.draw_frame(pose);
        self.pixels
            .render()
            .map_err(|error| RenderDriverError::new(error.to_string()))
    }
}

fn put_pixel(frame: &mut [u8], viewport: Viewport, x: i32, y: i32, color: [u8; 4]) {
    if x < 0 || y < 0 || x >= viewport.width as i32 || y >= viewport.height as i32 {
        return;
    }
    let index = (y as usize * viewport.width as usize + x as usize) * 4;
    if let Some(pixel) = frame.get_mut(index..index + 4) {
        pixel.copy_from_slice(&color);
    }
}

fn draw_filled_square(
    frame: &mut [u8],
    viewport: Viewport,
    center_x: i32,
    center_y: i32,
    half_size: i32,
    color: [u8; 4],
) {
    for y in (center_y - half_size)..=(center_y + half_size) {
        for x in (center_x - half_size)..=(center_x + half_size) {
            put_pixel(frame, viewport, x, y, color);
        }
    }
}

fn draw_line(
    frame: &mut [u8],
    viewport: Viewport,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: [u8; 4],
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let step_x = if x0 < x1 { 1 } else { -1 };
    let step_y = if y0 < y1 { 1 } else { -1 };
    let mut error = dx + dy;
    let mut x = x0;
    let mut y = y0;

    loop {
        put_pixel(frame, viewport, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            x += step_x;
        }
        if doubled <= dx {
            error += dx;
            y += step_y;
        }
    }
}

fn draw_world_grid(frame: &mut [u8], viewport: Viewport, center: Vec3) {
    let half_width_world = viewport.width as f32 * 0.5 / PIXELS_PER_WORLD;
    let half_height_world = viewport.height as f32 * 0.5 / PIXELS_PER_WORLD;

    let first_x = ((center.x - half_width_world) / GRID_CELL_WORLD).floor() as i32;
    let last_x = ((center.x + half_width_world) / GRID_CELL_WORLD).ceil() as i32;
    for line in first_x..=last_x {
        let world_x = line as f32 * GRID_CELL_WORLD;
        let (x, _) = world_to_screen(
            Vec3::new(world_x, 0.0, center.z),
            center,
            viewport,
            PIXELS_PER_WORLD,
        );
        let color = if line % GRID_MAJOR_EVERY == 0 {
            GRID_MAJOR_COLOR
        } else {
            GRID_MINOR_COLOR
        };
        draw_line(frame, viewport, x, 0, x, viewport.height as i32 - 1, color);
    }

    let first_z = ((center.z - half_height_world) / GRID_CELL_WORLD).floor() as i32;
    let last_z = ((center.z + half_height_world) / GRID_CELL_WORLD).ceil() as i32;
    for line in first_z..=last_z {
        let world_z = line as f32 * GRID_CELL_WORLD;
        let (_, y) = world_to_screen(
            Vec3::new(center.x, 0.0, world_z),
            center,
            viewport,
            PIXELS_PER_WORLD,
        );
        let color = if line % GRID_MAJOR_EVERY == 0 {
            GRID_MAJOR_COLOR
        } else {
            GRID_MINOR_COLOR
        };
        draw_line(frame, viewport, 0, y, viewport.width as i32 - 1, y, color);
    }
}

fn draw_world_rect_outline(
    frame: &mut [u8],
    viewport: Viewport,
    center: Vec3,
    half_extent: f32,
    color: [u8; 4],
) {
    let corners = [
        Vec3::new(-half_extent, 0.0, -half_extent),
        Vec3::new(half_extent, 0.0, -half_extent),
        Vec3::new(half_extent, 0.0, half_extent),
        Vec3::new(-half_extent, 0.0, half_extent),
    ];
    let screen: Vec<(i32, i32)> = corners
        .iter()
        .map(|corner| world_to_screen(*corner, center, viewport, PIXELS_PER_WORLD))
        .collect();
    for index in 0..screen.len() {
        let (x0, y0) = screen[index];
        let (x1, y1) = screen[(index + 1) % screen.len()];
        draw_line(frame, viewport, x0, y0, x1, y1, color);
    }
}
