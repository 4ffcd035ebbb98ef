use sdl2::pixels::PixelFormatEnum;
use thiserror::Error;

use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chip8_core::FrameBuffer;

/// Bytes per frame buffer cell
const BYTES_PER_PIXEL: usize = 4;

/// SDL2 reports most failures as strings; each is tagged with the step that failed
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("unable to start the video subsystem: {0}")]
    Video(String),

    #[error("unable to open a window: {0}")]
    Window(String),

    #[error("unable to create a canvas: {0}")]
    Canvas(String),

    #[error("unable to create a texture: {0}")]
    Texture(String),

    #[error("unable to present a frame: {0}")]
    Render(String),
}

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// Each pixel of the FrameBuffer is a 32-bit cell that is either all zeroes or all ones,
/// so the FrameBuffer is blitted as-is onto an RGBA8888 texture.
/// The display only gets a call to `render` when the Chip-8 FrameBuffer is updated.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window's title
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, title: &str, scale: u32) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video().map_err(DisplayError::Video)?;
        let window = video_subsystem
            .window(
                title,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| DisplayError::Window(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| DisplayError::Canvas(e.to_string()))?;

        Ok(Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }

    /// Formats a Chip-8 FrameBuffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 texture is a 1D array of bytes that represent concatenated rows of pixels.
    /// Every cell becomes 4 bytes in native byte order, as the packed RGBA8888 format expects.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    fn frame_to_sdl_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|cell| cell.to_ne_bytes())
            .collect()
    }

    /// Formats the Chip-8 FrameBuffer as an SDL2 RGBA8888 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGBA8888,
                self.width as u32,
                self.height as u32,
            )
            .map_err(|e| DisplayError::Texture(e.to_string()))?;

        texture
            .update(
                None,
                &Display::frame_to_sdl_texture(frame),
                self.width * BYTES_PER_PIXEL,
            )
            .map_err(|e| DisplayError::Texture(e.to_string()))?;

        self.canvas.clear();
        self.canvas
            .copy(&texture, None, None)
            .map_err(DisplayError::Render)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chip8_core::constants::{PIXEL_OFF, PIXEL_ON};

    #[test]
    fn test_frame_to_sdl_texture() {
        let mut frame: FrameBuffer = [[PIXEL_OFF; 64]; 32];
        frame[0][0..2].copy_from_slice(&[PIXEL_OFF, PIXEL_ON]);
        frame[1][0..2].copy_from_slice(&[PIXEL_ON, PIXEL_OFF]);
        let frame = Display::frame_to_sdl_texture(&frame);

        let mut expected: Vec<u8> = vec![0; 8192];
        expected[4..8].copy_from_slice(&[255, 255, 255, 255]);
        expected[256..260].copy_from_slice(&[255, 255, 255, 255]);

        assert_eq!(frame, expected);
    }
}
