//! CPU rasterizer for draw calls, backed by an `image::RgbaImage`

use heartlock_core::{Color, Vec2, Viewport};
use heartlock_runtime::DrawSurface;
use image::{Rgba, RgbaImage};

/// Night-sky backdrop behind the particles
pub const BACKGROUND: Color = Color::new(0.043, 0.051, 0.09, 1.0);

/// One pixel per logical unit; circles are alpha-blended over an opaque background
pub struct ImageSurface {
    image: RgbaImage,
    background: Color,
}

impl ImageSurface {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let mut surface = Self {
            image: RgbaImage::new(width, height),
            background,
        };
        surface.fill_background();
        surface
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.image.width() as f32, self.image.height() as f32)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn fill_background(&mut self) {
        let pixel = Rgba(self.background.with_alpha(1.0).to_rgba8());
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }
}

fn blend(dst: &mut Rgba<u8>, src: Color) {
    let a = src.a.clamp(0.0, 1.0);
    let mix = |d: u8, s: f32| {
        let d = d as f32 / 255.0;
        ((s.clamp(0.0, 1.0) * a + d * (1.0 - a)) * 255.0).round() as u8
    };
    dst.0 = [mix(dst.0[0], src.r), mix(dst.0[1], src.g), mix(dst.0[2], src.b), 255];
}

impl DrawSurface for ImageSurface {
    fn clear(&mut self, _viewport: Viewport) {
        self.fill_background();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 || color.a <= 0.0 {
            return;
        }
        let (w, h) = (self.image.width() as i64, self.image.height() as i64);
        let x0 = ((center.x - radius).floor() as i64).max(0);
        let x1 = ((center.x + radius).ceil() as i64).min(w - 1);
        let y0 = ((center.y - radius).floor() as i64).max(0);
        let y1 = ((center.y + radius).ceil() as i64).min(h - 1);
        let r2 = radius * radius;

        for y in y0..=y1 {
            for x in x0..=x1 {
                // sample at the pixel center
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    blend(self.image.get_pixel_mut(x as u32, y as u32), color);
                }
            }
        }
    }
}
