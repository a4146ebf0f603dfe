//! Procedural gradient images.

use image::{Rgba, RgbaImage};

/// Colours at the four corners of a gradient image, as linear RGB in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientCorners {
    pub top_left: [f32; 3],
    pub top_right: [f32; 3],
    pub bottom_left: [f32; 3],
    pub bottom_right: [f32; 3],
}

impl GradientCorners {
    /// Black, red, green, yellow.
    pub const WARM: Self = Self {
        top_left: [0.0, 0.0, 0.0],
        top_right: [1.0, 0.0, 0.0],
        bottom_left: [0.0, 1.0, 0.0],
        bottom_right: [1.0, 1.0, 0.0],
    };

    /// Blue, magenta, cyan, white.
    pub const COOL: Self = Self {
        top_left: [0.0, 0.0, 1.0],
        top_right: [1.0, 0.0, 1.0],
        bottom_left: [0.0, 1.0, 1.0],
        bottom_right: [1.0, 1.0, 1.0],
    };

    /// Bilinear blend at normalized coordinates, `u` left to right and `v`
    /// top to bottom.
    pub fn sample(&self, u: f32, v: f32) -> [f32; 3] {
        let mut out = [0.0; 3];
        for (c, value) in out.iter_mut().enumerate() {
            let top = lerp(self.top_left[c], self.top_right[c], u);
            let bottom = lerp(self.bottom_left[c], self.bottom_right[c], u);
            *value = lerp(top, bottom, v);
        }
        out
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Renders an opaque `width` x `height` image blending the four corners.
pub fn gradient_image(width: u32, height: u32, corners: &GradientCorners) -> RgbaImage {
    let width = width.max(1);
    let height = height.max(1);
    let u_span = (width - 1).max(1) as f32;
    let v_span = (height - 1).max(1) as f32;

    RgbaImage::from_fn(width, height, |x, y| {
        let [r, g, b] = corners.sample(x as f32 / u_span, y as f32 / v_span);
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([to_byte(r), to_byte(g), to_byte(b), 255])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_land_on_corner_pixels() {
        let img = gradient_image(512, 512, &GradientCorners::WARM);
        assert_eq!(img.dimensions(), (512, 512));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(511, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 511).0, [0, 255, 0, 255]);
        assert_eq!(img.get_pixel(511, 511).0, [255, 255, 0, 255]);
    }

    #[test]
    fn cool_center_is_the_corner_average() {
        let center = GradientCorners::COOL.sample(0.5, 0.5);
        assert_eq!(center, [0.5, 0.5, 1.0]);
    }

    #[test]
    fn degenerate_sizes_still_produce_pixels() {
        let img = gradient_image(0, 1, &GradientCorners::COOL);
        assert_eq!(img.dimensions(), (1, 1));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255, 255]);
    }
}
