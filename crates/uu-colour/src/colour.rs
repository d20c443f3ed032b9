use std::{
    fmt,
    ops::{Index, IndexMut},
};

use uu_linalg::{Vec4f, Vector};

use crate::Hsb;

/// An 8-bit RGBA colour.
///
/// Channels are stored in `r, g, b, a` order and compared field-wise. Alpha is not premultiplied.
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
#[repr(transparent)]
pub struct Colour([u8; 4]);

unsafe impl bytemuck::Zeroable for Colour {}
unsafe impl bytemuck::Pod for Colour {}

impl Colour {
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    pub const WHITE: Self = Self([255, 255, 255, 255]);
    pub const RED: Self = Self([255, 0, 0, 255]);
    pub const GREEN: Self = Self([0, 255, 0, 255]);
    pub const BLUE: Self = Self([0, 0, 255, 255]);
    pub const YELLOW: Self = Self([255, 255, 0, 255]);
    pub const CYAN: Self = Self([0, 255, 255, 255]);
    pub const MAGENTA: Self = Self([255, 0, 255, 255]);

    /// Creates an opaque colour.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Decodes a word produced by [`Colour::to_packed_word`].
    ///
    /// ```
    /// # use uu_colour::Colour;
    /// assert_eq!(Colour::from_packed_word(0xff00_00ff), Colour::RED);
    /// ```
    #[inline]
    pub const fn from_packed_word(word: u32) -> Self {
        Self(word.to_le_bytes())
    }

    /// Packs the channels into a word with `r` in the lowest byte and `a` in the highest.
    #[inline]
    pub const fn to_packed_word(self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    /// Packs the channels as `0xAARRGGBB`, the layout used by Direct3D-style APIs.
    ///
    /// ```
    /// # use uu_colour::Colour;
    /// let c = Colour::from_rgba8(0x12, 0x34, 0x56, 0x78);
    /// assert_eq!(c.to_argb_word(), 0x7812_3456);
    /// ```
    #[inline]
    pub const fn to_argb_word(self) -> u32 {
        let [r, g, b, a] = self.0;
        u32::from_be_bytes([a, r, g, b])
    }

    #[inline]
    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    #[inline]
    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    #[inline]
    pub const fn a(&self) -> u8 {
        self.0[3]
    }

    #[inline]
    pub fn set_r(&mut self, r: u8) {
        self.0[0] = r;
    }

    #[inline]
    pub fn set_g(&mut self, g: u8) {
        self.0[1] = g;
    }

    #[inline]
    pub fn set_b(&mut self, b: u8) {
        self.0[2] = b;
    }

    #[inline]
    pub fn set_a(&mut self, a: u8) {
        self.0[3] = a;
    }

    pub fn with_alpha(mut self, a: u8) -> Colour {
        self.0[3] = a;
        self
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        self.0
    }

    /// Copies the channels into `out`, which must hold exactly 4 bytes.
    pub fn copy_to_slice(&self, out: &mut [u8]) -> uu_linalg::Result<()> {
        Vector::from_array(self.0).copy_to_slice(out)
    }

    /// Returns the RGB channels scaled to the range 0.0 to 1.0, along with the largest and smallest
    /// of them.
    fn unit_rgb(&self) -> ([f32; 3], f32, f32) {
        let rgb = [self.r(), self.g(), self.b()].map(|c| f32::from(c) / 255.0);
        let max = rgb[0].max(rgb[1]).max(rgb[2]);
        let min = rgb[0].min(rgb[1]).min(rgb[2]);
        (rgb, max, min)
    }

    /// Returns the hue in degrees, in range `[0, 360)`.
    ///
    /// Greys (including black and white) have a hue of 0.
    pub fn hue(&self) -> f32 {
        let ([r, g, b], max, min) = self.unit_rgb();
        if max == min {
            return 0.0;
        }

        let delta = max - min;
        let sector = if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        let hue = sector * 60.0;
        if hue < 0.0 {
            hue + 360.0
        } else {
            hue
        }
    }

    /// Returns the saturation in range 0.0 to 1.0.
    pub fn saturation(&self) -> f32 {
        let (_, max, min) = self.unit_rgb();
        if max == min {
            return 0.0;
        }

        if (max + min) / 2.0 <= 0.5 {
            (max - min) / (max + min)
        } else {
            (max - min) / (2.0 - max - min)
        }
    }

    /// Returns the brightness (the mean of the largest and smallest channel) in range 0.0 to 1.0.
    pub fn brightness(&self) -> f32 {
        let (_, max, min) = self.unit_rgb();
        (max + min) / 2.0
    }

    /// Converts the RGB channels to [`Hsb`]. Alpha is discarded.
    ///
    /// ```
    /// # use uu_colour::{Colour, Hsb};
    /// assert_eq!(Colour::BLUE.to_hsb(), Hsb::new(240.0, 1.0, 0.5));
    /// assert_eq!(Colour::BLUE.to_hsb().to_colour(), Colour::BLUE);
    /// ```
    pub fn to_hsb(&self) -> Hsb {
        Hsb::new(self.hue(), self.saturation(), self.brightness())
    }

    /// Returns the channels scaled to the range 0.0 to 1.0.
    pub fn to_vector(&self) -> Vec4f {
        Vector::from_array(self.0).map(|c| f32::from(c) / 255.0)
    }

    /// Creates a colour from channels in range 0.0 to 1.0.
    ///
    /// Values outside of that range are clamped, and each channel is rounded to the nearest
    /// representable value. NaN channels become 0.
    ///
    /// ```
    /// # use uu_colour::Colour;
    /// # use uu_linalg::vec4;
    /// assert_eq!(Colour::from_vector(vec4(2.0, 0.5, -1.0, 1.0)), Colour::from_rgb8(255, 128, 0));
    /// ```
    pub fn from_vector(v: Vec4f) -> Self {
        // `as` saturates and maps NaN to 0.
        Self(v.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8).into_array())
    }
}

impl Default for Colour {
    /// Returns opaque black.
    #[inline]
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Vec4f> for Colour {
    #[inline]
    fn from(v: Vec4f) -> Self {
        Self::from_vector(v)
    }
}

impl From<Colour> for Vec4f {
    #[inline]
    fn from(c: Colour) -> Self {
        c.to_vector()
    }
}

impl From<[u8; 4]> for Colour {
    #[inline]
    fn from(rgba: [u8; 4]) -> Self {
        Self(rgba)
    }
}

impl From<Colour> for [u8; 4] {
    #[inline]
    fn from(c: Colour) -> Self {
        c.0
    }
}

impl fmt::Debug for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r(),
            self.g(),
            self.b(),
            self.a(),
        )
    }
}

impl Index<usize> for Colour {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Colour {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.0[index]
    }
}
