use std::ops::{Index, IndexMut};

use crate::Colour;

/// A colour given by hue, saturation and brightness.
///
/// `h` is in degrees, `s` and `b` are in range 0.0 to 1.0. Brightness is the mean of the largest
/// and smallest RGB channel, so a fully saturated colour has a brightness of 0.5, and 1.0 is always
/// white.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub h: f32,
    pub s: f32,
    pub b: f32,
}

impl Hsb {
    #[inline]
    pub const fn new(h: f32, s: f32, b: f32) -> Self {
        Self { h, s, b }
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.h, self.s, self.b]
    }

    /// Converts back to an opaque [`Colour`].
    ///
    /// The hue wraps around, so `-120.0` and `240.0` are the same hue. Saturation and brightness
    /// are clamped to 0.0 to 1.0. This is the exact inverse of [`Colour::to_hsb`] for every colour
    /// with 8-bit channels.
    ///
    /// ```
    /// # use uu_colour::{Colour, Hsb};
    /// assert_eq!(Hsb::new(60.0, 1.0, 0.5).to_colour(), Colour::YELLOW);
    /// assert_eq!(Hsb::new(-300.0, 1.0, 0.5).to_colour(), Colour::YELLOW);
    /// assert_eq!(Hsb::new(123.0, 0.0, 1.0).to_colour(), Colour::WHITE);
    /// ```
    pub fn to_colour(&self) -> Colour {
        let h = self.h.rem_euclid(360.0);
        let s = self.s.clamp(0.0, 1.0);
        let b = self.b.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * b - 1.0).abs()) * s;
        let sector = h / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, bl) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            // `rem_euclid` can round up to exactly 360.0 for tiny negative hues.
            _ => (chroma, 0.0, x),
        };

        let m = b - chroma / 2.0;
        let channel = |c: f32| ((c + m) * 255.0).round() as u8;
        Colour::from_rgb8(channel(r), channel(g), channel(bl))
    }
}

impl From<Colour> for Hsb {
    #[inline]
    fn from(c: Colour) -> Self {
        c.to_hsb()
    }
}

impl From<Hsb> for Colour {
    #[inline]
    fn from(hsb: Hsb) -> Self {
        hsb.to_colour()
    }
}

impl Index<usize> for Hsb {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.h,
            1 => &self.s,
            2 => &self.b,
            _ => panic!("index {index} out of bounds for `Hsb`"),
        }
    }
}

impl IndexMut<usize> for Hsb {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.h,
            1 => &mut self.s,
            2 => &mut self.b,
            _ => panic!("index {index} out of bounds for `Hsb`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colours() {
        for c in [
            Colour::BLACK,
            Colour::WHITE,
            Colour::RED,
            Colour::GREEN,
            Colour::BLUE,
            Colour::YELLOW,
            Colour::CYAN,
            Colour::MAGENTA,
        ] {
            assert_eq!(c.to_hsb().to_colour(), c, "{:?}", c.to_hsb());
        }
        assert_eq!(Colour::RED.to_hsb(), Hsb::new(0.0, 1.0, 0.5));
        assert_eq!(Colour::WHITE.to_hsb(), Hsb::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn roundtrip() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(15) {
                    let c = Colour::from_rgb8(r, g, b);
                    let hsb = Hsb::from(c);
                    assert!((0.0..360.0).contains(&hsb.h), "{c:?} -> {hsb:?}");
                    assert!((0.0..=1.0).contains(&hsb.s), "{c:?} -> {hsb:?}");
                    assert_eq!(Colour::from(hsb), c, "{hsb:?}");
                }
            }
        }
    }

    #[test]
    fn out_of_range() {
        assert_eq!(Hsb::new(720.0, 1.0, 0.5).to_colour(), Colour::RED);
        assert_eq!(Hsb::new(-1e-9, 1.0, 0.5).to_colour(), Colour::RED);
        assert_eq!(Hsb::new(0.0, 2.0, -1.0).to_colour(), Colour::BLACK);
        assert_eq!(Hsb::new(200.0, -1.0, 1.5).to_colour(), Colour::WHITE);
    }

    #[test]
    fn index() {
        let mut hsb = Hsb::new(1.0, 0.5, 0.25);
        hsb[2] = 0.75;
        assert_eq!([hsb[0], hsb[1], hsb[2]], [1.0, 0.5, 0.75]);
        assert_eq!(hsb.to_array(), [1.0, 0.5, 0.75]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let _ = Hsb::default()[3];
    }
}
