//! Iteration count to color mapping via a full hue rotation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("iteration count {count} exceeds maximum {max_iter}")]
    IterationOutOfRange { count: u32, max_iter: u32 },
}

/// One of the six 60 degree hue wedges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueSector {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

impl HueSector {
    /// Hues of 360 and above fall into the last sector.
    pub fn from_hue(h: u32) -> Self {
        match h / 60 {
            0 => Self::Red,
            1 => Self::Yellow,
            2 => Self::Green,
            3 => Self::Cyan,
            4 => Self::Blue,
            _ => Self::Magenta,
        }
    }
}

/// 8-bit HSV to RGB. `s` and `v` are in 0..=255, `h` in degrees.
pub fn hsv_to_rgb(h: u32, s: u8, v: u8) -> (u8, u8, u8) {
    let (s, v) = (s as u32, v as u32);
    let f = (h % 60) * 255 / 60;
    let p = v * (255 - s) / 255;
    let q = v * (255 - s * f / 255) / 255;
    let t = v * (255 - s * (255 - f) / 255) / 255;
    // every term is bounded by v
    let (r, g, b) = match HueSector::from_hue(h) {
        HueSector::Red => (v, t, p),
        HueSector::Yellow => (q, v, p),
        HueSector::Green => (p, v, t),
        HueSector::Cyan => (p, q, v),
        HueSector::Blue => (t, p, v),
        HueSector::Magenta => (v, p, q),
    };
    (r as u8, g as u8, b as u8)
}

/// Color for an escape-time count. Points that never escaped are black,
/// everything else walks the hue wheel at full saturation and value.
pub fn map_to_color(n: u32, max_iter: u32) -> Result<Rgba, ColorError> {
    if n > max_iter {
        return Err(ColorError::IterationOutOfRange {
            count: n,
            max_iter,
        });
    }
    if n == max_iter {
        return Ok(Rgba::BLACK);
    }
    let hue = (n as f64 / max_iter as f64 * 360.0) as u32;
    let (r, g, b) = hsv_to_rgb(hue, 0xFF, 0xFF);
    Ok(Rgba::opaque(r, g, b))
}
