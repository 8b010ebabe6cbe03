use crossterm::style::Color as CtColor;

/// Terminal colour. Indexed colours map onto the 256-colour palette, the
/// other variants are emitted as 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Indexed(u8),
    Rgb { r: u8, g: u8, b: u8 },
    Oklch { l: f32, c: f32, h: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn indexed(index: u8) -> Self {
        Self::Indexed(index)
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    /// Concrete RGB value. Indexed colours have no fixed RGB value and
    /// resolve to `None`.
    pub fn to_rgb(&self) -> Option<Rgb> {
        match *self {
            Self::Indexed(_) => None,
            Self::Rgb { r, g, b } => Some(Rgb::new(r, g, b)),
            Self::Oklch { l, c, h } => Some(oklch_to_rgb(l, c, h)),
        }
    }

    pub fn to_crossterm(&self) -> CtColor {
        match *self {
            Self::Indexed(index) => CtColor::AnsiValue(index),
            Self::Rgb { r, g, b } => CtColor::Rgb { r, g, b },
            Self::Oklch { l, c, h } => {
                let rgb = oklch_to_rgb(l, c, h);
                CtColor::Rgb {
                    r: rgb.r,
                    g: rgb.g,
                    b: rgb.b,
                }
            }
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::rgb(rgb.r, rgb.g, rgb.b)
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
