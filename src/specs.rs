//! Icon Table - The Fixed iOS AppIcon Set
//!
//! Every run exports exactly these entries, in this order. The manifest lists
//! them in the same order.

use serde::{Deserialize, Serialize};

/// Device class an icon image targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Idiom {
    Iphone,
    Ipad,
    IosMarketing,
}

impl Idiom {
    pub fn as_str(&self) -> &'static str {
        match self {
            Idiom::Iphone => "iphone",
            Idiom::Ipad => "ipad",
            Idiom::IosMarketing => "ios-marketing",
        }
    }
}

/// One row of the icon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub idiom: Idiom,
    /// Nominal size in points, e.g. `"83.5x83.5"`.
    pub size: &'static str,
    /// Display scale, e.g. `"2x"`.
    pub scale: &'static str,
    /// Edge length of the exported PNG in pixels.
    pub pixels: u32,
    pub filename: &'static str,
}

const fn spec(
    idiom: Idiom,
    size: &'static str,
    scale: &'static str,
    pixels: u32,
    filename: &'static str,
) -> IconSpec {
    IconSpec { idiom, size, scale, pixels, filename }
}

pub const ICON_SPECS: [IconSpec; 18] = [
    spec(Idiom::Iphone, "20x20", "2x", 40, "AppIcon-20@2x.png"),
    spec(Idiom::Iphone, "20x20", "3x", 60, "AppIcon-20@3x.png"),
    spec(Idiom::Iphone, "29x29", "2x", 58, "AppIcon-29@2x.png"),
    spec(Idiom::Iphone, "29x29", "3x", 87, "AppIcon-29@3x.png"),
    spec(Idiom::Iphone, "40x40", "2x", 80, "AppIcon-40@2x.png"),
    spec(Idiom::Iphone, "40x40", "3x", 120, "AppIcon-40@3x.png"),
    spec(Idiom::Iphone, "60x60", "2x", 120, "AppIcon-60@2x.png"),
    spec(Idiom::Iphone, "60x60", "3x", 180, "AppIcon-60@3x.png"),
    spec(Idiom::Ipad, "20x20", "1x", 20, "AppIcon-20@1x.png"),
    spec(Idiom::Ipad, "20x20", "2x", 40, "AppIcon-20@2x~ipad.png"),
    spec(Idiom::Ipad, "29x29", "1x", 29, "AppIcon-29@1x~ipad.png"),
    spec(Idiom::Ipad, "29x29", "2x", 58, "AppIcon-29@2x~ipad.png"),
    spec(Idiom::Ipad, "40x40", "1x", 40, "AppIcon-40@1x~ipad.png"),
    spec(Idiom::Ipad, "40x40", "2x", 80, "AppIcon-40@2x~ipad.png"),
    spec(Idiom::Ipad, "76x76", "1x", 76, "AppIcon-76@1x.png"),
    spec(Idiom::Ipad, "76x76", "2x", 152, "AppIcon-76@2x.png"),
    spec(Idiom::Ipad, "83.5x83.5", "2x", 167, "AppIcon-83.5@2x.png"),
    spec(Idiom::IosMarketing, "1024x1024", "1x", 1024, "AppIcon-1024.png"),
];

impl IconSpec {
    /// Edge length in points, parsed from the size label.
    pub fn points(&self) -> Option<f64> {
        let (w, h) = self.size.split_once('x')?;
        if w != h {
            return None;
        }
        w.parse().ok()
    }

    /// Scale factor, parsed from the scale label.
    pub fn scale_factor(&self) -> Option<u32> {
        self.scale.strip_suffix('x')?.parse().ok()
    }

    /// Pixel edge implied by the labels, rounded to the nearest pixel.
    pub fn expected_pixels(&self) -> Option<u32> {
        Some((self.points()? * f64::from(self.scale_factor()?)).round() as u32)
    }
}
