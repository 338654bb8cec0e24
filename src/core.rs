use serde::{Deserialize, Serialize};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Conversion factor from inches (the unit every configuration is authored
/// in) to meters (the unit the 3D assembly is built in).
pub const METERS_PER_INCH: f64 = 0.0254;

/// Named print aspect ratios a user can crop to.
///
/// Each variant corresponds to an exact commercial print size in inches, so
/// the variant both names the ratio and fixes the print dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropRatio {
    #[serde(rename = "2x3")]
    R2x3,
    #[serde(rename = "3x2")]
    R3x2,
    #[serde(rename = "4x5")]
    R4x5,
    #[serde(rename = "5x4")]
    R5x4,
    #[serde(rename = "4x6")]
    R4x6,
    #[serde(rename = "6x4")]
    R6x4,
    #[serde(rename = "5x7")]
    R5x7,
    #[serde(rename = "7x5")]
    R7x5,
    #[serde(rename = "11x14")]
    R11x14,
    #[serde(rename = "14x11")]
    R14x11,
    #[serde(rename = "16x20")]
    R16x20,
    #[serde(rename = "20x16")]
    R20x16,
    #[serde(rename = "20x24")]
    R20x24,
    #[serde(rename = "24x20")]
    R24x20,
    #[serde(rename = "22x28")]
    R22x28,
    #[serde(rename = "28x22")]
    R28x22,
    #[serde(rename = "24x36")]
    R24x36,
    #[serde(rename = "36x24")]
    R36x24,
}

impl CropRatio {
    /// Every ratio in declaration order, for pickers.
    pub const ALL: [CropRatio; 18] = [
        CropRatio::R2x3,
        CropRatio::R3x2,
        CropRatio::R4x5,
        CropRatio::R5x4,
        CropRatio::R4x6,
        CropRatio::R6x4,
        CropRatio::R5x7,
        CropRatio::R7x5,
        CropRatio::R11x14,
        CropRatio::R14x11,
        CropRatio::R16x20,
        CropRatio::R20x16,
        CropRatio::R20x24,
        CropRatio::R24x20,
        CropRatio::R22x28,
        CropRatio::R28x22,
        CropRatio::R24x36,
        CropRatio::R36x24,
    ];

    /// Exact print dimensions in inches as `(width, height)`.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            CropRatio::R2x3 => (2.0, 3.0),
            CropRatio::R3x2 => (3.0, 2.0),
            CropRatio::R4x5 => (4.0, 5.0),
            CropRatio::R5x4 => (5.0, 4.0),
            CropRatio::R4x6 => (4.0, 6.0),
            CropRatio::R6x4 => (6.0, 4.0),
            CropRatio::R5x7 => (5.0, 7.0),
            CropRatio::R7x5 => (7.0, 5.0),
            CropRatio::R11x14 => (11.0, 14.0),
            CropRatio::R14x11 => (14.0, 11.0),
            CropRatio::R16x20 => (16.0, 20.0),
            CropRatio::R20x16 => (20.0, 16.0),
            CropRatio::R20x24 => (20.0, 24.0),
            CropRatio::R24x20 => (24.0, 20.0),
            CropRatio::R22x28 => (22.0, 28.0),
            CropRatio::R28x22 => (28.0, 22.0),
            CropRatio::R24x36 => (24.0, 36.0),
            CropRatio::R36x24 => (36.0, 24.0),
        }
    }

    /// Aspect ratio `width / height`.
    pub fn ratio(self) -> f64 {
        let (w, h) = self.dimensions();
        w / h
    }

    /// Display label, e.g. `"11x14"`.
    pub fn label(self) -> &'static str {
        match self {
            CropRatio::R2x3 => "2x3",
            CropRatio::R3x2 => "3x2",
            CropRatio::R4x5 => "4x5",
            CropRatio::R5x4 => "5x4",
            CropRatio::R4x6 => "4x6",
            CropRatio::R6x4 => "6x4",
            CropRatio::R5x7 => "5x7",
            CropRatio::R7x5 => "7x5",
            CropRatio::R11x14 => "11x14",
            CropRatio::R14x11 => "14x11",
            CropRatio::R16x20 => "16x20",
            CropRatio::R20x16 => "20x16",
            CropRatio::R20x24 => "20x24",
            CropRatio::R24x20 => "24x20",
            CropRatio::R22x28 => "22x28",
            CropRatio::R28x22 => "28x22",
            CropRatio::R24x36 => "24x36",
            CropRatio::R36x24 => "36x24",
        }
    }
}

/// Which policy produced the mat widths of a configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FramingMode {
    /// Mat widths were entered per edge by the user.
    #[serde(rename = "Custom Mat")]
    Custom,
    /// Mat widths were derived from a standard catalog frame.
    #[serde(rename = "Standard Frame")]
    Standard,
}

/// How standard-frame slack is distributed into mats.
///
/// Only meaningful in [`FramingMode::Standard`], and only when the chosen
/// frame leaves more vertical than horizontal slack (see
/// [`bottom_weighted_available`](crate::resolve::bottom_weighted_available)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MattingStyle {
    #[serde(rename = "Centered")]
    Centered,
    #[serde(rename = "Bottom-Weighted")]
    BottomWeighted,
}

/// Straight-alpha color with normalized channels, serialized as a keyed
/// record of four numbers in `[0, 1]`.
///
/// The geometry core passes colors through untouched; interpretation is the
/// renderer's business.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorRgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub opacity: f64,
}

impl ColorRgba {
    pub const WHITE: ColorRgba = ColorRgba::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: ColorRgba = ColorRgba::rgba(0.0, 0.0, 0.0, 1.0);
    /// Neutral fallback used for the print slab when its texture cannot be
    /// decoded.
    pub const DARK_GRAY: ColorRgba = ColorRgba::rgba(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 1.0);

    pub const fn rgba(red: f64, green: f64, blue: f64, opacity: f64) -> Self {
        Self {
            red,
            green,
            blue,
            opacity,
        }
    }
}
