//! Layout resolution: the single source of truth for mat widths.
//!
//! Custom mode passes the user's per-edge mats through unchanged. Standard
//! mode derives all four mats from the slack between the chosen catalog
//! frame and the print, under one of two policies:
//!
//! - **Centered** splits horizontal slack between left/right and vertical
//!   slack between top/bottom.
//! - **Bottom-weighted** sets top/left/right to the horizontal half-slack
//!   and gives the bottom everything that remains of the vertical slack,
//!   producing the classic optical-center look. It is only offered when the
//!   centered vertical margin would exceed the horizontal one.
//!
//! Both renderers consume the resulting [`ResolvedLayout`] as-is and never
//! recompute mats on their own.

use serde::Serialize;

use crate::catalog::{Catalog, StandardFrame};
use crate::core::{FramingMode, MattingStyle};
use crate::model::ArtworkConfiguration;

/// Per-edge mat widths in inches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MatWidths {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl MatWidths {
    pub const ZERO: MatWidths = MatWidths {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };

    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}

/// The canonical measurement set both projections consume.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ResolvedLayout {
    pub print_width: f64,
    pub print_height: f64,
    pub mats: MatWidths,
    pub frame_width: f64,
    /// `print_width + mats.left + mats.right + 2 * frame_width`.
    pub total_width: f64,
    /// `print_height + mats.top + mats.bottom + 2 * frame_width`.
    pub total_height: f64,
}

impl ResolvedLayout {
    pub(crate) fn from_parts(
        print_width: f64,
        print_height: f64,
        mats: MatWidths,
        frame_width: f64,
    ) -> Self {
        Self {
            print_width,
            print_height,
            mats,
            frame_width,
            total_width: print_width + mats.horizontal() + 2.0 * frame_width,
            total_height: print_height + mats.vertical() + 2.0 * frame_width,
        }
    }

    /// Width of the mat opening area (mat slab) in inches.
    pub fn opening_width(&self) -> f64 {
        self.mats.left + self.print_width + self.mats.right
    }

    /// Height of the mat opening area (mat slab) in inches.
    pub fn opening_height(&self) -> f64 {
        self.mats.top + self.print_height + self.mats.bottom
    }

    /// Outer aspect ratio `total_width / total_height`.
    pub fn aspect(&self) -> f64 {
        self.total_width / self.total_height
    }
}

/// Whether the bottom-weighted style is a meaningful choice for this
/// print/frame pair.
///
/// True when the frame holds the print on both axes and the centered policy
/// would leave a taller vertical margin than horizontal. When false, only
/// the centered policy applies.
pub fn bottom_weighted_available(
    print_width: f64,
    print_height: f64,
    frame: &StandardFrame,
) -> bool {
    if !frame.fits(print_width, print_height) {
        return false;
    }
    let horizontal_margin = (frame.width - print_width) / 2.0;
    let vertical_margin = (frame.height - print_height) / 2.0;
    vertical_margin > horizontal_margin
}

/// Derive mat widths from a standard frame under the given style.
pub fn standard_mats(
    print_width: f64,
    print_height: f64,
    frame: &StandardFrame,
    style: MattingStyle,
) -> MatWidths {
    let horizontal_slack = frame.width - print_width;
    let vertical_slack = frame.height - print_height;

    if style == MattingStyle::BottomWeighted
        && bottom_weighted_available(print_width, print_height, frame)
    {
        let side = (horizontal_slack / 2.0).max(0.0);
        MatWidths {
            top: side,
            left: side,
            right: side,
            // The bottom absorbs all vertical slack the top did not take.
            bottom: (vertical_slack - side).max(0.0),
        }
    } else {
        MatWidths {
            top: (vertical_slack / 2.0).max(0.0),
            bottom: (vertical_slack / 2.0).max(0.0),
            left: (horizontal_slack / 2.0).max(0.0),
            right: (horizontal_slack / 2.0).max(0.0),
        }
    }
}

/// Resolve a configuration into the canonical measurement set.
///
/// Custom mode passes the stored mats through. Standard mode recomputes the
/// mats from the referenced catalog frame; a missing or stale frame
/// reference degrades to zero mats (the caller should re-prompt for a frame)
/// rather than failing the render.
#[tracing::instrument(skip(config, catalog), fields(id = %config.id()))]
pub fn resolve_layout(config: &ArtworkConfiguration, catalog: &Catalog) -> ResolvedLayout {
    let (print_width, print_height) = (config.print_width(), config.print_height());

    let mats = match config.framing_mode() {
        FramingMode::Custom => config.mats(),
        FramingMode::Standard => {
            let frame = config
                .standard_frame()
                .and_then(|id| catalog.get(id, print_width, print_height));
            match frame {
                Some(frame) => standard_mats(
                    print_width,
                    print_height,
                    &frame,
                    config.matting_style(),
                ),
                None => {
                    tracing::warn!(
                        id = %config.id(),
                        "standard frame reference unresolved; defaulting mats to zero"
                    );
                    MatWidths::ZERO
                }
            }
        }
    };

    ResolvedLayout::from_parts(print_width, print_height, mats, config.frame_width())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FrameId;
    use crate::core::{ColorRgba, CropRatio, Vec2};
    use crate::model::{ArtworkConfiguration, ArtworkParams};

    const TOL: f64 = 1e-9;

    fn frame(width: f64, height: f64) -> StandardFrame {
        StandardFrame {
            id: FrameId::Entry(0),
            name: "test".to_string(),
            width,
            height,
        }
    }

    fn standard_config(style: MattingStyle, frame_id: FrameId) -> ArtworkConfiguration {
        ArtworkConfiguration::new(
            ArtworkParams {
                name: String::new(),
                image_data: Vec::new(),
                crop_ratio: CropRatio::R11x14,
                mats: MatWidths::ZERO,
                frame_width: 1.0,
                frame_color: ColorRgba::BLACK,
                mat_color: ColorRgba::WHITE,
                image_scale: 1.0,
                image_offset: Vec2::ZERO,
                framing_mode: FramingMode::Standard,
                matting_style: style,
                standard_frame: Some(frame_id),
                free_ar_enabled: false,
            },
            &Catalog::builtin(),
        )
        .unwrap()
    }

    #[test]
    fn centered_mats_are_symmetric() {
        let mats = standard_mats(11.0, 14.0, &frame(16.0, 20.0), MattingStyle::Centered);
        assert!((mats.left - mats.right).abs() < TOL);
        assert!((mats.top - mats.bottom).abs() < TOL);
        assert!((mats.left - 2.5).abs() < TOL);
        assert!((mats.top - 3.0).abs() < TOL);
    }

    #[test]
    fn bottom_weighted_worked_example() {
        // print 11x14 in a 16x20: horizontal slack 5, vertical slack 6.
        let mats = standard_mats(11.0, 14.0, &frame(16.0, 20.0), MattingStyle::BottomWeighted);
        assert!((mats.left - 2.5).abs() < TOL);
        assert!((mats.right - 2.5).abs() < TOL);
        assert!((mats.top - 2.5).abs() < TOL);
        assert!((mats.bottom - 3.5).abs() < TOL);
    }

    #[test]
    fn bottom_weighted_falls_back_to_centered_when_ineligible() {
        // 14x11 in 20x16: vertical margin 2.5 == horizontal margin... no:
        // horizontal slack 6, vertical slack 5, so vertical margin (2.5) is
        // smaller than horizontal (3.0) and the style must not apply.
        let f = frame(20.0, 16.0);
        assert!(!bottom_weighted_available(14.0, 11.0, &f));
        let mats = standard_mats(14.0, 11.0, &f, MattingStyle::BottomWeighted);
        assert_eq!(mats, standard_mats(14.0, 11.0, &f, MattingStyle::Centered));
    }

    #[test]
    fn bottom_weighted_unavailable_on_exact_match() {
        let f = StandardFrame {
            id: FrameId::PrintSize,
            name: "Print Size".to_string(),
            width: 11.0,
            height: 14.0,
        };
        assert!(!bottom_weighted_available(11.0, 14.0, &f));
        let mats = standard_mats(11.0, 14.0, &f, MattingStyle::BottomWeighted);
        assert_eq!(mats, MatWidths::ZERO);
    }

    #[test]
    fn custom_mode_passes_mats_through() {
        let config = ArtworkConfiguration::new(
            ArtworkParams {
                name: String::new(),
                image_data: Vec::new(),
                crop_ratio: CropRatio::R4x5,
                mats: MatWidths {
                    top: 1.0,
                    bottom: 2.0,
                    left: 0.5,
                    right: 0.25,
                },
                frame_width: 0.75,
                frame_color: ColorRgba::BLACK,
                mat_color: ColorRgba::WHITE,
                image_scale: 1.0,
                image_offset: Vec2::ZERO,
                framing_mode: FramingMode::Custom,
                matting_style: MattingStyle::Centered,
                standard_frame: None,
                free_ar_enabled: false,
            },
            &Catalog::builtin(),
        )
        .unwrap();

        let layout = resolve_layout(&config, &Catalog::builtin());
        assert_eq!(
            layout.mats,
            MatWidths {
                top: 1.0,
                bottom: 2.0,
                left: 0.5,
                right: 0.25,
            }
        );
        assert!((layout.total_width - (4.0 + 0.75 + 2.0 * 0.75)).abs() < TOL);
        assert!((layout.total_height - (5.0 + 3.0 + 2.0 * 0.75)).abs() < TOL);
    }

    #[test]
    fn stale_frame_reference_degrades_to_zero_mats() {
        // A persisted record can reference a frame the current catalog no
        // longer knows. Decoding succeeds; resolving yields zero mats.
        let config = standard_config(MattingStyle::Centered, FrameId::Entry(6)); // 16x20
        let mut record = crate::model::ArtworkRecord::from(config);
        record.standard_frame = Some(FrameId::Entry(999));
        let stale = ArtworkConfiguration::try_from(record).unwrap();

        let layout = resolve_layout(&stale, &Catalog::builtin());
        assert_eq!(layout.mats, MatWidths::ZERO);
        assert!((layout.total_width - (11.0 + 2.0)).abs() < TOL);
        assert!((layout.total_height - (14.0 + 2.0)).abs() < TOL);
    }

    #[test]
    fn totals_hold_for_resolved_standard_layouts() {
        let config = standard_config(MattingStyle::BottomWeighted, FrameId::Entry(6));
        let layout = resolve_layout(&config, &Catalog::builtin());
        assert!(
            (layout.total_width
                - (layout.print_width + layout.mats.horizontal() + 2.0 * layout.frame_width))
                .abs()
                < TOL
        );
        assert!(
            (layout.total_height
                - (layout.print_height + layout.mats.vertical() + 2.0 * layout.frame_width))
                .abs()
                < TOL
        );
        // 16x20 frame: totals are frame size + twice the frame rails.
        assert!((layout.total_width - 18.0).abs() < TOL);
        assert!((layout.total_height - 22.0).abs() < TOL);
    }
}
