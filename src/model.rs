//! The immutable artwork configuration value and its persisted record form.
//!
//! A configuration is constructed once by the editing surface, validated
//! here, and then only ever read. "Editing" a piece means constructing a new
//! value that carries the same id. The derived outer totals are computed at
//! construction and on decode; a caller- or record-supplied total is never
//! trusted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Catalog, FrameId};
use crate::core::{ColorRgba, CropRatio, FramingMode, MattingStyle, Vec2};
use crate::error::{FramecraftError, FramecraftResult};
use crate::resolve::{standard_mats, MatWidths};

/// Caller-supplied inputs for constructing an [`ArtworkConfiguration`].
///
/// In [`FramingMode::Standard`] the `mats` field is ignored; the layout
/// resolver derives all four mats from the referenced catalog frame.
#[derive(Clone, Debug)]
pub struct ArtworkParams {
    pub name: String,
    /// Raw encoded image bytes, decoded lazily by collaborators.
    pub image_data: Vec<u8>,
    pub crop_ratio: CropRatio,
    pub mats: MatWidths,
    /// Uniform rail thickness in inches, > 0.
    pub frame_width: f64,
    pub frame_color: ColorRgba,
    pub mat_color: ColorRgba,
    /// Final pan/zoom scale of the source image within the print, >= 0.
    pub image_scale: f64,
    /// Final pan offset of the source image within the print.
    pub image_offset: Vec2,
    pub framing_mode: FramingMode,
    pub matting_style: MattingStyle,
    pub standard_frame: Option<FrameId>,
    /// Entitlement passthrough; never consulted by geometry.
    pub free_ar_enabled: bool,
}

/// One framed artwork: print, mats, frame, and presentation metadata.
///
/// Immutable by construction. The per-axis invariant
/// `total = print + mats + 2 * frame_width` holds for every value of this
/// type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ArtworkRecord", into = "ArtworkRecord")]
pub struct ArtworkConfiguration {
    id: Uuid,
    created_at: DateTime<Utc>,
    name: String,
    image_data: Vec<u8>,
    crop_ratio: CropRatio,
    print_width: f64,
    print_height: f64,
    mats: MatWidths,
    frame_width: f64,
    frame_color: ColorRgba,
    mat_color: ColorRgba,
    image_scale: f64,
    image_offset: Vec2,
    framing_mode: FramingMode,
    matting_style: MattingStyle,
    standard_frame: Option<FrameId>,
    free_ar_enabled: bool,
    total_width: f64,
    total_height: f64,
}

impl ArtworkConfiguration {
    /// Construct and validate a new configuration with a fresh identity.
    pub fn new(params: ArtworkParams, catalog: &Catalog) -> FramecraftResult<Self> {
        Self::with_identity(Uuid::new_v4(), Utc::now(), params, catalog)
    }

    /// Construct with an existing identity, used when an edit replaces a
    /// previous value for the same piece.
    pub fn with_identity(
        id: Uuid,
        created_at: DateTime<Utc>,
        params: ArtworkParams,
        catalog: &Catalog,
    ) -> FramecraftResult<Self> {
        let (print_width, print_height) = params.crop_ratio.dimensions();

        let mats = match params.framing_mode {
            FramingMode::Custom => params.mats,
            FramingMode::Standard => {
                let Some(frame_id) = params.standard_frame else {
                    return Err(FramecraftError::frame_not_found(
                        "standard framing requires a frame selection",
                    ));
                };
                let Some(frame) = catalog.get(frame_id, print_width, print_height) else {
                    return Err(FramecraftError::frame_not_found(format!(
                        "{frame_id:?} is not in the catalog"
                    )));
                };
                if !frame.fits(print_width, print_height) {
                    return Err(FramecraftError::invalid_dimension(format!(
                        "frame {} is smaller than the {} print",
                        frame.description(),
                        params.crop_ratio.label()
                    )));
                }
                standard_mats(print_width, print_height, &frame, params.matting_style)
            }
        };

        validate_dimensions(
            print_width,
            print_height,
            mats,
            params.frame_width,
            params.image_scale,
        )?;

        Ok(Self {
            id,
            created_at,
            name: params.name,
            image_data: params.image_data,
            crop_ratio: params.crop_ratio,
            print_width,
            print_height,
            mats,
            frame_width: params.frame_width,
            frame_color: params.frame_color,
            mat_color: params.mat_color,
            image_scale: params.image_scale,
            image_offset: params.image_offset,
            framing_mode: params.framing_mode,
            matting_style: params.matting_style,
            standard_frame: params.standard_frame,
            free_ar_enabled: params.free_ar_enabled,
            total_width: print_width + mats.horizontal() + 2.0 * params.frame_width,
            total_height: print_height + mats.vertical() + 2.0 * params.frame_width,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_data(&self) -> &[u8] {
        &self.image_data
    }

    pub fn crop_ratio(&self) -> CropRatio {
        self.crop_ratio
    }

    pub fn print_width(&self) -> f64 {
        self.print_width
    }

    pub fn print_height(&self) -> f64 {
        self.print_height
    }

    pub fn mats(&self) -> MatWidths {
        self.mats
    }

    pub fn frame_width(&self) -> f64 {
        self.frame_width
    }

    pub fn frame_color(&self) -> ColorRgba {
        self.frame_color
    }

    pub fn mat_color(&self) -> ColorRgba {
        self.mat_color
    }

    pub fn image_scale(&self) -> f64 {
        self.image_scale
    }

    pub fn image_offset(&self) -> Vec2 {
        self.image_offset
    }

    pub fn framing_mode(&self) -> FramingMode {
        self.framing_mode
    }

    pub fn matting_style(&self) -> MattingStyle {
        self.matting_style
    }

    pub fn standard_frame(&self) -> Option<FrameId> {
        self.standard_frame
    }

    pub fn free_ar_enabled(&self) -> bool {
        self.free_ar_enabled
    }

    /// Derived outer width in inches.
    pub fn total_width(&self) -> f64 {
        self.total_width
    }

    /// Derived outer height in inches.
    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    /// Display string: `name (W" x H")`, or just the dimensions when the
    /// piece is unnamed.
    pub fn description(&self) -> String {
        let dims = format!("{:.1}\" x {:.1}\"", self.total_width, self.total_height);
        if self.name.is_empty() {
            dims
        } else {
            format!("{} ({dims})", self.name)
        }
    }

    /// Gallery display order: newest creation date first.
    pub fn sort_newest_first(items: &mut [ArtworkConfiguration]) {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }
}

fn validate_dimensions(
    print_width: f64,
    print_height: f64,
    mats: MatWidths,
    frame_width: f64,
    image_scale: f64,
) -> FramecraftResult<()> {
    fn require(cond: bool, msg: &str) -> FramecraftResult<()> {
        if cond {
            Ok(())
        } else {
            Err(FramecraftError::invalid_dimension(msg))
        }
    }

    require(
        print_width > 0.0 && print_height > 0.0,
        "print dimensions must be > 0",
    )?;
    require(
        mats.top >= 0.0 && mats.bottom >= 0.0 && mats.left >= 0.0 && mats.right >= 0.0,
        "mat widths must be >= 0",
    )?;
    require(frame_width > 0.0, "frame width must be > 0")?;
    require(image_scale >= 0.0, "image scale must be >= 0")?;
    Ok(())
}

/// Persisted keyed record for [`ArtworkConfiguration`].
///
/// Field names and color channel layout are a compatibility contract with
/// previously written galleries. `free_ar_enabled` defaults to `false` so
/// records written before the field existed still decode.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub image_data: Vec<u8>,
    pub crop_ratio: CropRatio,
    pub print_width: f64,
    pub print_height: f64,
    pub mat_top: f64,
    pub mat_bottom: f64,
    pub mat_left: f64,
    pub mat_right: f64,
    pub frame_width: f64,
    pub frame_color: ColorRgba,
    pub mat_color: ColorRgba,
    pub image_scale: f64,
    pub image_offset_x: f64,
    pub image_offset_y: f64,
    pub framing_mode: FramingMode,
    pub matting_style: MattingStyle,
    pub standard_frame: Option<FrameId>,
    /// Present since the AR entitlement launch; absent in older records.
    #[serde(default)]
    pub free_ar_enabled: bool,
    /// Stored for inspection only; recomputed on decode.
    pub total_width: f64,
    /// Stored for inspection only; recomputed on decode.
    pub total_height: f64,
}

impl From<ArtworkConfiguration> for ArtworkRecord {
    fn from(config: ArtworkConfiguration) -> Self {
        Self {
            id: config.id,
            created_at: config.created_at,
            name: config.name,
            image_data: config.image_data,
            crop_ratio: config.crop_ratio,
            print_width: config.print_width,
            print_height: config.print_height,
            mat_top: config.mats.top,
            mat_bottom: config.mats.bottom,
            mat_left: config.mats.left,
            mat_right: config.mats.right,
            frame_width: config.frame_width,
            frame_color: config.frame_color,
            mat_color: config.mat_color,
            image_scale: config.image_scale,
            image_offset_x: config.image_offset.x,
            image_offset_y: config.image_offset.y,
            framing_mode: config.framing_mode,
            matting_style: config.matting_style,
            standard_frame: config.standard_frame,
            free_ar_enabled: config.free_ar_enabled,
            total_width: config.total_width,
            total_height: config.total_height,
        }
    }
}

impl TryFrom<ArtworkRecord> for ArtworkConfiguration {
    type Error = FramecraftError;

    /// Decode a persisted record.
    ///
    /// Numeric invariants are enforced and the totals recomputed, but a
    /// standard-frame reference is deliberately not resolved here: a record
    /// may carry an id the current catalog no longer knows, and that
    /// degrades at resolve time instead of failing the whole gallery load.
    fn try_from(record: ArtworkRecord) -> FramecraftResult<Self> {
        let mats = MatWidths {
            top: record.mat_top,
            bottom: record.mat_bottom,
            left: record.mat_left,
            right: record.mat_right,
        };
        validate_dimensions(
            record.print_width,
            record.print_height,
            mats,
            record.frame_width,
            record.image_scale,
        )?;

        Ok(Self {
            id: record.id,
            created_at: record.created_at,
            name: record.name,
            image_data: record.image_data,
            crop_ratio: record.crop_ratio,
            print_width: record.print_width,
            print_height: record.print_height,
            mats,
            frame_width: record.frame_width,
            frame_color: record.frame_color,
            mat_color: record.mat_color,
            image_scale: record.image_scale,
            image_offset: Vec2::new(record.image_offset_x, record.image_offset_y),
            framing_mode: record.framing_mode,
            matting_style: record.matting_style,
            standard_frame: record.standard_frame,
            free_ar_enabled: record.free_ar_enabled,
            total_width: record.print_width + mats.horizontal() + 2.0 * record.frame_width,
            total_height: record.print_height + mats.vertical() + 2.0 * record.frame_width,
        })
    }
}
