//! Framecraft turns a framed-artwork configuration (print size, per-edge
//! mats, frame width, optional standard-frame snapping) into one canonical
//! set of physical measurements, then projects that set into a proportional
//! 2D preview and a to-scale 3D assembly for AR placement. Both projections
//! consume the same [`ResolvedLayout`], so they agree on every dimension and
//! offset by construction.

#![forbid(unsafe_code)]

pub mod assembly;
pub mod catalog;
pub mod core;
pub mod error;
pub mod model;
pub mod project2d;
pub mod resolve;
pub mod texture;

pub use crate::assembly::{build_assembly, Assembly, PlacementSlot, Solid, SolidKind, Surface};
pub use crate::catalog::{Catalog, FrameId, StandardFrame};
pub use crate::core::{ColorRgba, CropRatio, FramingMode, MattingStyle, METERS_PER_INCH};
pub use crate::error::{FramecraftError, FramecraftResult};
pub use crate::model::{ArtworkConfiguration, ArtworkParams, ArtworkRecord};
pub use crate::project2d::{project_2d, Projection2D};
pub use crate::resolve::{
    bottom_weighted_available, resolve_layout, standard_mats, MatWidths, ResolvedLayout,
};
pub use crate::texture::{decode_texture, PreparedTexture};
