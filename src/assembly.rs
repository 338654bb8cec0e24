//! 3D assembly: canonical inches into positioned solids in meters.
//!
//! The assembly's local coordinate convention is part of the crate contract:
//! the back face of the frame lies on the anchor plane at `z = 0`, x grows
//! to the viewer's right, y grows upward, and z grows outward from the wall.
//! An AR placement collaborator composes the whole assembly under one anchor
//! transform; it never repositions individual solids.
//!
//! The frame is built from four rails rather than one hollow box. That is a
//! material/visual choice (each rail can carry its own texture coordinates),
//! not a physical necessity.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use glam::{DQuat, DVec3};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::core::{ColorRgba, METERS_PER_INCH};
use crate::model::ArtworkConfiguration;
use crate::resolve::ResolvedLayout;
use crate::texture::{decode_texture, PreparedTexture};

/// Rail depth as a fraction of rail width. Aesthetic constant, not
/// user-configurable.
pub const FRAME_DEPTH_RATIO: f64 = 0.75;
/// Mat slab depth in meters.
pub const MAT_DEPTH_M: f64 = 0.002;
/// Print slab depth in meters.
pub const PRINT_DEPTH_M: f64 = 0.001;
/// Front-to-front spacing between consecutive layers in meters.
const LAYER_STEP_M: f64 = 0.001;

/// Which part of the assembly a solid is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SolidKind {
    RailTop,
    RailBottom,
    RailLeft,
    RailRight,
    Mat,
    Print,
}

/// Surface of a solid: a flat color or a decoded texture.
#[derive(Clone, Debug, PartialEq)]
pub enum Surface {
    Color(ColorRgba),
    Texture(PreparedTexture),
}

// Serialized form carries texture dimensions only; pixel payloads stay
// in-process.
impl Serialize for Surface {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Surface::Color(c) => {
                let mut s = serializer.serialize_struct("Surface", 1)?;
                s.serialize_field("color", c)?;
                s.end()
            }
            Surface::Texture(t) => {
                let mut s = serializer.serialize_struct("Surface", 2)?;
                s.serialize_field("texture_width", &t.width)?;
                s.serialize_field("texture_height", &t.height)?;
                s.end()
            }
        }
    }
}

/// One axis-aligned rectangular solid, sized and positioned in meters in the
/// assembly's local space.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Solid {
    pub kind: SolidKind,
    /// Extents along (x, y, z).
    pub size: DVec3,
    /// Center position in local space.
    pub position: DVec3,
    /// Local rotation; identity for every solid in this assembly.
    pub rotation: DQuat,
    pub surface: Surface,
}

/// Local transform of the whole assembly relative to its anchor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AnchorTransform {
    pub position: DVec3,
    pub rotation: DQuat,
}

impl AnchorTransform {
    pub const IDENTITY: AnchorTransform = AnchorTransform {
        position: DVec3::ZERO,
        rotation: DQuat::IDENTITY,
    };
}

/// The complete placed object: four rails, a mat slab, and a print slab.
///
/// Treat an assembly as atomic: attach all six solids or none. A consumer
/// must never show a partial stack while a texture is still decoding;
/// [`build_assembly`] therefore decodes (or falls back) before returning.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Assembly {
    pub solids: Vec<Solid>,
    pub root: AnchorTransform,
}

impl Assembly {
    pub fn solid(&self, kind: SolidKind) -> &Solid {
        self.solids
            .iter()
            .find(|s| s.kind == kind)
            .expect("assembly always carries all six solids")
    }
}

/// Build the to-scale assembly for a configuration.
///
/// An undecodable image degrades to a neutral flat color on the print slab;
/// it never fails the assembly.
#[tracing::instrument(skip(config, layout), fields(id = %config.id()))]
pub fn build_assembly(config: &ArtworkConfiguration, layout: &ResolvedLayout) -> Assembly {
    let print_surface = match decode_texture(config.image_data()) {
        Ok(texture) => Surface::Texture(texture),
        Err(err) => {
            tracing::warn!(id = %config.id(), %err, "print texture unavailable, using fallback color");
            Surface::Color(ColorRgba::DARK_GRAY)
        }
    };
    build_assembly_with_surface(config, layout, print_surface)
}

fn build_assembly_with_surface(
    config: &ArtworkConfiguration,
    layout: &ResolvedLayout,
    print_surface: Surface,
) -> Assembly {
    let total_w = layout.total_width * METERS_PER_INCH;
    let total_h = layout.total_height * METERS_PER_INCH;
    let rail_w = layout.frame_width * METERS_PER_INCH;
    let frame_depth = rail_w * FRAME_DEPTH_RATIO;

    let frame_surface = Surface::Color(config.frame_color());
    let mat_surface = Surface::Color(config.mat_color());

    // Rails sit with their back faces on the anchor plane.
    let rail_z = frame_depth / 2.0;
    let dy = (total_h - rail_w) / 2.0;
    let dx = (total_w - rail_w) / 2.0;
    let side_h = total_h - 2.0 * rail_w;

    let mut solids = vec![
        Solid {
            kind: SolidKind::RailTop,
            size: DVec3::new(total_w, rail_w, frame_depth),
            position: DVec3::new(0.0, dy, rail_z),
            rotation: DQuat::IDENTITY,
            surface: frame_surface.clone(),
        },
        Solid {
            kind: SolidKind::RailBottom,
            size: DVec3::new(total_w, rail_w, frame_depth),
            position: DVec3::new(0.0, -dy, rail_z),
            rotation: DQuat::IDENTITY,
            surface: frame_surface.clone(),
        },
        Solid {
            kind: SolidKind::RailLeft,
            size: DVec3::new(rail_w, side_h, frame_depth),
            position: DVec3::new(-dx, 0.0, rail_z),
            rotation: DQuat::IDENTITY,
            surface: frame_surface.clone(),
        },
        Solid {
            kind: SolidKind::RailRight,
            size: DVec3::new(rail_w, side_h, frame_depth),
            position: DVec3::new(dx, 0.0, rail_z),
            rotation: DQuat::IDENTITY,
            surface: frame_surface,
        },
    ];

    // The mat's back face is flush with the frame's front face; the print
    // steps out one more layer.
    let mat_z = frame_depth + LAYER_STEP_M;
    solids.push(Solid {
        kind: SolidKind::Mat,
        size: DVec3::new(
            layout.opening_width() * METERS_PER_INCH,
            layout.opening_height() * METERS_PER_INCH,
            MAT_DEPTH_M,
        ),
        position: DVec3::new(0.0, 0.0, mat_z),
        rotation: DQuat::IDENTITY,
        surface: mat_surface,
    });
    // Unequal mats shift the print off the mat center, exactly as the 2D
    // preview draws it (y is up here, down there).
    let print_dx = (layout.mats.left - layout.mats.right) / 2.0 * METERS_PER_INCH;
    let print_dy = (layout.mats.bottom - layout.mats.top) / 2.0 * METERS_PER_INCH;
    solids.push(Solid {
        kind: SolidKind::Print,
        size: DVec3::new(
            layout.print_width * METERS_PER_INCH,
            layout.print_height * METERS_PER_INCH,
            PRINT_DEPTH_M,
        ),
        position: DVec3::new(print_dx, print_dy, mat_z + LAYER_STEP_M),
        rotation: DQuat::IDENTITY,
        surface: print_surface,
    });

    Assembly {
        solids,
        root: AnchorTransform::IDENTITY,
    }
}

/// Single-owner slot for "the currently placed object".
///
/// A placement that finishes after a newer one has begun is superseded and
/// discarded, so a slow texture decode can never clobber a fresher
/// placement. This is the only mutable shared state in the crate.
#[derive(Debug, Default)]
pub struct PlacementSlot {
    generation: AtomicU64,
    current: Mutex<Option<Assembly>>,
}

/// Claim ticket for one placement attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementToken(u64);

impl PlacementSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new placement, superseding any still in flight.
    pub fn begin(&self) -> PlacementToken {
        PlacementToken(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Install a finished assembly if its placement is still the newest.
    ///
    /// Returns `false` when the token was superseded; the assembly is
    /// dropped rather than attached.
    pub fn complete(&self, token: PlacementToken, assembly: Assembly) -> bool {
        if self.generation.load(Ordering::SeqCst) != token.0 {
            tracing::debug!(generation = token.0, "placement superseded, discarding");
            return false;
        }
        let mut current = self.current.lock().expect("placement slot poisoned");
        // Re-check under the lock so two racing completions cannot both win.
        if self.generation.load(Ordering::SeqCst) != token.0 {
            return false;
        }
        *current = Some(assembly);
        true
    }

    /// The currently placed assembly, if any.
    pub fn placed(&self) -> Option<Assembly> {
        self.current.lock().expect("placement slot poisoned").clone()
    }

    /// Remove the placed object, e.g. when the AR session ends.
    pub fn clear(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        *self.current.lock().expect("placement slot poisoned") = None;
    }
}
