//! 2D preview projection: canonical inches to display-unit rectangles.
//!
//! Coordinates follow the usual screen convention: origin at the top-left of
//! the render box, y increasing downward. The projection letterboxes rather
//! than stretches, so the frame rectangle always keeps the artwork's outer
//! aspect ratio regardless of the render box shape.

use serde::Serialize;

use crate::core::{Point, Rect, Size, Vec2};
use crate::resolve::ResolvedLayout;

/// The three stacked rectangles a preview draws, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Projection2D {
    /// Outer frame rectangle, letterboxed and centered in the render box.
    pub frame: Rect,
    /// Mat slab rectangle, centered in the frame.
    pub mat: Rect,
    /// Print (image) rectangle. Unequal mats shift it off the mat center,
    /// reproducing the physical object.
    pub print: Rect,
    /// Display units per inch.
    pub scale: f64,
}

/// Project canonical measurements into a render box.
///
/// Pure and allocation-free; safe to call on every redraw.
pub fn project_2d(layout: &ResolvedLayout, render_box: Size) -> Projection2D {
    let aspect = layout.aspect();
    let box_aspect = render_box.width / render_box.height;

    // Letterbox: fit the artwork's outer aspect into the box.
    let (frame_w, frame_h) = if box_aspect > aspect {
        (render_box.height * aspect, render_box.height)
    } else {
        (render_box.width, render_box.width / aspect)
    };
    let frame_origin = Point::new(
        (render_box.width - frame_w) / 2.0,
        (render_box.height - frame_h) / 2.0,
    );
    let frame = Rect::from_origin_size(frame_origin, Size::new(frame_w, frame_h));

    let scale = frame_w / layout.total_width;
    let center = frame.center();

    let mat = rect_centered_at(
        center,
        layout.opening_width() * scale,
        layout.opening_height() * scale,
    );

    // Unequal mats displace the print from the mat center; positive y is
    // down, so a heavier bottom mat lifts the print.
    let offset = Vec2::new(
        (layout.mats.left - layout.mats.right) / 2.0 * scale,
        (layout.mats.top - layout.mats.bottom) / 2.0 * scale,
    );
    let print = rect_centered_at(
        center + offset,
        layout.print_width * scale,
        layout.print_height * scale,
    );

    Projection2D {
        frame,
        mat,
        print,
        scale,
    }
}

fn rect_centered_at(center: Point, width: f64, height: f64) -> Rect {
    Rect::from_origin_size(
        Point::new(center.x - width / 2.0, center.y - height / 2.0),
        Size::new(width, height),
    )
}
