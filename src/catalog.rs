use serde::{Deserialize, Serialize};

/// Stable reference to a frame choice.
///
/// Catalog entries are addressed by their declaration index so a persisted
/// reference survives app restarts (the catalog is fixed and append-only).
/// The exact-match entry is synthesized per print size and has no index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameId {
    /// The synthesized "Print Size" frame: exactly the print dimensions.
    PrintSize,
    /// Index into [`Catalog`] declaration order.
    Entry(u16),
}

/// A frame outer size a user can pick, either a fixed commercial size or the
/// synthesized exact match for the current print.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardFrame {
    pub id: FrameId,
    pub name: String,
    /// Outer width in inches.
    pub width: f64,
    /// Outer height in inches.
    pub height: f64,
}

impl StandardFrame {
    /// `true` when the frame can hold a print of the given size.
    pub fn fits(&self, print_width: f64, print_height: f64) -> bool {
        self.width >= print_width && self.height >= print_height
    }

    /// Human-readable description matching the picker labels, e.g.
    /// `8x10 (portrait) - 8" x 10"` or `10.0" x 8.0" (Exact Match)`.
    pub fn description(&self) -> String {
        if self.id == FrameId::PrintSize {
            return format!("{:.1}\" x {:.1}\" (Exact Match)", self.width, self.height);
        }

        fn fmt_in(v: f64) -> String {
            if v.fract() == 0.0 {
                format!("{v:.0}")
            } else {
                format!("{v:.1}")
            }
        }

        format!(
            "{} - {}\" x {}\"",
            self.name,
            fmt_in(self.width),
            fmt_in(self.height)
        )
    }
}

const ENTRIES: &[(&str, f64, f64)] = &[
    // Portrait
    ("4x6 (portrait)", 4.0, 6.0),
    ("5x7 (portrait)", 5.0, 7.0),
    ("8x10 (portrait)", 8.0, 10.0),
    ("8.5x11 (portrait)", 8.5, 11.0),
    ("11x14 (portrait)", 11.0, 14.0),
    ("12x16 (portrait)", 12.0, 16.0),
    ("16x20 (portrait)", 16.0, 20.0),
    ("18x24 (portrait)", 18.0, 24.0),
    ("20x30 (portrait)", 20.0, 30.0),
    ("24x36 (portrait)", 24.0, 36.0),
    // Landscape
    ("6x4 (landscape)", 6.0, 4.0),
    ("7x5 (landscape)", 7.0, 5.0),
    ("10x8 (landscape)", 10.0, 8.0),
    ("11x8.5 (landscape)", 11.0, 8.5),
    ("14x11 (landscape)", 14.0, 11.0),
    ("16x12 (landscape)", 16.0, 12.0),
    ("20x16 (landscape)", 20.0, 16.0),
    ("24x18 (landscape)", 24.0, 18.0),
    ("30x20 (landscape)", 30.0, 20.0),
    ("36x24 (landscape)", 36.0, 24.0),
];

/// The fixed, ordered set of commercial frame sizes.
///
/// Declaration order is a stability contract: persisted [`FrameId::Entry`]
/// values index into it, and it breaks area ties in
/// [`frames_fitting`](Catalog::frames_fitting).
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<(&'static str, f64, f64)>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The built-in commercial sizes: portrait and landscape 4x6 through
    /// 36x24 plus a few odd sizes like 8.5x11.
    pub fn builtin() -> Self {
        Self {
            entries: ENTRIES.to_vec(),
        }
    }

    /// Look up a frame by id for a given print size.
    ///
    /// `FrameId::PrintSize` synthesizes the exact-match entry; a stale
    /// `FrameId::Entry` (index past the end of the catalog) returns `None`.
    pub fn get(&self, id: FrameId, print_width: f64, print_height: f64) -> Option<StandardFrame> {
        match id {
            FrameId::PrintSize => Some(StandardFrame {
                id: FrameId::PrintSize,
                name: "Print Size".to_string(),
                width: print_width,
                height: print_height,
            }),
            FrameId::Entry(i) => {
                let (name, width, height) = *self.entries.get(usize::from(i))?;
                Some(StandardFrame {
                    id,
                    name: name.to_string(),
                    width,
                    height,
                })
            }
        }
    }

    /// Every frame that can hold a print of the given size, smallest first.
    ///
    /// The synthesized exact-match entry is always included. The result is
    /// sorted ascending by outer area; equal areas keep their relative order
    /// (exact match first, then declaration order). The ordering is a
    /// user-facing contract and must stay deterministic.
    pub fn frames_fitting(&self, print_width: f64, print_height: f64) -> Vec<StandardFrame> {
        let mut frames = Vec::with_capacity(self.entries.len() + 1);
        frames.push(StandardFrame {
            id: FrameId::PrintSize,
            name: "Print Size".to_string(),
            width: print_width,
            height: print_height,
        });

        for (i, &(name, width, height)) in self.entries.iter().enumerate() {
            if width >= print_width && height >= print_height {
                frames.push(StandardFrame {
                    id: FrameId::Entry(i as u16),
                    name: name.to_string(),
                    width,
                    height,
                });
            }
        }

        // Stable sort keeps the exact match ahead of an equal-area catalog
        // entry and preserves declaration order between equal areas.
        frames.sort_by(|a, b| (a.width * a.height).total_cmp(&(b.width * b.height)));
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_comes_first_on_catalog_sizes() {
        let catalog = Catalog::builtin();
        let frames = catalog.frames_fitting(11.0, 14.0);
        assert_eq!(frames[0].id, FrameId::PrintSize);
        assert_eq!(frames[0].name, "Print Size");
        assert_eq!((frames[0].width, frames[0].height), (11.0, 14.0));
        // 11x14 is itself a catalog size with the same area, so it must come
        // second, after the synthesized exact match.
        assert_eq!(frames[1].name, "11x14 (portrait)");
    }

    #[test]
    fn never_returns_a_frame_smaller_than_the_print() {
        let catalog = Catalog::builtin();
        for frame in catalog.frames_fitting(8.5, 11.0) {
            assert!(frame.width >= 8.5 && frame.height >= 11.0, "{frame:?}");
        }
    }

    #[test]
    fn sorted_ascending_by_area_with_declaration_order_ties() {
        let catalog = Catalog::builtin();
        let frames = catalog.frames_fitting(2.0, 2.0);
        let areas: Vec<f64> = frames.iter().map(|f| f.width * f.height).collect();
        for pair in areas.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        // 4x6 portrait and 6x4 landscape tie on area; portrait is declared
        // first and must stay first.
        let p = frames
            .iter()
            .position(|f| f.name == "4x6 (portrait)")
            .unwrap();
        let l = frames
            .iter()
            .position(|f| f.name == "6x4 (landscape)")
            .unwrap();
        assert!(p < l);
    }

    #[test]
    fn stale_entry_id_resolves_to_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.get(FrameId::Entry(999), 4.0, 6.0).is_none());
        assert!(catalog.get(FrameId::Entry(0), 4.0, 6.0).is_some());
    }

    #[test]
    fn descriptions_match_picker_labels() {
        let catalog = Catalog::builtin();
        let exact = catalog.get(FrameId::PrintSize, 10.0, 8.0).unwrap();
        assert_eq!(exact.description(), "10.0\" x 8.0\" (Exact Match)");

        let odd = catalog.get(FrameId::Entry(3), 4.0, 6.0).unwrap();
        assert_eq!(odd.description(), "8.5x11 (portrait) - 8.5\" x 11\"");

        let whole = catalog.get(FrameId::Entry(2), 4.0, 6.0).unwrap();
        assert_eq!(whole.description(), "8x10 (portrait) - 8\" x 10\"");
    }
}
