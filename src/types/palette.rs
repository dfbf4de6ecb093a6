//! The shared icon palette.
//!
//! Every icon builder draws with the same handful of semantic colours. The
//! palette is a `const`, so builders can share it across threads without any
//! synchronisation.

use super::Colour;

/// Named semantic colours used by the icon builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Primary foreground strokes.
    pub ink: Colour,
    /// Muted foreground: secondary lines, inactive markers.
    pub mist: Colour,
    /// Cool accent for playback and musical embellishments.
    pub accent: Colour,
    /// Warm accent for emphasis and the "current" element of a group.
    pub warm: Colour,
    /// Transport / destructive state.
    pub alert: Colour,
    /// Translucent decoration.
    pub haze: Colour,
}

/// The palette every builder in the standard catalog uses.
pub const PALETTE: Palette = Palette {
    ink: Colour::rgb(243, 246, 252),
    mist: Colour::rgb(220, 228, 242),
    accent: Colour::rgb(10, 132, 255),
    warm: Colour::rgb(255, 159, 10),
    alert: Colour::rgb(255, 69, 58),
    haze: Colour::new(120, 120, 255, 210),
};

impl Palette {
    /// Named swatches in declaration order.
    pub fn swatches(&self) -> [(&'static str, Colour); 6] {
        [
            ("ink", self.ink),
            ("mist", self.mist),
            ("accent", self.accent),
            ("warm", self.warm),
            ("alert", self.alert),
            ("haze", self.haze),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_names_are_unique() {
        let swatches = PALETTE.swatches();
        for (i, (name, _)) in swatches.iter().enumerate() {
            assert!(swatches[i + 1..].iter().all(|(other, _)| other != name));
        }
    }

    #[test]
    fn test_only_haze_is_translucent() {
        for (name, colour) in PALETTE.swatches() {
            if name == "haze" {
                assert!(!colour.is_opaque());
            } else {
                assert!(colour.is_opaque(), "{name} should be opaque");
            }
        }
    }

    #[test]
    fn test_accents_are_distinct_from_ink() {
        assert_ne!(PALETTE.warm, PALETTE.mist);
        assert_ne!(PALETTE.accent, PALETTE.ink);
        assert_ne!(PALETTE.alert, PALETTE.warm);
    }
}
