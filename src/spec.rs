//! Parameters describing one string-art board.

use error::SymmographyError;
use frame::Frame;
use layout::{generate_nails, NailLayout, SideRuns};
use pattern::{generate_strings, OppositeSides, RuleChoice, SkipChord,
              StringPattern};
use unit::Meters;
use util::P2;

/// Everything needed for one generation run: the physical frame, the nail
/// counts, how far nails sit back from the edge, the pixels-per-meter
/// scale, and which stringing rule to apply.
#[derive(Debug, Clone, Copy)]
pub struct BoardSpec {
    pub frame: Frame,
    pub runs: SideRuns,
    pub nail_border: Meters,
    pub scale: f32,
    pub rule: RuleChoice,
}

impl BoardSpec {
    /// Place the board's nails, centered on the given point.
    pub fn nail_layout(
        &self,
        center: P2,
    ) -> Result<NailLayout, SymmographyError> {
        generate_nails(
            &self.frame,
            self.runs,
            self.nail_border,
            self.scale,
            center,
        )
    }

    /// String the board's configured rule over a layout of its nails.
    pub fn string_pattern(
        &self,
        layout: &NailLayout,
    ) -> Result<StringPattern, SymmographyError> {
        match self.rule {
            RuleChoice::Opposite => {
                generate_strings(layout, &self.runs, &OppositeSides)
            }
            RuleChoice::Chord(skip) => {
                let rule = SkipChord::new(skip)?;
                generate_strings(layout, &self.runs, &rule)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rule: RuleChoice) -> BoardSpec {
        BoardSpec {
            frame: Frame::new(Meters(2.0), Meters(1.0)).unwrap(),
            runs: SideRuns::new(3, 2).unwrap(),
            nail_border: Meters(0.0),
            scale: 100.,
            rule,
        }
    }

    #[test]
    fn test_whole_run() {
        let board = board(RuleChoice::Opposite);
        let layout = board.nail_layout(P2::new(0., 0.)).unwrap();
        assert_eq!(layout.len(), 10);
        let strings = board.string_pattern(&layout).unwrap();
        assert_eq!(strings.len(), 5);
    }

    #[test]
    fn test_chord_rule_run() {
        let board = board(RuleChoice::Chord(3));
        let layout = board.nail_layout(P2::new(0., 0.)).unwrap();
        let strings = board.string_pattern(&layout).unwrap();
        assert_eq!(strings.len(), 10);
    }
}
