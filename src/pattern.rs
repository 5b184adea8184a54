//! Rules for choosing which nail pairs to string.

use std::str::FromStr;

use error::SymmographyError;
use layout::{NailLayout, Side, SideRuns};

/// A string to stretch between two nails, by layout index.
pub type Segment = (usize, usize);

/// An ordered sequence of strings to stretch across the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringPattern {
    segments: Vec<Segment>,
}

impl StringPattern {
    pub fn new(segments: Vec<Segment>) -> StringPattern {
        StringPattern { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// A policy mapping nail positions to a set of strings.
///
/// Rules are pure: the same layout and runs always produce the same
/// pattern. A rule may in principle emit a degenerate segment joining a
/// nail to itself; such segments are kept verbatim (they draw nothing).
/// The built-in rules never emit one.
pub trait PatternRule {
    /// A short human-readable name, for progress output.
    fn name(&self) -> &'static str;

    fn generate(
        &self,
        layout: &NailLayout,
        runs: &SideRuns,
    ) -> Result<StringPattern, SymmographyError>;
}

/// The classic weave: each nail on the top side pairs with the nail at
/// the same offset along the bottom run, and each nail on the right side
/// with the nail at the same offset along the left run.
///
/// Opposite runs wind in opposite directions, so the pairs mirror through
/// the center of the frame and every string crosses the interior. Produces
/// one string per top nail plus one per right nail.
#[derive(Debug, Clone, Copy)]
pub struct OppositeSides;

impl PatternRule for OppositeSides {
    fn name(&self) -> &'static str {
        "opposite"
    }

    fn generate(
        &self,
        _layout: &NailLayout,
        runs: &SideRuns,
    ) -> Result<StringPattern, SymmographyError> {
        let mut segments =
            Vec::with_capacity(runs.nails_per_width() + runs.nails_per_height());
        for offset in 0..runs.count(Side::Top) {
            segments.push((
                runs.index(Side::Top, offset),
                runs.index(Side::Bottom, offset),
            ));
        }
        for offset in 0..runs.count(Side::Right) {
            segments.push((
                runs.index(Side::Right, offset),
                runs.index(Side::Left, offset),
            ));
        }
        Ok(StringPattern::new(segments))
    }
}

/// Connect every nail to the nail `skip` places further along the
/// perimeter, wrapping around. Small skips outline the frame; larger
/// skips weave envelope curves across it.
#[derive(Debug, Clone, Copy)]
pub struct SkipChord {
    skip: usize,
}

impl SkipChord {
    pub fn new(skip: usize) -> Result<SkipChord, SymmographyError> {
        if skip == 0 {
            return Err(SymmographyError::invalid_parameter(
                "Chord skip must be at least 1.".to_owned(),
            ));
        }
        Ok(SkipChord { skip })
    }

    pub fn skip(&self) -> usize {
        self.skip
    }
}

impl PatternRule for SkipChord {
    fn name(&self) -> &'static str {
        "chord"
    }

    fn generate(
        &self,
        layout: &NailLayout,
        _runs: &SideRuns,
    ) -> Result<StringPattern, SymmographyError> {
        let total = layout.len();
        if total == 0 {
            return Err(SymmographyError::invalid_layout(
                "Cannot string chords over an empty layout.".to_owned(),
            ));
        }
        // Reduce once so the per-nail addition cannot overflow, however
        // large the configured skip is.
        let skip = self.skip % total;
        if skip == 0 {
            // Every chord would join a nail to itself.
            return Err(SymmographyError::invalid_parameter(format!(
                "A chord skip of {} degenerates on a layout of {} nails.",
                self.skip, total
            )));
        }
        let mut segments = Vec::with_capacity(total);
        for i in 0..total {
            segments.push((i, (i + skip) % total));
        }
        Ok(StringPattern::new(segments))
    }
}

/// Which built-in rule a board file asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleChoice {
    Opposite,
    Chord(usize),
}

impl FromStr for RuleChoice {
    type Err = SymmographyError;
    fn from_str(text: &str) -> Result<RuleChoice, SymmographyError> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("opposite") {
            return Ok(RuleChoice::Opposite);
        }
        if let Some(skip) = text.strip_prefix("chord-") {
            let skip = usize::from_str(skip).map_err(|_| {
                SymmographyError::invalid_parameter(format!(
                    "Was not able to read chord skip in rule '{}'.",
                    text
                ))
            })?;
            return Ok(RuleChoice::Chord(skip));
        }
        Err(SymmographyError::invalid_parameter(format!(
            concat!(
                "Did not recognize the rule '{}'. ",
                "Expected 'opposite' or 'chord-N'."
            ),
            text
        )))
    }
}

/// Run a pattern rule over a layout, checking that the layout size agrees
/// with the side runs and that every emitted index points at a real nail.
pub fn generate_strings<R>(
    layout: &NailLayout,
    runs: &SideRuns,
    rule: &R,
) -> Result<StringPattern, SymmographyError>
where
    R: PatternRule,
{
    if layout.len() != runs.total() {
        return Err(SymmographyError::invalid_layout(format!(
            "The layout has {} nails, but the side runs describe {}.",
            layout.len(),
            runs.total()
        )));
    }
    let pattern = rule.generate(layout, runs)?;
    for &(a, b) in pattern.segments() {
        for &index in [a, b].iter() {
            if index >= layout.len() {
                return Err(SymmographyError::IndexOutOfRange {
                    index,
                    len: layout.len(),
                });
            }
        }
    }
    Ok(pattern)
}
