//! Nail placement along the frame perimeter.

use std::ops::Range;

use error::SymmographyError;
use frame::Frame;
use unit::Meters;
use util::P2;

/// One side of the frame, in winding order.
///
/// Nails are enumerated clockwise starting from the top-left corner:
/// along the top left to right, down the right side, along the bottom
/// right to left, and back up the left side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn name(&self) -> &'static str {
        match *self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

/// How many nails each side holds, and therefore where each side's run
/// of indices begins and ends within a layout.
///
/// The top and bottom sides hold `nails_per_width` nails each, the right
/// and left sides `nails_per_height` each. Runs are contiguous and follow
/// the winding order, so the top run is `[0, npw)`, the right run
/// `[npw, npw + nph)`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideRuns {
    nails_per_width: usize,
    nails_per_height: usize,
}

impl SideRuns {
    pub fn new(
        nails_per_width: usize,
        nails_per_height: usize,
    ) -> Result<SideRuns, SymmographyError> {
        if nails_per_width == 0 || nails_per_height == 0 {
            return Err(SymmographyError::invalid_parameter(format!(
                "Each side needs at least one nail, got {} by {}.",
                nails_per_width, nails_per_height
            )));
        }
        Ok(SideRuns {
            nails_per_width,
            nails_per_height,
        })
    }

    pub fn nails_per_width(&self) -> usize {
        self.nails_per_width
    }

    pub fn nails_per_height(&self) -> usize {
        self.nails_per_height
    }

    /// The number of nails on the given side.
    pub fn count(&self, side: Side) -> usize {
        match side {
            Side::Top | Side::Bottom => self.nails_per_width,
            Side::Right | Side::Left => self.nails_per_height,
        }
    }

    /// The range of layout indices belonging to the given side.
    pub fn run(&self, side: Side) -> Range<usize> {
        let npw = self.nails_per_width;
        let nph = self.nails_per_height;
        match side {
            Side::Top => 0..npw,
            Side::Right => npw..npw + nph,
            Side::Bottom => npw + nph..2 * npw + nph,
            Side::Left => 2 * npw + nph..2 * (npw + nph),
        }
    }

    /// The layout index of the nail at `offset` within a side's run.
    pub fn index(&self, side: Side, offset: usize) -> usize {
        self.run(side).start + offset
    }

    /// The side a layout index belongs to, and its offset within that
    /// side's run. The inverse of `index()`.
    pub fn side_of(&self, index: usize) -> Option<(Side, usize)> {
        for &side in Side::ALL.iter() {
            let run = self.run(side);
            if run.contains(&index) {
                return Some((side, index - run.start));
            }
        }
        None
    }

    /// The total number of nails in a full layout.
    pub fn total(&self) -> usize {
        2 * (self.nails_per_width + self.nails_per_height)
    }
}

/// An ordered sequence of nail positions around the frame perimeter.
#[derive(Debug, Clone, PartialEq)]
pub struct NailLayout {
    nails: Vec<P2>,
}

impl NailLayout {
    pub fn len(&self) -> usize {
        self.nails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nails.is_empty()
    }

    pub fn nails(&self) -> &[P2] {
        &self.nails
    }

    pub fn get(&self, index: usize) -> Option<P2> {
        self.nails.get(index).cloned()
    }

    /// Build a layout directly from positions, for layouts that were not
    /// produced by `generate_nails` (hand-placed nails, tests).
    pub fn from_nails(nails: Vec<P2>) -> NailLayout {
        NailLayout { nails }
    }
}

/// Compute evenly spaced nail positions around the frame perimeter.
///
/// The frame is centered on `center` and converted to output coordinates
/// with `scale` (pixels per meter). Nails sit `inset` back from the
/// physical edge, spaced evenly along each side: the pitch on a side is
/// the side's inset length divided by one less than its nail count, so a
/// side's run spans from one inset corner to the next. Adjacent runs meet
/// at the inset corners, each corner backing the last nail of one run and
/// the first nail of the next.
///
/// Pure: identical inputs always produce the identical sequence.
pub fn generate_nails(
    frame: &Frame,
    runs: SideRuns,
    inset: Meters,
    scale: f32,
    center: P2,
) -> Result<NailLayout, SymmographyError> {
    if runs.nails_per_width() < 2 || runs.nails_per_height() < 2 {
        // One nail on a side leaves the pitch division undefined.
        return Err(SymmographyError::invalid_parameter(format!(
            "Each side needs at least two nails to define a pitch, got {} by {}.",
            runs.nails_per_width(),
            runs.nails_per_height()
        )));
    }
    if !(scale.is_finite() && scale > 0.) {
        return Err(SymmographyError::invalid_parameter(format!(
            "Scale must be a positive number of pixels per meter, got {}.",
            scale
        )));
    }

    let [top_left, top_right, bottom_right, bottom_left] =
        frame.inset_corners_px(center, scale, inset)?;

    let mut nails = Vec::with_capacity(runs.total());
    emit_side(&mut nails, top_left, top_right, runs.count(Side::Top));
    emit_side(&mut nails, top_right, bottom_right, runs.count(Side::Right));
    emit_side(&mut nails, bottom_right, bottom_left, runs.count(Side::Bottom));
    emit_side(&mut nails, bottom_left, top_left, runs.count(Side::Left));
    Ok(NailLayout { nails })
}

/// Emit `count` evenly spaced nails from `start` to `end`, inclusive.
fn emit_side(nails: &mut Vec<P2>, start: P2, end: P2, count: usize) {
    let pitch = (end - start) / (count - 1) as f32;
    for i in 0..count {
        nails.push(start + pitch * i as f32);
    }
}
