//! Read board parameters from csv files.

use std::path::Path;

use csv;

use error::{ResultExt, SymmographyError};
use frame::Frame;
use layout::SideRuns;
use pattern::RuleChoice;
use spec::BoardSpec;
use unit::Meters;

/// One row of a board file. Dimensional columns hold measurement text so
/// they can carry a unit suffix. Missing columns fall back to the stock
/// board: a 2.0 by 1.0 meter frame, 50 nails per side, a 5cm border,
/// 400 pixels per meter, and the opposite rule.
#[derive(Debug, Deserialize)]
struct RawBoard {
    #[serde(default = "default_width")]
    width: String,
    #[serde(default = "default_height")]
    height: String,
    #[serde(default = "default_nails")]
    nails_width: usize,
    #[serde(default = "default_nails")]
    nails_height: usize,
    #[serde(default = "default_border")]
    border: String,
    #[serde(default = "default_scale")]
    scale: f32,
    #[serde(default = "default_rule")]
    rule: String,
}

fn default_width() -> String {
    "2.0".to_owned()
}

fn default_height() -> String {
    "1.0".to_owned()
}

fn default_nails() -> usize {
    50
}

fn default_border() -> String {
    "0.05".to_owned()
}

fn default_scale() -> f32 {
    400.
}

fn default_rule() -> String {
    "opposite".to_owned()
}

/// Read a board file: a headered csv with one row of parameters.
pub fn load_board(path: &Path) -> Result<BoardSpec, SymmographyError> {
    println!("Loading file: '{:?}'.", path);
    let mut csv = csv::Reader::from_path(path)
        .map_err(SymmographyError::from)
        .with_context(|| format!("Could not read csv file: '{:?}'.", path))?;

    let raw: RawBoard = match csv.deserialize().next() {
        None => {
            return Err(SymmographyError::general(
                "Found no rows in board file.".to_owned(),
            ))
        }
        Some(row) => row.context("Could not read board file row.")?,
    };
    raw.into_spec()
        .with_context(|| format!("Could not use board file: '{:?}'.", path))
}

impl RawBoard {
    fn into_spec(self) -> Result<BoardSpec, SymmographyError> {
        let width = Meters::parse(&self.width)
            .context("Was unable to read the frame width.")?;
        let height = Meters::parse(&self.height)
            .context("Was unable to read the frame height.")?;
        let border = Meters::parse(&self.border)
            .context("Was unable to read the nail border.")?;
        let frame = Frame::new(width, height)?;
        let runs = SideRuns::new(self.nails_width, self.nails_height)?;
        let rule: RuleChoice = self.rule.parse()?;
        Ok(BoardSpec {
            frame,
            runs,
            nail_border: border,
            scale: self.scale,
            rule,
        })
    }
}
