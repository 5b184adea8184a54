extern crate csv;
extern crate failure;
extern crate nalgebra;
extern crate serde;
#[macro_use]
extern crate serde_derive;

mod unit;
mod error;
mod util;
mod frame;
mod layout;
mod pattern;
mod spec;
mod load;
mod export;

pub use error::{ResultExt, SymmographyError};
pub use export::{write_nails, write_strings};
pub use frame::Frame;
pub use layout::{generate_nails, NailLayout, Side, SideRuns};
pub use load::load_board;
pub use pattern::{generate_strings, OppositeSides, PatternRule, RuleChoice,
                  Segment, SkipChord, StringPattern};
pub use spec::BoardSpec;
pub use unit::Meters;
pub use util::{P2, V2};

use std::process;
use failure::Error;
use util::print_error;

pub fn try<F>(run: F)
where
    F: Fn() -> Result<(), Error>,
{
    if let Err(e) = run() {
        print_error(e);
        process::exit(1);
    }
    println!("Done.");
}
