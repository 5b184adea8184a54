//! Write generated nails and strings to csv files, for drilling
//! templates and stringing instructions.

use std::path::Path;

use csv;

use error::{ResultExt, SymmographyError};
use layout::{NailLayout, SideRuns};
use pattern::StringPattern;

#[derive(Debug, Serialize)]
struct NailRecord {
    nail: usize,
    side: &'static str,
    offset: usize,
    x: f32,
    y: f32,
}

#[derive(Debug, Serialize)]
struct StringRecord {
    string: usize,
    from: usize,
    to: usize,
}

/// Write one record per nail: its layout index, which side it sits on,
/// its offset along that side, and its output coordinates.
pub fn write_nails(
    path: &Path,
    layout: &NailLayout,
    runs: &SideRuns,
) -> Result<(), SymmographyError> {
    if layout.len() != runs.total() {
        return Err(SymmographyError::invalid_layout(format!(
            "The layout has {} nails, but the side runs describe {}.",
            layout.len(),
            runs.total()
        )));
    }
    println!("Saving csv file {:?}.", path);
    let mut writer = open_csv_writer(path)?;
    for (index, nail) in layout.nails().iter().enumerate() {
        let (side, offset) = runs.side_of(index).ok_or_else(|| {
            SymmographyError::general(
                "Nail index fell outside every side run.".to_owned(),
            )
        })?;
        writer.serialize(NailRecord {
            nail: index,
            side: side.name(),
            offset,
            x: nail.x,
            y: nail.y,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Write one record per string: its order in the pattern and the two
/// nails it stretches between.
pub fn write_strings(
    path: &Path,
    pattern: &StringPattern,
) -> Result<(), SymmographyError> {
    println!("Saving csv file {:?}.", path);
    let mut writer = open_csv_writer(path)?;
    for (index, &(from, to)) in pattern.segments().iter().enumerate() {
        writer.serialize(StringRecord {
            string: index,
            from,
            to,
        })?;
    }
    writer.flush()?;
    Ok(())
}

fn open_csv_writer(
    path: &Path,
) -> Result<csv::Writer<::std::fs::File>, SymmographyError> {
    csv::Writer::from_path(path)
        .map_err(SymmographyError::from)
        .with_context(|| format!("Could not write csv file: '{:?}'.", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;
    use std::process;

    use frame::Frame;
    use layout::{generate_nails, SideRuns};
    use pattern::{generate_strings, OppositeSides};
    use unit::Meters;
    use util::P2;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("symmography-{}-{}", process::id(), name));
        path
    }

    #[test]
    fn test_write_nails_and_strings() {
        let frame = Frame::new(Meters(2.0), Meters(1.0)).unwrap();
        let runs = SideRuns::new(3, 2).unwrap();
        let layout =
            generate_nails(&frame, runs, Meters(0.0), 100., P2::new(100., 50.))
                .unwrap();
        let pattern = generate_strings(&layout, &runs, &OppositeSides).unwrap();

        let nails_path = temp_path("nails.csv");
        write_nails(&nails_path, &layout, &runs).unwrap();
        let written = fs::read_to_string(&nails_path).unwrap();
        fs::remove_file(&nails_path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("nail,side,offset,x,y"));
        assert_eq!(lines.next(), Some("0,top,0,0.0,0.0"));
        assert_eq!(written.lines().count(), 11);

        let strings_path = temp_path("strings.csv");
        write_strings(&strings_path, &pattern).unwrap();
        let written = fs::read_to_string(&strings_path).unwrap();
        fs::remove_file(&strings_path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("string,from,to"));
        assert_eq!(lines.next(), Some("0,0,5"));
        assert_eq!(written.lines().count(), 6);
    }

    #[test]
    fn test_write_nails_checks_runs() {
        let frame = Frame::new(Meters(1.0), Meters(1.0)).unwrap();
        let runs = SideRuns::new(3, 3).unwrap();
        let layout =
            generate_nails(&frame, runs, Meters(0.0), 100., P2::new(0., 0.))
                .unwrap();
        let other_runs = SideRuns::new(4, 4).unwrap();
        let path = temp_path("mismatched-nails.csv");
        assert!(write_nails(&path, &layout, &other_runs).is_err());
    }
}
