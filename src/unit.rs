use std::fmt;
use std::str::FromStr;

use error::SymmographyError;

/// A physical measurement, stored in meters.
///
/// Board files may write measurements with an explicit metric suffix
/// ("0.05m", "5cm", "50mm") or as a bare number of meters ("0.05").
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Meters(pub f32);

impl Meters {
    pub fn parse(text: &str) -> Result<Meters, SymmographyError> {
        fn parse_number(
            number: &str,
            text: &str,
        ) -> Result<f32, SymmographyError> {
            match f32::from_str(number.trim()) {
                Ok(x) if x.is_finite() => Ok(x),
                _ => Err(SymmographyError::General(format!(
                    concat!(
                        "Was not able to read number in measurement '{}'. ",
                        "Expected formatting like 1.5, 1.5m, 150cm or 1500mm."
                    ),
                    text
                ))),
            }
        }

        let trimmed = text.trim();
        // "mm" must be tried before "m".
        if let Some(number) = trimmed.strip_suffix("mm") {
            Ok(Meters(parse_number(number, text)? / 1000.))
        } else if let Some(number) = trimmed.strip_suffix("cm") {
            Ok(Meters(parse_number(number, text)? / 100.))
        } else if let Some(number) = trimmed.strip_suffix('m') {
            Ok(Meters(parse_number(number, text)?))
        } else {
            Ok(Meters(parse_number(trimmed, text)?))
        }
    }

    /// Convert to output coordinates, given a scale in pixels per meter.
    pub fn to_pixels(self, scale: f32) -> f32 {
        self.0 * scale
    }
}

impl FromStr for Meters {
    type Err = SymmographyError;
    fn from_str(text: &str) -> Result<Meters, SymmographyError> {
        Meters::parse(text)
    }
}

impl fmt::Debug for Meters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let meters = self.0;
        if meters.abs() >= 1. || meters == 0. {
            write!(f, "{}m", meters)
        } else if meters.abs() >= 0.01 {
            write!(f, "{}cm", meters * 100.)
        } else {
            write!(f, "{}mm", meters * 1000.)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Meters::parse("1.5").unwrap(), Meters(1.5));
        assert_eq!(Meters::parse("2m").unwrap(), Meters(2.0));
        assert_eq!(Meters::parse(" 0.05 ").unwrap(), Meters(0.05));
        assert_eq!(Meters::parse("150cm").unwrap(), Meters(1.5));
        assert_eq!(Meters::parse("50mm").unwrap(), Meters(0.05));
        assert_eq!(Meters::parse("1500 mm").unwrap(), Meters(1.5));

        assert!(Meters::parse("").is_err());
        assert!(Meters::parse("five").is_err());
        assert!(Meters::parse("1.5km").is_err());
        assert!(Meters::parse("NaN").is_err());
        assert!(Meters::parse("inf").is_err());
    }

    #[test]
    fn test_to_pixels() {
        assert_eq!(Meters(2.0).to_pixels(400.), 800.);
        assert_eq!(Meters(0.05).to_pixels(400.), 20.);
    }

    #[test]
    fn test_printing() {
        assert_eq!(&format!("{:?}", Meters(1.5)), "1.5m");
        assert_eq!(&format!("{}", Meters(2.0)), "2m");
        assert_eq!(&format!("{}", Meters(0.5)), "50cm");
        assert_eq!(&format!("{}", Meters(0.005)), "5mm");
        assert_eq!(&format!("{}", Meters(0.0)), "0m");
    }
}
