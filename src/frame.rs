//! Rectangular frames measured in physical units.

use error::SymmographyError;
use unit::Meters;
use util::{P2, V2};

/// The physical rectangle that nails are driven into.
///
/// Output coordinates put the y axis pointing down, so the "top" side of
/// the frame has the smallest y coordinate.
#[derive(Clone, Copy, PartialEq)]
pub struct Frame {
    width: Meters,
    height: Meters,
}

impl Frame {
    pub fn new(width: Meters, height: Meters) -> Result<Frame, SymmographyError> {
        if !(width.0.is_finite() && width.0 > 0.) {
            return Err(SymmographyError::invalid_parameter(format!(
                "Frame width must be a positive length, got {}.",
                width
            )));
        }
        if !(height.0.is_finite() && height.0 > 0.) {
            return Err(SymmographyError::invalid_parameter(format!(
                "Frame height must be a positive length, got {}.",
                height
            )));
        }
        Ok(Frame { width, height })
    }

    pub fn width(&self) -> Meters {
        self.width
    }

    pub fn height(&self) -> Meters {
        self.height
    }

    /// Corner positions in output coordinates, centered on `center`.
    /// Ordered top-left, top-right, bottom-right, bottom-left.
    pub fn corners_px(&self, center: P2, scale: f32) -> [P2; 4] {
        let half = V2::new(
            self.width.to_pixels(scale),
            self.height.to_pixels(scale),
        ) / 2.;
        [
            center + V2::new(-half.x, -half.y),
            center + V2::new(half.x, -half.y),
            center + V2::new(half.x, half.y),
            center + V2::new(-half.x, half.y),
        ]
    }

    /// Corner positions moved inward by `inset` along both axes, so that
    /// nails sit a little back from the physical edge of the frame.
    pub fn inset_corners_px(
        &self,
        center: P2,
        scale: f32,
        inset: Meters,
    ) -> Result<[P2; 4], SymmographyError> {
        if !(inset.0.is_finite() && inset.0 >= 0.) {
            return Err(SymmographyError::invalid_parameter(format!(
                "Nail border must be a non-negative length, got {}.",
                inset
            )));
        }
        let shorter = if self.width < self.height {
            self.width
        } else {
            self.height
        };
        if 2. * inset.0 >= shorter.0 {
            return Err(SymmographyError::invalid_parameter(format!(
                concat!(
                    "Nail border {} is too large for a {} by {} frame. ",
                    "Twice the border must be smaller than the shorter side."
                ),
                inset, self.width, self.height
            )));
        }
        let [tl, tr, br, bl] = self.corners_px(center, scale);
        let inset_px = inset.to_pixels(scale);
        Ok([
            tl + V2::new(inset_px, inset_px),
            tr + V2::new(-inset_px, inset_px),
            br + V2::new(-inset_px, -inset_px),
            bl + V2::new(inset_px, -inset_px),
        ])
    }
}

impl ::std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        write!(f, "Frame({} x {})", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(Frame::new(Meters(2.0), Meters(1.0)).is_ok());
        assert!(Frame::new(Meters(0.0), Meters(1.0)).is_err());
        assert!(Frame::new(Meters(2.0), Meters(-1.0)).is_err());
        assert!(Frame::new(Meters(::std::f32::NAN), Meters(1.0)).is_err());
    }

    #[test]
    fn test_corners() {
        let frame = Frame::new(Meters(2.0), Meters(1.0)).unwrap();
        let [tl, tr, br, bl] = frame.corners_px(P2::new(100., 50.), 100.);
        assert_eq!(tl, P2::new(0., 0.));
        assert_eq!(tr, P2::new(200., 0.));
        assert_eq!(br, P2::new(200., 100.));
        assert_eq!(bl, P2::new(0., 100.));
    }

    #[test]
    fn test_inset_corners() {
        let frame = Frame::new(Meters(2.0), Meters(1.0)).unwrap();
        let corners = frame
            .inset_corners_px(P2::new(100., 50.), 100., Meters(0.05))
            .unwrap();
        assert_eq!(corners[0], P2::new(5., 5.));
        assert_eq!(corners[1], P2::new(195., 5.));
        assert_eq!(corners[2], P2::new(195., 95.));
        assert_eq!(corners[3], P2::new(5., 95.));
    }

    #[test]
    fn test_inset_too_large() {
        let frame = Frame::new(Meters(2.0), Meters(1.0)).unwrap();
        let center = P2::new(0., 0.);
        // Half the shorter side collapses the drawable interior.
        assert!(frame.inset_corners_px(center, 100., Meters(0.5)).is_err());
        assert!(frame.inset_corners_px(center, 100., Meters(-0.1)).is_err());
        assert!(frame.inset_corners_px(center, 100., Meters(0.05)).is_ok());
    }
}
