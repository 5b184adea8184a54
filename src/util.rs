use failure::Error;
use nalgebra::{Point2, Vector2};

pub type P2 = Point2<f32>;
pub type V2 = Vector2<f32>;

// How near coordinates must be to be considered equal, in pixels.
pub const EQUALITY_THRESHOLD: f32 = 0.001;

pub fn practically_zero(x: f32) -> bool {
    f32::abs(x) < EQUALITY_THRESHOLD
}

pub fn practically_equal(a: f32, b: f32) -> bool {
    practically_zero(a - b)
}

pub fn distance(a: &P2, b: &P2) -> f32 {
    (a - b).norm()
}

pub fn print_error(error: Error) {
    println!("\nError: {}", error);
    let mut fail = error.as_fail();
    while let Some(cause) = fail.cause() {
        println!("Cause: {}", cause);
        fail = cause;
    }
}
