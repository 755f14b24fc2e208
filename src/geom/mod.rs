mod core;
mod rotation;

pub use core::{Tolerance, Vec3};
pub use rotation::{Orientation, Rotation, rotate_vector};
