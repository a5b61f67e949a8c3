//! Virtual trackball: turns pointer drags over a rectangular surface into
//! incremental 3D rotations. Also hosts the repeating-key XOR cipher used by
//! the `xor` binary.

pub mod error;
pub mod math;
pub mod state;
pub mod trackball;
pub mod xor;

pub use error::{TrackballError, TrackballResult};
pub use math::{Matrix3, Vector3};
pub use state::{Surface, TrackballState};
pub use trackball::Rotation;
pub use xor::XorCipher;
