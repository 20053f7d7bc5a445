//! Image loader tests.


/// Writing storage back out as an image.
pub mod rendering;
