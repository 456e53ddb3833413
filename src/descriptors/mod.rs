//! Region and image descriptors
//!
//! Scalar measurements computed from the dominant region, the full scan
//! and the foreground mask. These feed the feature assembler.

pub mod shape;
pub mod texture;
pub mod fractal;

pub use shape::ShapeDescriptor;
pub use texture::{CoOccurrenceMatrix, TextureDescriptor};
pub use fractal::{box_counts, fractal_dimension};
