//! Auto-generated from the EC2 Smithy model. DO NOT EDIT.

mod image;
mod instance;
mod volume;
mod vpc;

pub use image::*;
pub use instance::*;
pub use volume::*;
pub use vpc::*;
