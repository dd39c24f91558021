//! Auto-generated from the EC2 Smithy model. DO NOT EDIT.
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(missing_docs)]

pub mod enums;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod request;
pub mod shape;
pub mod types;

pub use enums::Ec2Enum;
pub use error::Ec2ModelError;
pub use operations::Ec2Operation;
pub use request::Ec2Request;
pub use shape::{FieldValue, Member, Shape, ToFieldValue, missing_required, render};

// Generated: 23 operations, 80 enums, 177 shared structs, 23 input structs, 23 output structs
