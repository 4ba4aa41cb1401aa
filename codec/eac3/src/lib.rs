pub mod assembler;
pub mod checksum;
pub mod errors;
pub mod frame;
pub mod header;
pub mod locator;
pub mod options;
pub mod patcher;
pub mod pipeline;
pub mod scanner;

#[cfg(test)]
pub(crate) mod test_utils;

mod locator_test;

pub use errors::{Eac3Error, Eac3Result};
pub use locator::FieldLocation;
pub use options::PatchOptions;
pub use pipeline::{PatchReport, patch_stream};
