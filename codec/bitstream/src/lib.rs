pub mod errors;
pub mod reader;
pub mod writer;
