pub mod assembler;
pub mod error;
pub mod payload;
pub mod source;
