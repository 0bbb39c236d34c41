pub mod catalog;
pub mod error;
pub mod name;
pub mod selector;
