pub mod core;
pub mod parser;
