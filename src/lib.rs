pub mod cli;
pub mod commands;
pub mod maf;
pub mod utils;
