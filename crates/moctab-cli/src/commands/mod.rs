pub mod check;
pub mod dump;
pub mod generate;
pub mod loader;

mod error;

#[cfg(test)]
mod generate_tests;

pub use error::CommandError;
