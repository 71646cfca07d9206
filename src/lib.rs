//! fontslim
pub mod batch;
pub mod core;
pub mod logging;
#[cfg(test)]
mod tests;
