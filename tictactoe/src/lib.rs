pub use board::*;
pub use controller::*;
pub use errors::*;
pub use protocol::*;
pub use symbols::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod controller;
mod errors;
mod protocol;
mod symbols;
mod visualization;
