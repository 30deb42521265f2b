//! IEEE 754-2008 decimal floating point numbers with binary
//! integer significands.

mod arith;
mod bid32;
mod tables;
mod to_binary;
mod uint256;

pub use bid32::Bid32;
