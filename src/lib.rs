//! `bid2flt` converts IEEE 754-2008 decimal interchange values
//! in the BID (binary integer decimal) encoding to binary
//! floating point, correctly rounded.
//!
//! The conversion never divides. Instead, it multiplies the
//! binary-normalized decimal coefficient by a precomputed
//! 256-bit reciprocal of the decimal exponent's scale factor,
//! then rounds the 320-bit product with a single 128-bit
//! comparison against a per-parity boundary table.
//!
//! # Cargo Features
//!
//! - `std`: Include [`std`] support. This is currently unused,
//! but may be used in the future.
//!
//! - `slow-tests`: Enable very slow, very thorough tests.
//!
//! [`std`]: https://doc.rust-lang.org/std/

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), deny(clippy::std_instead_of_core))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_sign_loss)]
#![deny(clippy::expect_used)]
#![deny(clippy::implicit_saturating_sub)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::panic)]
#![deny(clippy::string_slice)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]

pub mod bid;
mod ctx;
mod util;

#[doc(inline)]
#[allow(non_camel_case_types)]
pub use bid::Bid32 as d32;
pub use ctx::*;

/// Simplifies importing common items.
pub mod prelude {
    pub use super::{d32, Ctx, RoundingMode};
}
