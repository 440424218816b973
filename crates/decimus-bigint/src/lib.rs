//! # decimus-bigint
//!
//! Capped arbitrary-precision signed decimal integer arithmetic.
//!
//! This crate provides [`BigInt`], a signed integer stored as base-10^9
//! limbs with:
//! - Sign-aware addition, subtraction, multiplication, division and modulo
//! - A canonical decimal string form (`Display`/`FromStr`)
//! - A fixed magnitude cap of 30009 decimal digits, enforced after every
//!   operation that can grow a value
//!
//! Division truncates toward zero and the remainder takes the dividend's
//! sign, matching the behavior of Rust's primitive integers.
//!
//! ## Performance Notes
//!
//! - Values below 10^27 (three limbs) are stored inline without heap
//!   allocation
//! - All algorithms are the straightforward quadratic ones; the cap keeps
//!   operand sizes small enough that this is not a concern

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bigint;
pub mod error;
pub mod ops;

#[cfg(test)]
mod proptests;

pub use bigint::BigInt;
pub use error::{BigIntError, ParseBigIntError};
