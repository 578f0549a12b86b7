//! A 64-bit integer built from two 32-bit limbs.
//!
//! Arithmetic wraps mod 2^64, shifts and rotations move bits across the limb
//! boundary, and the same bits render or compare as unsigned or as two's
//! complement depending on which function is called.

mod arith;
mod bitwise;
pub mod bytes;
mod cmp;
pub mod error;
mod parse;
mod render;
mod shift;
pub mod value;

pub use bytes::{Endianness, ENCODED_LEN};
pub use error::{DecodeError, ParseError};
pub use value::Int64;
