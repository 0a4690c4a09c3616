//! Conversion of raw SQL literal tokens into scalar values.
//!
//! This module provides:
//! - Literal tokens as handed over by the SQL grammar
//! - Lexical validation of bit-string and hex-string digits
//! - Exact byte packing for validated bit and hex digits
//! - The literal converter and its list form used by `IN (...)`

pub mod convert;
pub mod error;
pub mod pack;
pub mod token;
pub mod validate;

pub use convert::{convert, convert_list};
pub use error::{ConversionError, ConversionResult, ErrorCategory};
pub use pack::{pack_bits, pack_hex};
pub use token::{LiteralKind, LiteralToken};
pub use validate::{validate_bits, validate_hex};
