pub mod executor;
pub mod expression;
pub mod literal;
pub mod sql;
pub mod value;

pub use literal::{convert, convert_list, ConversionError, LiteralKind, LiteralToken};
pub use value::{DataType, ScalarValue};
