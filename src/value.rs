use bytes::Bytes;
use std::fmt;

/// Data types a scalar value can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Boolean,
    Integer,
    Float,
    Utf8,
    Binary,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Boolean => "boolean",
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::Utf8 => "utf8",
            DataType::Binary => "binary",
        }
    }

    /// Parse a type name as written on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Some(DataType::Boolean),
            "int" | "integer" | "bigint" => Some(DataType::Integer),
            "float" | "double" => Some(DataType::Float),
            "text" | "utf8" | "varchar" => Some(DataType::Utf8),
            "binary" | "bytea" | "blob" => Some(DataType::Binary),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime scalar values produced by literal conversion and read from columns.
///
/// The derived `PartialEq` is structural identity. SQL comparison semantics,
/// including text/binary coercion, live in `expression::compare`.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Utf8Text(String),
    Binary(Bytes),
}

impl ScalarValue {
    pub fn text(value: impl Into<String>) -> Self {
        ScalarValue::Utf8Text(value.into())
    }

    pub fn binary(value: impl Into<Bytes>) -> Self {
        ScalarValue::Binary(value.into())
    }

    /// Get the data type of this value
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            ScalarValue::Null => None,
            ScalarValue::Boolean(_) => Some(DataType::Boolean),
            ScalarValue::Integer(_) => Some(DataType::Integer),
            ScalarValue::Float(_) => Some(DataType::Float),
            ScalarValue::Utf8Text(_) => Some(DataType::Utf8),
            ScalarValue::Binary(_) => Some(DataType::Binary),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Raw bytes of a text or binary value. Text yields its UTF-8 encoding.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ScalarValue::Utf8Text(s) => Some(s.as_bytes()),
            ScalarValue::Binary(b) => Some(b.as_ref()),
            _ => None,
        }
    }

    /// Check if this value can be stored in a column of the given type
    pub fn is_compatible_with(&self, data_type: DataType) -> bool {
        match (self, data_type) {
            (ScalarValue::Null, _) => true,
            (value, expected) => value.data_type() == Some(expected),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => write!(f, "NULL"),
            ScalarValue::Boolean(b) => write!(f, "{}", b),
            ScalarValue::Integer(i) => write!(f, "{}", i),
            ScalarValue::Float(x) => write!(f, "{:?}", x),
            ScalarValue::Utf8Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            ScalarValue::Binary(bytes) => {
                write!(f, "x'")?;
                for byte in bytes.iter() {
                    write!(f, "{:02X}", byte)?;
                }
                write!(f, "'")
            }
        }
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Boolean(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Integer(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Float(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Utf8Text(value.to_string())
    }
}

impl From<Vec<u8>> for ScalarValue {
    fn from(value: Vec<u8>) -> Self {
        ScalarValue::Binary(Bytes::from(value))
    }
}
