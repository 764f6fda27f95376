//! Cache Value Module
//!
//! Defines the closed set of scalar values the cache accepts and their byte
//! encoding in the store.

// == Value ==
/// A scalar that can be stored in the cache.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 text, stored as its bytes
    Text(String),
    /// Raw bytes, stored as is
    Bytes(Vec<u8>),
    /// Signed integer, stored as base-10 ASCII
    Integer(i64),
    /// Floating-point number, stored in its shortest round-trip decimal form,
    /// always with a fractional part or exponent
    Float(f64),
}

impl Value {
    // == Encode ==
    /// Returns the bytes written to the store for this value.
    ///
    /// Integers and floats are written the way a Redis client writes numeric
    /// arguments, so they can be read back with the typed accessors.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Value::Text(text) => text.as_bytes().to_vec(),
            Value::Bytes(bytes) => bytes.clone(),
            Value::Integer(n) => n.to_string().into_bytes(),
            Value::Float(x) => format!("{:?}", x).into_bytes(),
        }
    }

    /// Short name of the variant, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
        }
    }
}

// == Conversions ==
impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(bytes: &[u8; N]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}
