// Author: Dustin Pilgrim
// License: MIT

use crate::{IniError, Value};

fn type_error(expected: &str, value: &Value, hint: &str, code: u32) -> IniError {
    IniError::TypeError {
        message: format!("Expected {}, got {:?}", expected, value),
        line: 0,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(type_error("string", &value, "Quote the value or use a bare word", 401)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(n),
            _ => Err(type_error("integer", &value, "Use a whole number without a '.'", 402)),
        }
    }
}

/// Narrower integers go through `i64` with a range check.
macro_rules! impl_int_conversion {
    ($($ty:ty => $code:expr),* $(,)?) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = IniError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let n = i64::try_from(value)?;
                    <$ty>::try_from(n).map_err(|_| IniError::TypeError {
                        message: format!("Number {} out of range for {}", n, stringify!($ty)),
                        line: 0,
                        hint: Some(format!(
                            "Use a number between {} and {}",
                            <$ty>::MIN,
                            <$ty>::MAX
                        )),
                        code: Some($code),
                    })
                }
            }
        )*
    };
}

impl_int_conversion! {
    i32 => 403,
    u8 => 404,
    u16 => 405,
    u32 => 406,
    u64 => 407,
    usize => 408,
}

impl TryFrom<Value> for f64 {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(n),
            Value::Int(n) => Ok(n as f64),
            _ => Err(type_error("number", &value, "Use a number value in your config", 409)),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as f32)
    }
}

impl TryFrom<Value> for bool {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            Value::String(ref word)
                if word.eq_ignore_ascii_case("true") || word.eq_ignore_ascii_case("false") =>
            {
                Err(IniError::TypeError {
                    message: format!("Invalid boolean value '{}'. Did you mean 'true' or 'false'?", word),
                    line: 0,
                    hint: Some("Booleans are the lowercase words true and false".into()),
                    code: Some(410),
                })
            }
            _ => Err(type_error("boolean", &value, "Use true or false", 410)),
        }
    }
}
