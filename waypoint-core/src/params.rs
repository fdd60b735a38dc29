//! Parameter model: where each argument of a target method comes from.
//!
//! A recorded invocation produces one [`Parameter`] per argument position.
//! The dispatcher later resolves each of them against the incoming request:
//!
//! - [`Parameter::Constant`]: fixed at route-definition time.
//! - [`Parameter::Named`]: looked up by name in the request (query/form).
//! - [`Parameter::PlaceholderSet`]: a template whose `{token}`s are bound
//!   from the matched path.

use std::collections::BTreeSet;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::placeholder::extract_placeholders;

/// A call-site argument as captured by the recorder.
///
/// `Unset` marks a slot that must be filled from the declared-parameter
/// pool (what `StandIn::param` returns).
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Unset,
    Value(Value),
}

impl Arg {
    pub fn is_unset(&self) -> bool {
        matches!(self, Arg::Unset)
    }

    /// The string payload, if this argument is a JSON string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Arg::Value(Value::String(s)) => Some(s),
            _ => None,
        }
    }
}

impl Serialize for Arg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Arg::Unset => serializer.serialize_none(),
            Arg::Value(v) => v.serialize(serializer),
        }
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Arg::Value(v)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Value(Value::String(s.to_string()))
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Value(Value::String(s))
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Value(Value::Bool(b))
    }
}

impl From<f64> for Arg {
    fn from(f: f64) -> Self {
        Arg::Value(Value::from(f))
    }
}

macro_rules! impl_arg_from_int {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Arg {
                fn from(i: $ty) -> Self {
                    Arg::Value(Value::from(i))
                }
            }
        )+
    };
}

impl_arg_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

/// Build a `Vec<Arg>` from heterogeneous call-site arguments.
///
/// ```ignore
/// let id = stand_in.param("id");
/// stand_in.invoke("find", args![id, "{lang}", 10])?;
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::params::Arg>::new()
    };
    ( $( $arg:expr ),+ $(,)? ) => {
        ::std::vec![ $( $crate::params::Arg::from($arg) ),+ ]
    };
}

/// The semantic type a parameter value is coerced to at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer,
    Float,
    Bool,
    Json,
    Set,
    Any,
}

impl ParamType {
    /// Infer the declared type of a constant from its literal.
    pub fn of(arg: &Arg) -> Self {
        match arg {
            Arg::Unset | Arg::Value(Value::Null) => ParamType::Any,
            Arg::Value(Value::String(_)) => ParamType::String,
            Arg::Value(Value::Bool(_)) => ParamType::Bool,
            Arg::Value(Value::Number(n)) if n.is_f64() => ParamType::Float,
            Arg::Value(Value::Number(_)) => ParamType::Integer,
            Arg::Value(Value::Array(_) | Value::Object(_)) => ParamType::Json,
        }
    }
}

/// Provenance of one argument of the target method.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Parameter {
    Constant {
        value: Arg,
        declared_type: ParamType,
    },
    Named {
        name: String,
        default: Option<String>,
        declared_type: ParamType,
    },
    /// Never constructed with an empty token set; see [`Parameter::placeholders`].
    PlaceholderSet {
        template: String,
        tokens: BTreeSet<String>,
        declared_type: ParamType,
    },
}

impl Parameter {
    /// A constant whose declared type is inferred from the literal.
    pub fn constant(value: impl Into<Arg>) -> Self {
        let value = value.into();
        let declared_type = ParamType::of(&value);
        Parameter::Constant {
            value,
            declared_type,
        }
    }

    /// A request parameter of type `String` without a default.
    pub fn named(name: impl Into<String>) -> Self {
        Parameter::Named {
            name: name.into(),
            default: None,
            declared_type: ParamType::String,
        }
    }

    /// A request parameter with a default value and an explicit type.
    pub fn named_with(
        name: impl Into<String>,
        default: Option<String>,
        declared_type: ParamType,
    ) -> Self {
        Parameter::Named {
            name: name.into(),
            default,
            declared_type,
        }
    }

    /// A placeholder set for `template`, or `None` if it contains no tokens.
    pub fn placeholders(template: impl Into<String>) -> Option<Self> {
        let template = template.into();
        let tokens = extract_placeholders(&template);
        if tokens.is_empty() {
            return None;
        }
        Some(Parameter::PlaceholderSet {
            template,
            tokens,
            declared_type: ParamType::Set,
        })
    }

    pub fn declared_type(&self) -> ParamType {
        match self {
            Parameter::Constant { declared_type, .. }
            | Parameter::Named { declared_type, .. }
            | Parameter::PlaceholderSet { declared_type, .. } => *declared_type,
        }
    }

    /// The request parameter name, for `Named` parameters.
    pub fn name(&self) -> Option<&str> {
        match self {
            Parameter::Named { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Parameter::Constant { .. })
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Parameter::Named { .. })
    }

    pub fn is_placeholder_set(&self) -> bool {
        matches!(self, Parameter::PlaceholderSet { .. })
    }
}
