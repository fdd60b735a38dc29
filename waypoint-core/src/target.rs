use std::any::TypeId;

use serde::Serialize;

use crate::pagination::{PaginationMetadata, Paginated};
use crate::params::ParamType;

/// Name of the lifecycle method that stand-ins never intercept.
pub const FINALIZE: &str = "finalize";

/// A handler type whose methods can be bound to routes.
///
/// ```ignore
/// struct Cars;
///
/// impl Target for Cars {
///     fn methods() -> Vec<TargetMethod> {
///         vec![
///             TargetMethod::new("find").param(ParamType::String),
///             TargetMethod::new("list").paginated(Paginated::default()),
///         ]
///     }
/// }
/// ```
pub trait Target: 'static {
    /// The methods a route may record an invocation of.
    fn methods() -> Vec<TargetMethod>;

    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Signature of one method on a [`Target`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetMethod {
    name: String,
    params: Vec<ParamType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<Paginated>,
}

impl TargetMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            pagination: None,
        }
    }

    /// Append a formal parameter.
    pub fn param(mut self, ty: ParamType) -> Self {
        self.params.push(ty);
        self
    }

    pub fn paginated(mut self, pagination: Paginated) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[ParamType] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn is_lifecycle(&self) -> bool {
        self.name == FINALIZE
    }
}

impl PaginationMetadata for TargetMethod {
    fn pagination(&self) -> Option<&Paginated> {
        self.pagination.as_ref()
    }
}

/// The handler type a route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TargetClass {
    name: &'static str,
    #[serde(skip)]
    type_id: TypeId,
}

impl TargetClass {
    pub fn of<T: Target>() -> Self {
        Self {
            name: T::name(),
            type_id: TypeId::of::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn is<T: Target>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}
