//! Recording of a typed target invocation into route metadata.
//!
//! Instead of executing `Cars::find(id, "{lang}")`, a route builder calls
//! [`StandIn::invoke`] with the method name and the call-site arguments.
//! The recorder captures the method, prepends pagination parameters, and
//! classifies every argument into a [`Parameter`].

use std::collections::HashSet;
use std::marker::PhantomData;

use crate::config::{ConfigError, ConfigProperties, RouterConfig};
use crate::error::RouteError;
use crate::pagination::{pagination_parameters, PaginationMetadata};
use crate::params::{Arg, ParamType, Parameter};
use crate::route::RouteDescriptor;
use crate::target::{Target, TargetClass, TargetMethod, FINALIZE};

/// Recorder behaviour, read from `router.recorder.*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecorderSettings {
    /// Fail recording when declared parameters outnumber the unset slots.
    /// When `false`, the extra declarations are dropped with a warning.
    pub strict: bool,
}

impl Default for RecorderSettings {
    fn default() -> Self {
        Self { strict: true }
    }
}

impl ConfigProperties for RecorderSettings {
    fn prefix() -> &'static str {
        "router.recorder"
    }

    fn from_config(config: &RouterConfig) -> Result<Self, ConfigError> {
        let strict = config
            .get_opt(&format!("{}.strict", Self::prefix()))?
            .unwrap_or(RecorderSettings::default().strict);
        Ok(Self { strict })
    }
}

/// Output of [`classify`].
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// One parameter per argument, in argument order.
    pub parameters: Vec<Parameter>,
    /// Declared parameters that no unset slot consumed.
    pub unconsumed: Vec<Parameter>,
}

/// Merge call-site arguments with the pool of declared parameters.
///
/// Walking `args` left to right:
/// - an unset slot takes the next declared parameter, if one is left;
/// - a string with `{token}`s becomes a placeholder set;
/// - anything else (including an unset slot with an exhausted pool)
///   becomes a constant.
pub fn classify(args: &[Arg], declared: Vec<Parameter>) -> Classification {
    let mut pool = declared.into_iter();
    let mut parameters = Vec::with_capacity(args.len());

    for arg in args {
        if arg.is_unset() {
            if let Some(param) = pool.next() {
                parameters.push(param);
                continue;
            }
        } else if let Some(template) = arg.as_str() {
            if let Some(param) = Parameter::placeholders(template) {
                parameters.push(param);
                continue;
            }
        }
        parameters.push(Parameter::constant(arg.clone()));
    }

    Classification {
        parameters,
        unconsumed: pool.collect(),
    }
}

/// Stand-in for a target type, bound to the descriptor it records into.
///
/// Obtained from `TargetEndpoint::to`. Declare request parameters with
/// [`param`](Self::param) and pass the returned [`Arg::Unset`] at the call
/// site of [`invoke`](Self::invoke).
pub struct StandIn<'r, T: Target> {
    route: &'r mut RouteDescriptor,
    methods: Vec<TargetMethod>,
    _target: PhantomData<fn() -> T>,
}

impl<'r, T: Target> StandIn<'r, T> {
    pub(crate) fn new(route: &'r mut RouteDescriptor) -> Result<Self, RouteError> {
        if route.is_recorded() {
            return Err(RouteError::DoubleRecording {
                path: route.path().to_string(),
                method: T::name().to_string(),
            });
        }

        let methods = T::methods();
        if methods.is_empty() {
            return Err(RouteError::ProxyConstruction {
                target: T::name(),
                reason: "the type exposes no methods to intercept".into(),
            });
        }
        let mut seen = HashSet::new();
        for method in &methods {
            if !seen.insert(method.name()) {
                return Err(RouteError::ProxyConstruction {
                    target: T::name(),
                    reason: format!("method `{}` is declared more than once", method.name()),
                });
            }
        }

        route.target_class = Some(TargetClass::of::<T>());
        Ok(Self {
            route,
            methods,
            _target: PhantomData,
        })
    }

    /// Declare a `String` request parameter without a default.
    pub fn param(&mut self, name: impl Into<String>) -> Arg {
        self.declare(Parameter::named(name))
    }

    /// Declare a `String` request parameter with a default value.
    pub fn param_or(&mut self, name: impl Into<String>, default: impl ToString) -> Arg {
        self.declare(Parameter::named_with(
            name,
            Some(default.to_string()),
            ParamType::String,
        ))
    }

    /// Push a parameter into the declared pool.
    pub fn declare(&mut self, parameter: Parameter) -> Arg {
        self.route.parameters.push(parameter);
        Arg::Unset
    }

    /// Record `method(args...)` instead of executing it.
    ///
    /// `finalize` is passed through untouched.
    pub fn invoke(&mut self, method: &str, args: Vec<Arg>) -> Result<(), RouteError> {
        if method == FINALIZE {
            tracing::trace!(handler = T::name(), "lifecycle method passed through");
            return Ok(());
        }

        if self.route.is_recorded() {
            return Err(RouteError::DoubleRecording {
                path: self.route.path().to_string(),
                method: method.to_string(),
            });
        }

        let target_method = self
            .methods
            .iter()
            .find(|m| m.name() == method)
            .cloned()
            .ok_or_else(|| RouteError::UnknownMethod {
                target: T::name(),
                method: method.to_string(),
            })?;

        if args.len() != target_method.arity() {
            return Err(RouteError::ArityMismatch {
                method: method.to_string(),
                expected: target_method.arity(),
                found: args.len(),
            });
        }

        let mut parameters = pagination_parameters(target_method.pagination());
        // The declared pool stays on the descriptor until recording succeeds.
        let Classification {
            parameters: classified,
            unconsumed,
        } = classify(&args, self.route.parameters.clone());

        if !unconsumed.is_empty() {
            let names = unconsumed
                .iter()
                .map(|p| p.name().unwrap_or("<unnamed>").to_string())
                .collect::<Vec<_>>();
            if self.route.settings.strict {
                return Err(RouteError::UnconsumedParameters {
                    method: method.to_string(),
                    names,
                });
            }
            tracing::warn!(
                path = %self.route.path(),
                method,
                dropped = ?names,
                "declared parameters outnumber unset arguments; extras dropped"
            );
        }

        parameters.extend(classified);
        tracing::debug!(
            path = %self.route.path(),
            handler = T::name(),
            method,
            parameters = parameters.len(),
            "recorded route invocation"
        );

        self.route.parameters = parameters;
        self.route.args = args;
        self.route.target_method = Some(target_method);
        Ok(())
    }

    /// The descriptor this stand-in records into.
    pub fn route(&mut self) -> &mut RouteDescriptor {
        &mut *self.route
    }
}
