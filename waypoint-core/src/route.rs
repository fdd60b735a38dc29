//! Route descriptors and their fluent configuration surface.
//!
//! ```ignore
//! let mut route = RouteDescriptor::new();
//! let mut cars = route
//!     .set_path("/cars/{id}")
//!     .roles(["admin"])
//!     .on([RequestMethod::Get])
//!     .produces([MediaType::JSON])
//!     .to::<Cars>()?;
//! let lang = cars.param("lang");
//! cars.invoke("find", args!["{id}", lang])?;
//! let route = route.freeze()?;
//! ```

use std::any::TypeId;
use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use waypoint_http::{MediaType, RequestMethod};

use crate::error::RouteError;
use crate::params::{Arg, Parameter};
use crate::recorder::{RecorderSettings, StandIn};
use crate::target::{Target, TargetClass, TargetMethod};

/// An error type a route declares it may raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Throwable {
    name: &'static str,
    #[serde(skip)]
    type_id: TypeId,
}

impl Throwable {
    pub fn of<E: std::error::Error + 'static>() -> Self {
        Self {
            name: std::any::type_name::<E>(),
            type_id: TypeId::of::<E>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is<E: std::error::Error + 'static>(&self) -> bool {
        self.type_id == TypeId::of::<E>()
    }
}

/// A route under construction.
///
/// Configured once at startup, finalized by a single recorded invocation,
/// then turned into an immutable [`Route`] with [`freeze`](Self::freeze).
#[derive(Debug, Clone, Default)]
pub struct RouteDescriptor {
    pub(crate) path: String,
    pub(crate) methods: BTreeSet<RequestMethod>,
    pub(crate) target_class: Option<TargetClass>,
    pub(crate) target_method: Option<TargetMethod>,
    pub(crate) args: Vec<Arg>,
    /// Declared parameters before recording, final parameters after.
    pub(crate) parameters: Vec<Parameter>,
    pub(crate) roles: Vec<String>,
    pub(crate) consumes: Vec<String>,
    pub(crate) produces: Vec<MediaType>,
    pub(crate) throwables: BTreeSet<Throwable>,
    pub(crate) settings: RecorderSettings,
}

impl RouteDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: RecorderSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Set the path. Only an error route may leave it empty.
    pub fn set_path(&mut self, path: impl Into<String>) -> OnMethods<'_> {
        self.path = path.into();
        OnMethods { route: self }
    }

    /// Select the HTTP verbs, replacing any previous selection.
    pub fn on(&mut self, methods: impl IntoIterator<Item = RequestMethod>) -> TargetEndpoint<'_> {
        self.methods = methods.into_iter().collect();
        TargetEndpoint { route: self }
    }

    /// Restrict the route to the given roles, replacing any previous ones.
    /// Duplicates are dropped, first occurrence wins.
    pub fn roles<I, S>(&mut self, roles: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles.clear();
        for role in roles {
            let role = role.into();
            if !self.roles.contains(&role) {
                self.roles.push(role);
            }
        }
        self
    }

    /// Append accepted request media types (raw strings or [`MediaType`]s).
    pub fn consumes<I, M>(&mut self, media_types: I) -> &mut Self
    where
        I: IntoIterator<Item = M>,
        M: Into<MediaType>,
    {
        self.consumes
            .extend(media_types.into_iter().map(|m| m.into().as_str().to_string()));
        self
    }

    /// Append media types the route may emit.
    pub fn produces<I, M>(&mut self, media_types: I) -> &mut Self
    where
        I: IntoIterator<Item = M>,
        M: Into<MediaType>,
    {
        self.produces.extend(media_types.into_iter().map(Into::into));
        self
    }

    /// Declare an error type this route may raise.
    pub fn throwable<E: std::error::Error + 'static>(&mut self) -> &mut Self {
        self.throwables.insert(Throwable::of::<E>());
        self
    }

    /// Replace the declared error types.
    pub fn set_throwables(&mut self, throwables: impl IntoIterator<Item = Throwable>) -> &mut Self {
        self.throwables = throwables.into_iter().collect();
        self
    }

    /// Create the stand-in directly, e.g. for an error route without verbs.
    pub fn to<T: Target>(&mut self) -> Result<StandIn<'_, T>, RouteError> {
        StandIn::new(self)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn methods(&self) -> &BTreeSet<RequestMethod> {
        &self.methods
    }

    pub fn target_class(&self) -> Option<&TargetClass> {
        self.target_class.as_ref()
    }

    pub fn target_method(&self) -> Option<&TargetMethod> {
        self.target_method.as_ref()
    }

    /// Raw arguments of the recorded invocation.
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn roles_required(&self) -> &[String] {
        &self.roles
    }

    pub fn consumed(&self) -> &[String] {
        &self.consumes
    }

    pub fn produced(&self) -> &[MediaType] {
        &self.produces
    }

    pub fn throwables(&self) -> &BTreeSet<Throwable> {
        &self.throwables
    }

    pub fn settings(&self) -> RecorderSettings {
        self.settings
    }

    pub fn is_error_route(&self) -> bool {
        !self.throwables.is_empty()
    }

    pub fn is_recorded(&self) -> bool {
        self.target_method.is_some()
    }

    /// Validate and convert into an immutable [`Route`].
    pub fn freeze(self) -> Result<Route, RouteError> {
        if !self.is_error_route() {
            if self.path.is_empty() {
                return Err(RouteError::EmptyPath);
            }
            if self.methods.is_empty() {
                return Err(RouteError::MissingMethods { path: self.path });
            }
        }
        let (Some(target_class), Some(target_method)) = (self.target_class, self.target_method)
        else {
            return Err(RouteError::NotRecorded { path: self.path });
        };

        Ok(Route {
            path: self.path,
            methods: self.methods,
            target_class,
            target_method,
            parameters: self.parameters,
            roles: self.roles,
            consumes: self.consumes,
            produces: self.produces,
            throwables: self.throwables,
        })
    }
}

impl fmt::Display for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteDescriptor{{path='{}', targetMethod=", self.path)?;
        match &self.target_method {
            Some(m) => write!(f, "{}", m.name())?,
            None => write!(f, "null")?,
        }
        let args = serde_json::to_string(&self.args).map_err(|_| fmt::Error)?;
        write!(f, ", args={args}}}")
    }
}

/// View returned by [`RouteDescriptor::set_path`]: pick roles and verbs.
pub struct OnMethods<'r> {
    route: &'r mut RouteDescriptor,
}

impl<'r> OnMethods<'r> {
    pub fn roles<I, S>(self, roles: I) -> OnMethods<'r>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.route.roles(roles);
        self
    }

    pub fn on(self, methods: impl IntoIterator<Item = RequestMethod>) -> TargetEndpoint<'r> {
        self.route.on(methods)
    }
}

/// View returned once verbs are chosen: media types, error types, and the
/// target type.
pub struct TargetEndpoint<'r> {
    route: &'r mut RouteDescriptor,
}

impl<'r> TargetEndpoint<'r> {
    pub fn roles<I, S>(self, roles: I) -> TargetEndpoint<'r>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.route.roles(roles);
        self
    }

    pub fn consumes<I, M>(self, media_types: I) -> TargetEndpoint<'r>
    where
        I: IntoIterator<Item = M>,
        M: Into<MediaType>,
    {
        self.route.consumes(media_types);
        self
    }

    pub fn produces<I, M>(self, media_types: I) -> TargetEndpoint<'r>
    where
        I: IntoIterator<Item = M>,
        M: Into<MediaType>,
    {
        self.route.produces(media_types);
        self
    }

    pub fn throwable<E: std::error::Error + 'static>(self) -> TargetEndpoint<'r> {
        self.route.throwable::<E>();
        self
    }

    /// Create the stand-in the target invocation is recorded through.
    ///
    /// # Errors
    ///
    /// `ProxyConstruction` if `T` exposes no usable method table,
    /// `DoubleRecording` if the route is already recorded.
    pub fn to<T: Target>(self) -> Result<StandIn<'r, T>, RouteError> {
        StandIn::new(self.route)
    }
}

/// A finalized, immutable route. Safe to share across request threads.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    path: String,
    methods: BTreeSet<RequestMethod>,
    target_class: TargetClass,
    target_method: TargetMethod,
    parameters: Vec<Parameter>,
    roles: Vec<String>,
    consumes: Vec<String>,
    produces: Vec<MediaType>,
    throwables: BTreeSet<Throwable>,
}

impl Route {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn methods(&self) -> &BTreeSet<RequestMethod> {
        &self.methods
    }

    pub fn answers(&self, method: RequestMethod) -> bool {
        self.methods.contains(&method)
    }

    pub fn target_class(&self) -> &TargetClass {
        &self.target_class
    }

    pub fn target_method(&self) -> &TargetMethod {
        &self.target_method
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn is_secured(&self) -> bool {
        !self.roles.is_empty()
    }

    pub fn consumes(&self) -> &[String] {
        &self.consumes
    }

    pub fn produces(&self) -> &[MediaType] {
        &self.produces
    }

    pub fn throwables(&self) -> &BTreeSet<Throwable> {
        &self.throwables
    }

    pub fn is_error_route(&self) -> bool {
        !self.throwables.is_empty()
    }

    /// Whether this error route handles `E`.
    pub fn handles<E: std::error::Error + 'static>(&self) -> bool {
        self.throwables.iter().any(Throwable::is::<E>)
    }
}
