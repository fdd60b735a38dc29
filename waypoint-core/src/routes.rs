use std::sync::Arc;

use crate::config::RouterConfig;
use crate::error::RouteError;
use crate::recorder::RecorderSettings;
use crate::route::{Route, RouteDescriptor};

/// A group of routes configured together, typically one per handler type.
pub trait RoutingModule {
    fn configure(&self, routes: &mut Routes) -> Result<(), RouteError>;
}

/// Collects route descriptors at startup and freezes them into a
/// [`RouteTable`].
#[derive(Debug, Default)]
pub struct Routes {
    settings: RecorderSettings,
    descriptors: Vec<RouteDescriptor>,
}

impl Routes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the recorder settings from `router.recorder.*`.
    pub fn with_config(config: &RouterConfig) -> Result<Self, RouteError> {
        Ok(Self {
            settings: config.section()?,
            descriptors: Vec::new(),
        })
    }

    pub fn with_settings(settings: RecorderSettings) -> Self {
        Self {
            settings,
            descriptors: Vec::new(),
        }
    }

    /// Start a new route.
    pub fn route(&mut self) -> &mut RouteDescriptor {
        self.descriptors
            .push(RouteDescriptor::with_settings(self.settings));
        let last = self.descriptors.len() - 1;
        &mut self.descriptors[last]
    }

    /// Start a new error route handling `E`. The path may stay empty.
    pub fn error_route<E: std::error::Error + 'static>(&mut self) -> &mut RouteDescriptor {
        let route = self.route();
        route.throwable::<E>();
        route
    }

    pub fn install<M: RoutingModule + ?Sized>(&mut self, module: &M) -> Result<&mut Self, RouteError> {
        module.configure(self)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Freeze every descriptor, in declaration order.
    pub fn build(self) -> Result<RouteTable, RouteError> {
        let routes = self
            .descriptors
            .into_iter()
            .map(|d| d.freeze().map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(routes = routes.len(), "route table assembled");
        Ok(RouteTable { routes })
    }
}

/// Immutable set of routes, shared read-only by request handlers.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Arc<Route>>,
}

impl RouteTable {
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Route>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes that are not error routes.
    pub fn request_routes(&self) -> impl Iterator<Item = &Arc<Route>> {
        self.routes.iter().filter(|r| !r.is_error_route())
    }

    /// The first error route declared for `E`.
    pub fn error_route_for<E: std::error::Error + 'static>(&self) -> Option<&Arc<Route>> {
        self.routes.iter().find(|r| r.handles::<E>())
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Arc<Route>;
    type IntoIter = std::slice::Iter<'a, Arc<Route>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
