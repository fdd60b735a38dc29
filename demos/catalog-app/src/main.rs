use std::fmt;
use std::sync::OnceLock;

use waypoint::prelude::*;
use waypoint::StatusCode;

/// Handler for the car catalog.
struct Cars;

impl Target for Cars {
    fn methods() -> Vec<TargetMethod> {
        vec![
            TargetMethod::new("index"),
            TargetMethod::new("find")
                .param(ParamType::String)
                .param(ParamType::String),
            TargetMethod::new("save").param(ParamType::Json),
        ]
    }
}

/// Pagination defaults for search, taken from configuration at startup.
static SEARCH_PAGINATION: OnceLock<Paginated> = OnceLock::new();

/// Handler for catalog-wide queries.
struct Search;

impl Target for Search {
    fn methods() -> Vec<TargetMethod> {
        let pagination = SEARCH_PAGINATION.get().cloned().unwrap_or_default();
        vec![TargetMethod::new("by_brand")
            .param(ParamType::String)
            .paginated(pagination)]
    }
}

struct Errors;

impl Target for Errors {
    fn methods() -> Vec<TargetMethod> {
        vec![TargetMethod::new("car_not_found")]
    }
}

#[derive(Debug)]
struct CarNotFound(String);

impl fmt::Display for CarNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no car with id {}", self.0)
    }
}

impl std::error::Error for CarNotFound {}

struct CatalogRoutes;

impl RoutingModule for CatalogRoutes {
    fn configure(&self, routes: &mut Routes) -> Result<(), RouteError> {
        routes
            .route()
            .set_path("/")
            .on([RequestMethod::Get])
            .produces([MediaType::HTML])
            .to::<Cars>()?
            .invoke("index", args![])?;

        let mut cars = routes
            .route()
            .set_path("/cars/{id}")
            .on([RequestMethod::Get, RequestMethod::Head])
            .produces([MediaType::JSON])
            .to::<Cars>()?;
        let lang = cars.param_or("lang", "en");
        cars.invoke("find", args!["{id}", lang])?;

        let mut cars = routes
            .route()
            .set_path("/cars")
            .roles(["admin"])
            .on([RequestMethod::Post])
            .consumes([MediaType::JSON])
            .produces([MediaType::JSON])
            .to::<Cars>()?;
        let body = cars.param("car");
        cars.invoke("save", args![body])?;

        routes
            .error_route::<CarNotFound>()
            .to::<Errors>()?
            .invoke("car_not_found", args![])?;
        Ok(())
    }
}

struct SearchRoutes;

impl RoutingModule for SearchRoutes {
    fn configure(&self, routes: &mut Routes) -> Result<(), RouteError> {
        routes
            .route()
            .set_path("/cars/brand/{brand}")
            .on([RequestMethod::Get])
            .produces([MediaType::JSON])
            .to::<Search>()?
            .invoke("by_brand", args!["{brand}"])?;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    waypoint::init_tracing_with("info,waypoint_core=debug");

    let config = RouterConfig::load("dev")?;
    let _ = SEARCH_PAGINATION.set(config.section()?);

    let mut routes = Routes::with_config(&config)?;
    routes
        .install(&CatalogRoutes)?
        .install(&SearchRoutes)?;
    let table = routes.build()?;

    for route in &table {
        tracing::info!(
            path = route.path(),
            handler = route.target_class().name(),
            method = route.target_method().name(),
            "{}",
            serde_json::to_string(&**route)?
        );
    }

    if let Some(route) = table.error_route_for::<CarNotFound>() {
        let response = ErrorResponseImpl::new(
            StatusCode::NOT_FOUND,
            serde_json::json!({ "error": CarNotFound("42".into()).to_string() }),
        );
        tracing::info!(handler = route.target_method().name(), %response, "error mapping");
    }

    Ok(())
}
