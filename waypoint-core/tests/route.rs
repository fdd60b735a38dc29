use std::fmt;

use waypoint_core::args;
use waypoint_core::error::RouteError;
use waypoint_core::params::ParamType;
use waypoint_core::route::{RouteDescriptor, Throwable};
use waypoint_core::target::{Target, TargetMethod};
use waypoint_http::{MediaType, RequestMethod};

struct Cars;

impl Target for Cars {
    fn methods() -> Vec<TargetMethod> {
        vec![
            TargetMethod::new("find").param(ParamType::String),
            TargetMethod::new("save").param(ParamType::Json),
            TargetMethod::new("on_error"),
        ]
    }
}

#[derive(Debug)]
struct CarNotFound;

impl fmt::Display for CarNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "car not found")
    }
}

impl std::error::Error for CarNotFound {}

#[derive(Debug)]
struct Conflict;

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conflict")
    }
}

impl std::error::Error for Conflict {}

#[test]
fn fluent_surface_configures_everything() {
    let mut route = RouteDescriptor::new();
    route
        .set_path("/cars/{id}")
        .roles(["admin", "ops"])
        .on([RequestMethod::Get, RequestMethod::Head])
        .consumes(["application/json"])
        .produces([MediaType::JSON])
        .to::<Cars>()
        .unwrap()
        .invoke("find", args!["{id}"])
        .unwrap();

    assert_eq!(route.path(), "/cars/{id}");
    assert_eq!(
        route.methods().iter().copied().collect::<Vec<_>>(),
        vec![RequestMethod::Get, RequestMethod::Head]
    );
    assert_eq!(route.roles_required(), &["admin".to_string(), "ops".to_string()]);
    assert_eq!(route.consumed(), &["application/json".to_string()]);
    assert_eq!(route.produced(), &[MediaType::JSON]);
}

#[test]
fn consumes_accepts_strings_and_typed_values_additively() {
    let mut route = RouteDescriptor::new();
    route
        .consumes(["text/csv"])
        .consumes([MediaType::JSON, MediaType::XML])
        .consumes(vec![String::from("text/plain")]);
    assert_eq!(
        route.consumed(),
        &[
            "text/csv".to_string(),
            "application/json".to_string(),
            "application/xml".to_string(),
            "text/plain".to_string(),
        ]
    );
}

#[test]
fn produces_is_additive() {
    let mut route = RouteDescriptor::new();
    route.produces([MediaType::JSON]).produces(["text/html"]);
    assert_eq!(route.produced(), &[MediaType::JSON, MediaType::HTML]);
}

#[test]
fn media_types_can_be_added_after_recording() {
    let mut route = RouteDescriptor::new();
    let mut cars = route
        .set_path("/cars")
        .on([RequestMethod::Post])
        .to::<Cars>()
        .unwrap();
    let body = cars.param("car");
    cars.invoke("save", args![body]).unwrap();
    cars.route().consumes([MediaType::JSON]).produces([MediaType::JSON]);

    assert_eq!(route.consumed(), &["application/json".to_string()]);
    assert_eq!(route.produced(), &[MediaType::JSON]);
}

#[test]
fn roles_are_an_ordered_set() {
    let mut route = RouteDescriptor::new();
    route.roles(["b", "a", "b"]);
    assert_eq!(route.roles_required(), &["b".to_string(), "a".to_string()]);
    route.roles(["c"]);
    assert_eq!(route.roles_required(), &["c".to_string()]);
}

#[test]
fn verbs_are_a_set() {
    let mut route = RouteDescriptor::new();
    route.on([RequestMethod::Post, RequestMethod::Get, RequestMethod::Post]);
    assert_eq!(route.methods().len(), 2);
}

#[test]
fn throwables_mark_an_error_route() {
    let mut route = RouteDescriptor::new();
    assert!(!route.is_error_route());
    route.throwable::<CarNotFound>().throwable::<CarNotFound>();
    assert!(route.is_error_route());
    assert_eq!(route.throwables().len(), 1);
    assert!(route.throwables().iter().all(|t| t.is::<CarNotFound>()));

    route.set_throwables([Throwable::of::<Conflict>()]);
    assert!(route.throwables().iter().all(|t| t.is::<Conflict>()));
}

#[test]
fn freeze_produces_immutable_route() {
    let mut route = RouteDescriptor::new();
    route
        .set_path("/cars/{id}")
        .roles(["admin"])
        .on([RequestMethod::Get])
        .to::<Cars>()
        .unwrap()
        .invoke("find", args!["{id}"])
        .unwrap();
    let route = route.freeze().unwrap();

    assert_eq!(route.path(), "/cars/{id}");
    assert!(route.answers(RequestMethod::Get));
    assert!(!route.answers(RequestMethod::Post));
    assert!(route.is_secured());
    assert!(route.target_class().is::<Cars>());
    assert_eq!(route.target_method().name(), "find");
    assert_eq!(route.parameters().len(), 1);
}

#[test]
fn freeze_rejects_empty_path() {
    let mut route = RouteDescriptor::new();
    route
        .set_path("")
        .on([RequestMethod::Get])
        .to::<Cars>()
        .unwrap()
        .invoke("on_error", args![])
        .unwrap();
    assert!(matches!(route.freeze(), Err(RouteError::EmptyPath)));
}

#[test]
fn freeze_rejects_missing_methods() {
    let mut route = RouteDescriptor::new();
    route
        .set_path("/cars")
        .on(Vec::<RequestMethod>::new())
        .to::<Cars>()
        .unwrap()
        .invoke("on_error", args![])
        .unwrap();
    assert!(matches!(
        route.freeze(),
        Err(RouteError::MissingMethods { ref path }) if path == "/cars"
    ));
}

#[test]
fn freeze_rejects_unrecorded_route() {
    let mut route = RouteDescriptor::new();
    route.set_path("/cars").on([RequestMethod::Get]);
    assert!(matches!(route.freeze(), Err(RouteError::NotRecorded { .. })));
}

#[test]
fn error_route_may_have_empty_path() {
    let mut route = RouteDescriptor::new();
    route
        .on(Vec::<RequestMethod>::new())
        .throwable::<CarNotFound>()
        .to::<Cars>()
        .unwrap()
        .invoke("on_error", args![])
        .unwrap();
    let route = route.freeze().unwrap();
    assert!(route.is_error_route());
    assert!(route.handles::<CarNotFound>());
    assert!(!route.handles::<Conflict>());
}

#[test]
fn display_shows_path_method_and_args() {
    let mut route = RouteDescriptor::new();
    assert_eq!(
        route.to_string(),
        "RouteDescriptor{path='', targetMethod=null, args=[]}"
    );
    route
        .set_path("/cars/{id}")
        .on([RequestMethod::Get])
        .to::<Cars>()
        .unwrap()
        .invoke("find", args!["{id}"])
        .unwrap();
    assert_eq!(
        route.to_string(),
        "RouteDescriptor{path='/cars/{id}', targetMethod=find, args=[\"{id}\"]}"
    );
}

#[test]
fn frozen_route_serializes() {
    let mut route = RouteDescriptor::new();
    let mut cars = route
        .set_path("/cars")
        .on([RequestMethod::Post])
        .consumes([MediaType::JSON])
        .to::<Cars>()
        .unwrap();
    let car = cars.param("car");
    cars.invoke("save", args![car]).unwrap();
    let json = serde_json::to_value(route.freeze().unwrap()).unwrap();

    assert_eq!(json["path"], "/cars");
    assert_eq!(json["methods"], serde_json::json!(["POST"]));
    assert_eq!(json["consumes"], serde_json::json!(["application/json"]));
    assert_eq!(json["target_method"]["name"], "save");
    assert_eq!(json["parameters"][0]["kind"], "named");
    assert_eq!(json["parameters"][0]["name"], "car");
    assert_eq!(json["parameters"][0]["declared_type"], "string");
}
