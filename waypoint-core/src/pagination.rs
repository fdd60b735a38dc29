use serde::Serialize;

use crate::config::{ConfigError, ConfigProperties, RouterConfig};
use crate::params::{ParamType, Parameter};

/// Pagination declared on a target method.
///
/// The offset and limit are read from the request like any other named
/// parameter; a pagination strategy in the dispatch layer consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paginated {
    pub offset_param_name: String,
    pub default_offset: i64,
    pub limit_param_name: String,
    pub default_limit: i64,
}

impl Default for Paginated {
    fn default() -> Self {
        Self {
            offset_param_name: "offset".to_string(),
            default_offset: 0,
            limit_param_name: "limit".to_string(),
            default_limit: 10,
        }
    }
}

impl Paginated {
    pub fn new(
        offset_param_name: impl Into<String>,
        default_offset: i64,
        limit_param_name: impl Into<String>,
        default_limit: i64,
    ) -> Self {
        Self {
            offset_param_name: offset_param_name.into(),
            default_offset,
            limit_param_name: limit_param_name.into(),
            default_limit,
        }
    }
}

impl ConfigProperties for Paginated {
    fn prefix() -> &'static str {
        "router.pagination"
    }

    fn from_config(config: &RouterConfig) -> Result<Self, ConfigError> {
        let defaults = Paginated::default();
        let prefix = Self::prefix();
        Ok(Self {
            offset_param_name: config
                .get_opt(&format!("{prefix}.offset.name"))?
                .unwrap_or(defaults.offset_param_name),
            default_offset: config
                .get_opt(&format!("{prefix}.offset.default"))?
                .unwrap_or(defaults.default_offset),
            limit_param_name: config
                .get_opt(&format!("{prefix}.limit.name"))?
                .unwrap_or(defaults.limit_param_name),
            default_limit: config
                .get_opt(&format!("{prefix}.limit.default"))?
                .unwrap_or(defaults.default_limit),
        })
    }
}

/// Anything that can tell whether a target method is paginated.
pub trait PaginationMetadata {
    fn pagination(&self) -> Option<&Paginated>;
}

/// Synthetic parameters for a paginated method: offset, then limit.
///
/// Returns an empty list when `meta` is `None`.
pub fn pagination_parameters(meta: Option<&Paginated>) -> Vec<Parameter> {
    match meta {
        None => Vec::new(),
        Some(p) => vec![
            Parameter::named_with(
                p.offset_param_name.clone(),
                Some(p.default_offset.to_string()),
                ParamType::String,
            ),
            Parameter::named_with(
                p.limit_param_name.clone(),
                Some(p.default_limit.to_string()),
                ParamType::String,
            ),
        ],
    }
}
