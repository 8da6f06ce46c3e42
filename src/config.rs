//! Serde-backed route-table configuration.
//!
//! Tables are declared as an ordered list, since declaration order is match
//! priority. Fields other than `name`, `path` and `method` are collected into
//! `data` and passed through untouched to the matched route.

use http::Method;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::TableError,
    router::{Router, RouterBuilder},
};

/// One declared route as it appears in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteConfig {
    pub name: String,
    pub path: String,
    /// Optional HTTP verb, case-insensitive. Absent or empty matches any
    /// method.
    #[serde(default)]
    pub method: Option<String>,
    #[serde(flatten)]
    pub data: Value,
}

impl RouteConfig {
    fn method(&self) -> Result<Option<Method>, TableError> {
        self.method
            .as_deref()
            .filter(|method| !method.is_empty())
            .map(|method| {
                Method::from_bytes(method.to_ascii_uppercase().as_bytes()).map_err(|_| {
                    TableError::InvalidMethod {
                        name: self.name.clone(),
                        method: method.to_string(),
                    }
                })
            })
            .transpose()
    }
}

/// Assemble a router from an ordered configuration table.
pub fn from_config(routes: Vec<RouteConfig>) -> Result<Router<Value>, TableError> {
    let mut builder = RouterBuilder::new();
    for route in routes {
        let method = route.method()?;
        builder = builder.add_route(route.name, route.path, method, route.data);
    }
    builder.build()
}
