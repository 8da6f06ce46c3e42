use std::collections::HashMap;

use http::Method;

/// One declared entry of the route table.
///
/// `data` is opaque passthrough metadata (handler id, upstream address,
/// anything the caller dispatches on).
#[derive(Debug, Clone)]
pub struct RouteDefinition<T> {
    pub name: String,
    pub path: String,
    /// `None` matches any method, apart from the OPTIONS bypass which
    /// matches regardless.
    pub method: Option<Method>,
    pub data: T,
}

/// A successful match: the definition's fields plus the parameters captured
/// from the request path, one entry per placeholder in the template.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<'a, T> {
    pub name: &'a str,
    pub path: &'a str,
    pub method: Option<&'a Method>,
    pub data: &'a T,
    pub params: HashMap<String, String>,
}
