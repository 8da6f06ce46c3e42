use std::{collections::HashMap, sync::Arc};

use http::Method;
use tracing::debug;

use crate::error::TableError;

use super::{
    cache::{MemoryPatternCache, PatternCache},
    route::RouteDefinition,
    router::Router,
};

type RawRoute<T> = (String, String, Option<Method>, T);

/// Assembles and validates the ordered route table. Routes are declared in
/// match-priority order; `build` rejects tables the router could not serve
/// deterministically.
#[derive(Debug)]
pub struct RouterBuilder<T> {
    routes: Vec<RawRoute<T>>,
}

impl<T> Default for RouterBuilder<T> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<T> RouterBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_route(
        mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        method: Option<Method>,
        data: T,
    ) -> Self {
        self.routes.push((name.into(), path.into(), method, data));
        self
    }

    pub fn build(self) -> Result<Router<T>, TableError> {
        self.build_with_cache(Arc::new(MemoryPatternCache::new()))
    }

    pub fn build_with_cache(self, cache: Arc<dyn PatternCache>) -> Result<Router<T>, TableError> {
        let mut index = HashMap::with_capacity(self.routes.len());
        let mut table = Vec::with_capacity(self.routes.len());
        for (position, (name, path, method, data)) in self.routes.into_iter().enumerate() {
            validate_template(&name, &path)?;
            if index.insert(name.clone(), position).is_some() {
                return Err(TableError::DuplicateRoute(name));
            }
            table.push(RouteDefinition {
                name,
                path,
                method,
                data,
            });
        }
        debug!(routes = table.len(), "route table assembled");
        Ok(Router::new(table, index, cache))
    }
}

impl<T> From<Vec<RawRoute<T>>> for RouterBuilder<T> {
    fn from(routes: Vec<RawRoute<T>>) -> Self {
        Self { routes }
    }
}

impl<T> FromIterator<RawRoute<T>> for RouterBuilder<T> {
    fn from_iter<I: IntoIterator<Item = RawRoute<T>>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

/// Placeholders must be `{identifier}` with `identifier` in `[0-9A-Za-z_]+`,
/// terminated, and unique within one template. A lone `}` is a literal.
fn validate_template(name: &str, template: &str) -> Result<(), TableError> {
    let mut seen: Vec<&str> = Vec::new();
    let bytes = template.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'{' {
            i += 1;
            continue;
        }
        let rest = &template[i + 1..];
        let Some(end) = rest.find('}') else {
            return Err(TableError::InvalidTemplate {
                name: name.to_string(),
                template: template.to_string(),
            });
        };
        let ident = &rest[..end];
        if ident.is_empty()
            || !ident
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            return Err(TableError::InvalidTemplate {
                name: name.to_string(),
                template: template.to_string(),
            });
        }
        if seen.contains(&ident) {
            return Err(TableError::DuplicateParam {
                name: name.to_string(),
                param: ident.to_string(),
            });
        }
        seen.push(ident);
        i += end + 2;
    }
    Ok(())
}
