use std::{collections::HashMap, fmt, sync::Arc};

use http::Method;
use tracing::{debug, trace};

use crate::{error::RouterError, http::RouteRequest};

use super::{
    cache::PatternCache,
    route::{Route, RouteDefinition},
};

/// Ordered table of named routes.
///
/// Declaration order is match priority: the first entry whose pattern and
/// method both accept the request wins, regardless of specificity. The table
/// is read-only after construction; `find` and `build` take `&self` and are
/// safe to call concurrently.
pub struct Router<T> {
    table: Vec<RouteDefinition<T>>,
    index: HashMap<String, usize>,
    cache: Arc<dyn PatternCache>,
}

impl<T: fmt::Debug> fmt::Debug for Router<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("table", &self.table)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<T> Router<T> {
    pub(crate) fn new(
        table: Vec<RouteDefinition<T>>,
        index: HashMap<String, usize>,
        cache: Arc<dyn PatternCache>,
    ) -> Self {
        Self {
            table,
            index,
            cache,
        }
    }

    /// Number of declared routes.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Find the first route matching the request.
    ///
    /// A structural match with the wrong method does not end the search;
    /// later entries with the same path shape are still considered. An
    /// OPTIONS request matches any route whose path matches, ignoring the
    /// declared method, so preflight requests need no per-route OPTIONS
    /// entries. `None` means no route is declared for the request; it is a
    /// regular outcome, not a failure.
    pub fn find(&self, request: &impl RouteRequest) -> Option<Route<'_, T>> {
        let method = request.method();
        for route in &self.table {
            let pattern = self.cache.get_or_compile(&route.path);
            let Some(params) = pattern.extract(request.path()) else {
                continue;
            };
            if *method != Method::OPTIONS {
                if let Some(declared) = &route.method {
                    if !declared.as_str().eq_ignore_ascii_case(method.as_str()) {
                        trace!(
                            route = route.name.as_str(),
                            declared = declared.as_str(),
                            "path matched, method did not"
                        );
                        continue;
                    }
                }
            }
            debug!(route = route.name.as_str(), path = request.path(), "matched");
            return Some(Route {
                name: &route.name,
                path: &route.path,
                method: route.method.as_ref(),
                data: &route.data,
                params,
            });
        }
        debug!(path = request.path(), "no route matched");
        None
    }

    /// Build a concrete path for the named route, substituting `params` into
    /// the template.
    ///
    /// Each `{key}` token is replaced whole in a single pass over the raw
    /// template; substituted text is never re-scanned for further tokens.
    /// Supplied keys without a matching placeholder are ignored.
    pub fn build(&self, name: &str, params: &HashMap<&str, &str>) -> Result<String, RouterError> {
        let position = self
            .index
            .get(name)
            .ok_or_else(|| RouterError::UnknownRoute(name.to_string()))?;
        let template = self.table[*position].path.as_str();

        let mut url = String::with_capacity(template.len());
        let mut required = Vec::new();
        let mut unresolved = false;
        let mut i = 0;
        while i < template.len() {
            let Some(offset) = template[i..].find('{') else {
                url.push_str(&template[i..]);
                break;
            };
            let start = i + offset;
            url.push_str(&template[i..start]);
            let rest = &template[start + 1..];
            let Some(end) = rest.find('}') else {
                // tables are validated at load time; a stray `{` in the tail
                // is copied through as a literal
                url.push_str(&template[start..]);
                break;
            };
            let ident = &rest[..end];
            required.push(ident.to_string());
            match params.get(ident) {
                Some(value) => url.push_str(value),
                None => {
                    unresolved = true;
                    url.push_str(&template[start..start + end + 2]);
                }
            }
            i = start + end + 2;
        }

        if unresolved {
            let mut given: Vec<String> = params.keys().map(|key| key.to_string()).collect();
            given.sort();
            return Err(RouterError::MissingParameters { required, given });
        }
        Ok(url)
    }
}
