//! Named-route URL router.
//!
//! Holds an ordered table of named path templates (`/users/{id}`), matches
//! incoming requests against it in declaration order, extracts path
//! parameters, and builds concrete URLs back out of a route name and a set of
//! parameter values.
//!
//! # Example usage
//!
//! ```
//! use std::collections::HashMap;
//!
//! use http::Method;
//! use route_map::{Request, RouterBuilder};
//!
//! let router = RouterBuilder::new()
//!     .add_route("home", "/", None, ())
//!     .add_route("user", "/users/{id}", Some(Method::GET), ())
//!     .build()
//!     .unwrap();
//!
//! let route = router
//!     .find(&Request::new(Method::GET, "/users/42"))
//!     .unwrap();
//! assert_eq!(route.name, "user");
//! assert_eq!(route.params["id"], "42");
//!
//! let url = router
//!     .build("user", &HashMap::from([("id", "42")]))
//!     .unwrap();
//! assert_eq!(url, "/users/42");
//! ```
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod http;
pub(crate) mod router;

pub use config::{from_config, RouteConfig};
pub use error::{RouterError, TableError};
pub use self::http::{Request, RouteRequest};
pub use router::{
    compile, CompiledPattern, MemoryPatternCache, NoopCache, PatternCache, Route, RouteDefinition,
    Router, RouterBuilder,
};
