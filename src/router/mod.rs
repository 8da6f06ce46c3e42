pub use builder::RouterBuilder;
pub use cache::{MemoryPatternCache, NoopCache, PatternCache};
pub use pattern::{compile, CompiledPattern};
pub use route::{Route, RouteDefinition};
pub use router::Router;

mod builder;
mod cache;
mod pattern;
mod route;
mod router;
