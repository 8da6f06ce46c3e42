use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use super::pattern::{compile, CompiledPattern};

/// Template→pattern store with idempotent get-or-compile semantics.
///
/// Compilation is a pure function, so two threads racing on the same template
/// at worst waste one compilation; whichever insert lands first wins and both
/// callers get an equivalent pattern.
pub trait PatternCache: Send + Sync {
    fn get_or_compile(&self, template: &str) -> Arc<CompiledPattern>;
}

/// In-memory store keyed by the raw template string.
#[derive(Debug, Default)]
pub struct MemoryPatternCache {
    patterns: RwLock<HashMap<String, Arc<CompiledPattern>>>,
}

impl MemoryPatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.patterns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl PatternCache for MemoryPatternCache {
    fn get_or_compile(&self, template: &str) -> Arc<CompiledPattern> {
        {
            let patterns = self.patterns.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = patterns.get(template) {
                return hit.clone();
            }
        }
        let compiled = Arc::new(compile(template));
        let mut patterns = self
            .patterns
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        patterns
            .entry(template.to_string())
            .or_insert(compiled)
            .clone()
    }
}

/// Recompiles on every lookup. Caching is an optimization, not a correctness
/// requirement; this store makes that testable.
#[derive(Debug, Default)]
pub struct NoopCache;

impl PatternCache for NoopCache {
    fn get_or_compile(&self, template: &str) -> Arc<CompiledPattern> {
        Arc::new(compile(template))
    }
}
