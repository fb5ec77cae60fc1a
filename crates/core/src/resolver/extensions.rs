//! Extension ranking.
//!
//! Engines registered later should be probed first, so the concatenation
//! of every factory's declared extensions is reversed as a whole. No
//! dedup: a duplicate extension probes twice, which is harmless since the
//! search stops at the first hit.

use bindery_plugin::EngineRegistry;

/// Recomputed on every resolution call so the ranking always reflects the
/// registry's current state.
pub fn ranked_extensions(registry: &dyn EngineRegistry) -> Vec<String> {
    let mut extensions: Vec<String> = Vec::new();
    for factory in registry.factories() {
        extensions.extend(factory.extensions().iter().cloned());
    }
    extensions.reverse();
    extensions
}
