//! Script resolution.
//!
//! Two cooperating phases with no state beyond request-scoped locals: the
//! candidate-path builder ranks identifier variants, and the prober walks
//! the (extension x candidate) cross-product against a bundle, returning
//! the first hit. Extension choice dominates identifier specificity, so
//! the extension is the outer loop.

pub mod candidates;
pub mod extensions;

pub use candidates::{DEFAULT_METHODS, build_script_matches};
pub use extensions::ranked_extensions;

use crate::error::{ResolveError, Result};
use bindery_api::{ResourceType, ScriptRequest};
use bindery_plugin::{Bundle, EngineRegistry, Executable, ScriptEngineFactory, path_to_class_name};
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Capability namespace under which bundles store source scripts.
pub const NS_JAVAX_SCRIPT: &str = "javax.script";

/// Which form of the script to probe for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMode {
    /// Look up precompiled classes and instantiate the first one found.
    Precompiled,
    /// Look up source entries under the `javax.script` namespace.
    Source,
}

/// A successfully resolved script: the bundle it came from, the engine
/// factory whose extension matched, and either the instantiated object or
/// the source locator. Execution belongs to the caller.
pub enum ResolvedScript {
    Precompiled {
        bundle: Arc<dyn Bundle>,
        engine: Arc<dyn ScriptEngineFactory>,
        executable: Box<dyn Executable>,
    },
    Source {
        bundle: Arc<dyn Bundle>,
        engine: Arc<dyn ScriptEngineFactory>,
        url: Url,
    },
}

impl ResolvedScript {
    pub fn bundle(&self) -> &Arc<dyn Bundle> {
        match self {
            ResolvedScript::Precompiled { bundle, .. } => bundle,
            ResolvedScript::Source { bundle, .. } => bundle,
        }
    }

    pub fn engine(&self) -> &Arc<dyn ScriptEngineFactory> {
        match self {
            ResolvedScript::Precompiled { engine, .. } => engine,
            ResolvedScript::Source { engine, .. } => engine,
        }
    }

    pub fn executable(&self) -> Option<&dyn Executable> {
        match self {
            ResolvedScript::Precompiled { executable, .. } => Some(executable.as_ref()),
            ResolvedScript::Source { .. } => None,
        }
    }

    pub fn source_url(&self) -> Option<&Url> {
        match self {
            ResolvedScript::Precompiled { .. } => None,
            ResolvedScript::Source { url, .. } => Some(url),
        }
    }
}

impl fmt::Debug for ResolvedScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedScript::Precompiled { bundle, engine, .. } => f
                .debug_struct("Precompiled")
                .field("bundle", &bundle.symbolic_name())
                .field("engine", &engine.metadata().name)
                .finish_non_exhaustive(),
            ResolvedScript::Source { bundle, engine, url } => f
                .debug_struct("Source")
                .field("bundle", &bundle.symbolic_name())
                .field("engine", &engine.metadata().name)
                .field("url", &url.as_str())
                .finish(),
        }
    }
}

/// Stateless resolver over an injected engine registry. Safe to share
/// across threads; every call recomputes its ranking from the registry's
/// current state.
pub struct ScriptResolver {
    registry: Arc<dyn EngineRegistry>,
}

impl ScriptResolver {
    pub fn new(registry: Arc<dyn EngineRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve the request against the bundle, returning the first hit or
    /// `None` when no script is bound to the request.
    pub fn resolve(
        &self,
        request: &ScriptRequest,
        bundle: &Arc<dyn Bundle>,
        mode: ProbeMode,
    ) -> Result<Option<ResolvedScript>> {
        self.resolve_type(request, bundle, mode, request.resource_type())
    }

    /// Resolve with a delegated resource type overriding the request's
    /// own. An empty delegate falls back to the request's type.
    pub fn resolve_delegated(
        &self,
        request: &ScriptRequest,
        bundle: &Arc<dyn Bundle>,
        mode: ProbeMode,
        delegated: &ResourceType,
    ) -> Result<Option<ResolvedScript>> {
        let resource_type = if delegated.is_empty() {
            request.resource_type()
        } else {
            delegated
        };
        self.resolve_type(request, bundle, mode, resource_type)
    }

    fn resolve_type(
        &self,
        request: &ScriptRequest,
        bundle: &Arc<dyn Bundle>,
        mode: ProbeMode,
        resource_type: &ResourceType,
    ) -> Result<Option<ResolvedScript>> {
        let matches = candidates::build_script_matches(
            resource_type,
            request.method(),
            request.extension(),
            request.selectors(),
            &DEFAULT_METHODS,
        );
        debug!(
            bundle = bundle.symbolic_name(),
            candidates = matches.len(),
            "built script candidates"
        );

        for extension in extensions::ranked_extensions(self.registry.as_ref()) {
            for script_path in &matches {
                match mode {
                    ProbeMode::Precompiled => {
                        let class_name = path_to_class_name(script_path);
                        if let Some(class) = bundle.load_class(&class_name) {
                            // The registry may have changed since the
                            // ranking snapshot; a vanished engine skips
                            // the pair.
                            let Some(engine) = self.registry.by_extension(&extension) else {
                                continue;
                            };
                            let executable = class.instantiate().map_err(|source| {
                                ResolveError::Instantiation {
                                    class_name: class_name.clone(),
                                    source,
                                }
                            })?;
                            debug!(
                                script = script_path.as_str(),
                                class = class_name.as_str(),
                                "resolved precompiled script"
                            );
                            return Ok(Some(ResolvedScript::Precompiled {
                                bundle: bundle.clone(),
                                engine,
                                executable,
                            }));
                        }
                    }
                    ProbeMode::Source => {
                        let entry_path = format!("{NS_JAVAX_SCRIPT}/{script_path}.{extension}");
                        if let Some(url) = bundle.entry(&entry_path) {
                            let Some(engine) = self.registry.by_extension(&extension) else {
                                continue;
                            };
                            debug!(script = entry_path.as_str(), "resolved source script");
                            return Ok(Some(ResolvedScript::Source {
                                bundle: bundle.clone(),
                                engine,
                                url,
                            }));
                        }
                    }
                }
            }
        }
        Ok(None)
    }
}
