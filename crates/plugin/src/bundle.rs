use std::any::Any;
use std::sync::Arc;
use url::Url;

pub type InstantiationError = Box<dyn std::error::Error + Send + Sync>;

/// An artifact store holding bundled scripts, in precompiled (class) or
/// source (resource entry) form. Read-only from the resolver's
/// perspective; lookups are synchronous.
pub trait Bundle: Send + Sync {
    /// The bundle's symbolic name, used for diagnostics.
    fn symbolic_name(&self) -> &str;

    /// Look up a precompiled script class by its canonical class name.
    /// Absence is a normal outcome.
    fn load_class(&self, class_name: &str) -> Option<Arc<dyn LoadableClass>>;

    /// Look up a resource entry by bundle path. Absence is a normal
    /// outcome.
    fn entry(&self, path: &str) -> Option<Url>;
}

/// A precompiled script class exposing a single no-argument factory
/// operation.
pub trait LoadableClass: Send + Sync {
    fn class_name(&self) -> &str;

    /// Construct the script object. A present-but-broken class (missing
    /// no-arg constructor, constructor panic translated by the store, ...)
    /// surfaces here and aborts the resolution that found it.
    fn instantiate(&self) -> Result<Box<dyn Executable>, InstantiationError>;
}

/// An instantiated script object, handed off opaquely to the execution
/// collaborator.
pub trait Executable: Send + Sync {
    fn as_any(&self) -> &dyn Any;
}
