pub mod bundle;
pub mod engine;
pub mod naming;
pub mod registry;

pub use bundle::{Bundle, Executable, InstantiationError, LoadableClass};
pub use engine::{EngineMetadata, ScriptEngineFactory};
pub use naming::{make_identifier, path_to_class_name};
pub use registry::{EngineRegistry, InMemoryEngineRegistry};
