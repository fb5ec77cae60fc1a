pub mod error;
pub mod logging;
pub mod resolver;

pub use error::Result;
pub use resolver::{ProbeMode, ResolvedScript, ScriptResolver};
