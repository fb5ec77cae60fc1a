/// Metadata for a script engine (the engine's own information).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EngineMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
}

/// A factory for a script engine, as exposed by the process-wide engine
/// manager. Only discovery data is consumed here; engine construction and
/// script execution belong to the execution collaborator.
pub trait ScriptEngineFactory: Send + Sync {
    fn metadata(&self) -> EngineMetadata;

    /// File extensions this engine handles, in declaration order.
    fn extensions(&self) -> &[String];
}
