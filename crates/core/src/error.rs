use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("cannot correctly instantiate class {class_name}")]
    Instantiation {
        class_name: String,
        #[source]
        source: bindery_plugin::InstantiationError,
    },
    #[error("Invalid request: {0}")]
    Api(#[from] bindery_api::ApiError),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
