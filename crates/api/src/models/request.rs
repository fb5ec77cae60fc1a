use crate::error::{ApiError, ApiResult};
use crate::models::{Method, ResourceType};
use serde::{Deserialize, Serialize};

/// Immutable description of an incoming request, snapshotted once per
/// resolution call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptRequest {
    resource_type: ResourceType,
    method: Method,
    extension: Option<String>,
    selectors: Vec<String>,
}

impl ScriptRequest {
    pub fn new(resource_type: impl Into<ResourceType>, method: impl Into<Method>) -> ApiResult<Self> {
        let resource_type = resource_type.into();
        if resource_type.is_empty() {
            return Err(ApiError::InvalidRequest("empty resource type".to_string()));
        }
        let method = method.into();
        if method.as_str().is_empty() {
            return Err(ApiError::InvalidRequest("empty method".to_string()));
        }
        Ok(Self {
            resource_type,
            method,
            extension: None,
            selectors: Vec::new(),
        })
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn with_selectors(mut self, selectors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.selectors = selectors.into_iter().map(Into::into).collect();
        self
    }

    pub fn resource_type(&self) -> &ResourceType {
        &self.resource_type
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }
}
