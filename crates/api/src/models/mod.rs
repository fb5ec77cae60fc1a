pub mod method;
pub mod request;
pub mod resource_type;

pub use method::*;
pub use request::*;
pub use resource_type::*;
