// Endpoint resolution: uri validation, parameter binding, assembly.

pub mod endpoint;
pub mod error;
pub mod factory;
pub mod uri;


// Re-export main types
pub use endpoint::HttpEndpoint;
pub use error::ResolveEndpointError;
pub use factory::HttpEndpointFactory;
