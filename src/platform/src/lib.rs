pub mod definitions;
pub mod error;
pub mod http;

pub use definitions::CreateDefinitionRequest;
pub use definitions::CreateDefinitionResponse;
pub use definitions::Definitions;
pub use error::PlatformError;
pub use error::Result;
