pub mod definitions;
pub mod error;

pub use definitions::load;
pub use definitions::save;
pub use definitions::Entry;
pub use definitions::JsonFile;
pub use definitions::Provider;
pub use error::Result;
pub use error::StorageError;
