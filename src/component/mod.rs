pub mod conversion;
pub mod definition;
pub mod metadata;

pub use conversion::*;
pub use definition::*;
pub use metadata::*;
