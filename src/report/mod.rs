pub mod formatter;
pub mod summary;

pub use formatter::*;
pub use summary::*;
