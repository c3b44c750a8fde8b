pub mod arena;
pub mod record;

pub use arena::*;
pub use record::*;
