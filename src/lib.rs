mod comparison;
mod matcher;
mod mismatch;
mod reporter;

pub use comparison::*;
pub use matcher::*;
pub use mismatch::*;
pub use reporter::*;
