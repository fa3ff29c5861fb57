pub mod directive;
pub mod size;

pub use directive::{Command, Directives};
pub use size::Size;
