pub use trilogic_core as core;
pub use trilogic_core::*;
