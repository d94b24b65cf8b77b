//! Domain models for the prakriti system.

mod dosha;
mod followup;
mod profile;
mod result;
mod snapshot;

pub use dosha::*;
pub use followup::*;
pub use profile::*;
pub use result::*;
pub use snapshot::*;
