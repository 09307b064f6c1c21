//! Registration backend for submitted forms

mod local;
mod traits;

pub use local::LocalRegistrar;
pub use traits::{Registrar, Registration};

#[cfg(test)]
pub use traits::MockRegistrar;
