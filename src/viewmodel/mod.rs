//! View model layer: derives form outputs from field input streams

mod coordinator;

pub use coordinator::{FormCoordinator, FormOutputs};
