pub mod sequence;
pub mod serde_helpers;
pub mod time;
pub mod validation;
