pub mod record;
pub mod status;
pub mod summary;

pub use summary::{generate, Report};
