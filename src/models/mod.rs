pub mod project;
pub mod session;

pub use project::*;
pub use session::*;
