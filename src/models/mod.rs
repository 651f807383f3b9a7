pub mod activity;
pub mod social;
pub mod score;
pub mod estimate;
pub mod error;

pub use activity::*;
pub use social::*;
pub use score::*;
pub use estimate::*;
pub use error::*;
