pub mod error;
pub mod id;
pub mod result;
pub mod slug;

pub use error::*;
pub use id::*;
pub use result::*;
pub use slug::*;
