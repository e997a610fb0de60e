pub mod new_page;
pub mod render;
pub mod validate;

pub use new_page::{new_page, NewPageArgs};
pub use render::{render, RenderArgs};
pub use validate::{validate, ValidateArgs};
