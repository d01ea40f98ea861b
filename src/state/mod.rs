//! Application state module

mod app_state;
mod document;
mod factory;
mod field;
mod inspector;
mod registry;
mod session;

pub use app_state::*;
pub use document::*;
pub use factory::*;
pub use field::*;
pub use inspector::*;
pub use registry::*;
pub use session::*;
