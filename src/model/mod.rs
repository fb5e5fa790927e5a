//! Domain model types (pure).

pub mod error;
pub mod file_kind;
pub mod key_action;
pub mod line_store;

pub use error::{AppError, EnumerationError};
pub use file_kind::FileKind;
pub use key_action::KeyAction;
pub use line_store::LineStore;
