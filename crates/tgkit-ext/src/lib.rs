pub mod context;
pub mod types;

pub use context::DefaultContext;
pub use types::{CallbackContext, ContextTypes, JsonMap};
