//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the folder tree, the
//! selected file, its loaded tags and the editable form.

mod model;

pub use model::*;
