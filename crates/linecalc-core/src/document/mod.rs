//! Document state and logic (UI-agnostic).

mod eval;
mod io;
mod ops;
mod state;

pub use eval::{PassRequest, PassResult};
pub use state::Document;
