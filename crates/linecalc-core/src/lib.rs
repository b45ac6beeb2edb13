//! linecalc-core - UI-agnostic document model + text loading.

pub mod document;
pub mod error;
pub mod storage;

pub use document::{Document, PassRequest, PassResult};
pub use error::{DocumentError, Result};

pub use linecalc_engine::engine::{Environment, Line};
