//! Visual theme for the Folio desktop shell.

mod styles;

pub use styles::GLOBAL_STYLES;
