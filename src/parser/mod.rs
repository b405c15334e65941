//! Command parsing
//!
//! Input goes through two independent passes. The normalizer reduces the
//! raw line to a canonical `verb [object]` string used to pick a handler,
//! while the object extractor takes the literal last word of the raw line
//! so object names are never rewritten by synonym expansion.

pub mod command;
pub mod normalize;

pub use command::*;
pub use normalize::*;
