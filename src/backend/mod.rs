//! Code-synthesis backend: model tree in, C# compilation unit out.
//!
//! The pipeline is a single linear pass:
//! 1. [`model::Context`](crate::model::Context) from the external parser
//! 2. [`generator::Generator`] walks contracts, members, and entities
//! 3. [`writer::CodeWriter`] interpolates templates and forwards lines to an
//!    indentation-tracking sink
//!
//! ## Module Organization
//!
//! - `options.rs` - Template configuration with defaults
//! - `template.rs` - Positional `{N}` template interpolation
//! - `writer.rs` - Indented writer and the sink abstraction
//! - `display.rs` - Display-format rewriting (free-form → positional)
//! - `generator.rs` - The emission engine itself

pub mod display;
pub mod generator;
pub mod options;
pub mod template;
pub mod writer;

pub use generator::{GenerateError, Generator};
pub use options::GeneratorOptions;
