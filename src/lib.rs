#![forbid(unsafe_code)]
//! Message-Contract DSL Code-Synthesis Backend
//!
//! This crate is the backend of a DSL-to-C# compiler for message/entity
//! contract declarations. Given a normalized model (built by the external
//! parser), it emits one C# compilation unit as text: immutable data-transfer
//! records, entity-role interfaces, and optional COM-interop bindings.
//!
//! The crate performs no parsing, validation, or file I/O. It is a pure
//! transformation: model in, text out.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!   No `unwrap()` or `expect()` outside tests.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Generated code**: The generator emits C# source as *string literals*.
//!   Braces, attributes, and keywords in those strings are output text, not
//!   constructs of this crate.

pub mod backend;
pub mod model;
pub mod naming;

pub use backend::generator::{GenerateError, Generator};
pub use backend::options::GeneratorOptions;
pub use backend::template::TemplateError;
pub use backend::writer::{CodeWriter, IndentSink, TextSink};
