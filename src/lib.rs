#![deny(elided_lifetimes_in_paths)]
#![deny(explicit_outlives_requirements)]
#![deny(keyword_idents)]
#![deny(meta_variable_misuse)]
#![deny(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![warn(noop_method_call)]
#![deny(single_use_lifetimes)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unsafe_code)]
#![warn(unused_crate_dependencies)]
#![deny(unused_import_braces)]
#![deny(unused_lifetimes)]
#![warn(unused_macro_rules)]

//! In-memory model of method declarations in generated source code. The
//! types here only describe a declaration; turning one into source text is
//! the job of a separate renderer.

pub mod annotation;
pub mod code;
pub mod error;
pub mod method;
pub mod modifier;
pub mod parameter;
pub mod statement;
