//! kansa-kernel (核): The core of 監査.
//!
//! This crate provides:
//!
//! - **Lexer**: Tokenizes `.kai` source using logos
//! - **Parser**: Builds AST from tokens using chumsky
//! - **AST**: Type definitions for the abstract syntax tree
//! - **Discovery**: Deterministic target enumeration over a repository root
//! - **Validators**: One per target kind, behind a common contract
//! - **Reporter**: Line-oriented rendering and exit-code derivation
//! - **Pipeline**: The single linear discover → validate → aggregate → report pass

pub mod ast;
pub mod discovery;
pub mod lexer;
pub mod parser;
pub mod pipeline;
pub mod reporter;
pub mod validators;

pub use discovery::discover;
pub use pipeline::run;
pub use reporter::render;
