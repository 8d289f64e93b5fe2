//! Declaration-syntax rendering for C#, Visual Basic, XAML and JScript.
//!
//! A [`Renderer`] takes one read-only [`syntaxgen_model::EntityNode`] and produces,
//! per target language, the declaration a programmer would write for it. Output is
//! recorded as styled [`SyntaxBlock`]s through the [`SyntaxWriter`] abstraction and
//! projected to plain text or pipeline markup afterwards.

/// Renderer configuration and public API.
pub mod core;
/// Domain-specific errors for the renderer.
pub mod error;
/// The generator contract and shared dispatch.
pub mod generator;
/// Language backends.
pub mod languages;
/// Plain and markup projections of rendered blocks.
pub mod output;
/// Formatting helpers shared by every backend.
pub mod syntax;
/// Styled text sink.
pub mod writer;

// Re-export public API
pub use core::{LanguageOutput, Renderer};

pub use error::{RenderError, Result};
pub use generator::{CastKind, SyntaxGenerator, Unsupported};
pub use languages::Language;
pub use output::{ReferenceResolver, RenderFormat, ShortNameResolver};
pub use writer::{BlockWriter, Style, SyntaxBlock, SyntaxElement, SyntaxWriter};
