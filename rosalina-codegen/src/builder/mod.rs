//! Text-level building blocks shared by every renderer.
//!
//! - [`CodeBuilder`] - indentation-aware line buffer
//! - [`CodeFragment`] - un-indented intermediate form of rendered nodes
//! - [`Renderable`] - nodes that lower to fragments
//! - [`Indent`] - indentation configuration
//! - [`normalize`] - canonical whitespace pass

mod code_builder;
mod fragment;
mod indent;
mod normalize;

pub use code_builder::CodeBuilder;
pub use fragment::{CodeFragment, Renderable};
pub use indent::Indent;
pub use normalize::normalize;
