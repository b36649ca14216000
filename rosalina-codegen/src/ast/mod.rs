//! Declaration tree of a generated source file.
//!
//! The tree is built by a generation policy and printed by a
//! [`SourceRenderer`](crate::SourceRenderer); nothing here knows about the
//! target syntax.

mod decl;
mod expr;
mod imports;
mod members;
mod types;

pub use decl::{CompilationUnit, TypeDecl};
pub use expr::{Expr, Statement};
pub use imports::ImportSet;
pub use members::{Field, Member, MemberKind, Method, Property};
pub use types::{Attribute, TypeName, Visibility};
