//! Type declarations and the compilation unit root.

use std::collections::BTreeSet;

use super::{ImportSet, Member, TypeName, Visibility};
use crate::{Error, Result};

/// A class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub visibility: Visibility,
    pub is_partial: bool,
    pub base_type: Option<TypeName>,
    /// Members in render order.
    pub members: Vec<Member>,
}

impl TypeDecl {
    /// A public, non-partial class without a base type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_partial: false,
            base_type: None,
            members: Vec::new(),
        }
    }

    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    pub fn partial(mut self) -> Self {
        self.is_partial = true;
        self
    }

    pub fn base(mut self, ty: TypeName) -> Self {
        self.base_type = Some(ty);
        self
    }

    pub fn member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Namespaces of every type named by this declaration, sorted.
    pub fn referenced_namespaces(&self) -> BTreeSet<&str> {
        self.base_type
            .iter()
            .chain(self.members.iter().flat_map(Member::referenced_types))
            .filter_map(TypeName::namespace)
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::malformed("type declaration has an empty name"));
        }
        if self.base_type.as_ref().is_some_and(|b| b.name().is_empty()) {
            return Err(Error::malformed(format!(
                "type '{}' has an empty base type",
                self.name
            )));
        }
        for member in &self.members {
            if member.name().is_empty() {
                return Err(Error::malformed(format!(
                    "type '{}' has a member with an empty name",
                    self.name
                )));
            }
            if member.referenced_types().iter().any(|t| t.name().is_empty()) {
                return Err(Error::malformed(format!(
                    "member '{}.{}' references an unnamed type",
                    self.name,
                    member.name()
                )));
            }
        }
        Ok(())
    }
}

/// Root of a declaration tree: imports followed by type declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationUnit {
    pub imports: ImportSet,
    pub types: Vec<TypeDecl>,
}

impl CompilationUnit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn imports(mut self, imports: ImportSet) -> Self {
        self.imports = imports;
        self
    }

    pub fn type_decl(mut self, decl: TypeDecl) -> Self {
        self.types.push(decl);
        self
    }

    /// Check the structural preconditions of rendering.
    ///
    /// Fails with [`Error::MalformedTree`] for empty names, empty imports, or a
    /// referenced namespace that is not imported.
    pub fn validate(&self) -> Result<()> {
        if self.types.is_empty() {
            return Err(Error::malformed("compilation unit declares no types"));
        }
        if self.imports.iter().any(str::is_empty) {
            return Err(Error::malformed("empty namespace import"));
        }
        for decl in &self.types {
            decl.validate()?;
            if let Some(missing) = decl
                .referenced_namespaces()
                .into_iter()
                .find(|ns| !self.imports.contains(ns))
            {
                return Err(Error::malformed(format!(
                    "type '{}' uses namespace '{}' which is not imported",
                    decl.name, missing
                )));
            }
        }
        Ok(())
    }
}
