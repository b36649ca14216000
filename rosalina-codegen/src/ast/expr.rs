//! Expressions and statements used in member bodies.

/// An expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A bare identifier: `_document`.
    Identifier(String),
    /// Member access, optionally null-conditional: `target.member` / `target?.member`.
    MemberAccess {
        target: Box<Expr>,
        member: String,
        null_conditional: bool,
    },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// `self.member`
    pub fn member(self, member: impl Into<String>) -> Self {
        Self::MemberAccess {
            target: Box::new(self),
            member: member.into(),
            null_conditional: false,
        }
    }

    /// `self?.member`: yields null instead of failing when `self` is null.
    pub fn null_conditional_member(self, member: impl Into<String>) -> Self {
        Self::MemberAccess {
            target: Box::new(self),
            member: member.into(),
            null_conditional: true,
        }
    }
}

/// A statement inside a block body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Return(Expr),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_chain() {
        let expr = Expr::ident("_document").null_conditional_member("rootVisualElement");
        match &expr {
            Expr::MemberAccess {
                target,
                member,
                null_conditional,
            } => {
                assert_eq!(**target, Expr::ident("_document"));
                assert_eq!(member, "rootVisualElement");
                assert!(null_conditional);
            }
            _ => panic!("Expected MemberAccess"),
        }
    }
}
