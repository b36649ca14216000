//! Members of a type declaration.

use super::{Attribute, Statement, TypeName, Visibility};

/// A field; private unless stated otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeName,
    pub visibility: Visibility,
    /// Attribute markers; each appears at most once.
    pub attributes: Vec<Attribute>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeName) -> Self {
        Self {
            name: name.into(),
            ty,
            visibility: Visibility::Private,
            attributes: Vec::new(),
        }
    }

    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    /// Add an attribute; adding the same one twice is a no-op.
    pub fn attribute(mut self, attr: Attribute) -> Self {
        if !self.attributes.contains(&attr) {
            self.attributes.push(attr);
        }
        self
    }
}

/// A read-only property with a block-bodied getter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub ty: TypeName,
    pub visibility: Visibility,
    pub getter: Vec<Statement>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: TypeName) -> Self {
        Self {
            name: name.into(),
            ty,
            visibility: Visibility::Public,
            getter: Vec::new(),
        }
    }

    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    pub fn getter(mut self, stmt: Statement) -> Self {
        self.getter.push(stmt);
        self
    }
}

/// A parameterless method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    /// `None` renders as `void`.
    pub return_type: Option<TypeName>,
    pub visibility: Visibility,
    pub body: Vec<Statement>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            visibility: Visibility::Public,
            body: Vec::new(),
        }
    }

    pub fn returns(mut self, ty: TypeName) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    pub fn statement(mut self, stmt: Statement) -> Self {
        self.body.push(stmt);
        self
    }
}

/// Discriminant of [`Member`], handy for order assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Property,
    Method,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Field(Field),
    Property(Property),
    Method(Method),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Self::Field(f) => &f.name,
            Self::Property(p) => &p.name,
            Self::Method(m) => &m.name,
        }
    }

    pub fn kind(&self) -> MemberKind {
        match self {
            Self::Field(_) => MemberKind::Field,
            Self::Property(_) => MemberKind::Property,
            Self::Method(_) => MemberKind::Method,
        }
    }

    /// Every type this member mentions, attributes included.
    pub fn referenced_types(&self) -> Vec<&TypeName> {
        match self {
            Self::Field(f) => std::iter::once(&f.ty)
                .chain(f.attributes.iter().map(|a| &a.name))
                .collect(),
            Self::Property(p) => vec![&p.ty],
            Self::Method(m) => m.return_type.iter().collect(),
        }
    }
}

impl From<Field> for Member {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<Property> for Member {
    fn from(property: Property) -> Self {
        Self::Property(property)
    }
}

impl From<Method> for Member {
    fn from(method: Method) -> Self {
        Self::Method(method)
    }
}
