//! C# printer for declaration trees.

use rosalina_codegen::{
    BannerMeta, SourceRenderer,
    ast::{CompilationUnit, Expr, Field, Member, Method, Property, Statement, TypeDecl},
    builder::{CodeBuilder, CodeFragment, Indent, Renderable},
};

use crate::banner::render_banner;

/// Renders compilation units as Allman-style C#.
#[derive(Debug, Clone, Copy)]
pub struct CSharpRenderer {
    indent: Indent,
}

impl CSharpRenderer {
    pub fn new() -> Self {
        Self {
            indent: Indent::CSHARP,
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

impl Default for CSharpRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceRenderer for CSharpRenderer {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn render_banner(&self, meta: &BannerMeta) -> String {
        render_banner(meta)
    }

    fn render_unit(&self, unit: &CompilationUnit) -> String {
        let mut builder = CodeBuilder::new(self.indent);

        for namespace in unit.imports.iter() {
            builder.push_line(&format!("using {};", namespace));
        }

        for decl in &unit.types {
            builder.push_blank();
            builder.emit(&CSharp(decl));
        }

        builder.build()
    }
}

/// A declaration node lowered with C# syntax.
struct CSharp<'a, T>(&'a T);

impl Renderable for CSharp<'_, TypeDecl> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![type_decl(self.0)]
    }
}

impl Renderable for CSharp<'_, Member> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![member(self.0)]
    }
}

fn type_decl(decl: &TypeDecl) -> CodeFragment {
    let mut header = String::from(decl.visibility.keyword());
    if decl.is_partial {
        header.push_str(" partial");
    }
    header.push_str(" class ");
    header.push_str(&decl.name);
    if let Some(base) = &decl.base_type {
        header.push_str(" : ");
        header.push_str(base.name());
    }

    let mut body = Vec::new();
    for (i, m) in decl.members.iter().enumerate() {
        if i > 0 {
            body.push(CodeFragment::Blank);
        }
        body.extend(CSharp(m).to_fragments());
    }

    CodeFragment::scope(header, body)
}

fn member(member: &Member) -> CodeFragment {
    match member {
        Member::Field(f) => field(f),
        Member::Property(p) => property(p),
        Member::Method(m) => method(m),
    }
}

fn field(field: &Field) -> CodeFragment {
    let mut lines: Vec<CodeFragment> = field
        .attributes
        .iter()
        .map(|attr| CodeFragment::line(format!("[{}]", attr.name)))
        .collect();
    lines.push(CodeFragment::line(format!(
        "{} {} {};",
        field.visibility.keyword(),
        field.ty,
        field.name
    )));
    CodeFragment::Sequence(lines)
}

fn property(property: &Property) -> CodeFragment {
    CodeFragment::scope(
        format!(
            "{} {} {}",
            property.visibility.keyword(),
            property.ty,
            property.name
        ),
        vec![CodeFragment::scope("get", statements(&property.getter))],
    )
}

fn method(method: &Method) -> CodeFragment {
    let return_type = method
        .return_type
        .as_ref()
        .map_or("void", |ty| ty.name());
    CodeFragment::scope(
        format!(
            "{} {} {}()",
            method.visibility.keyword(),
            return_type,
            method.name
        ),
        statements(&method.body),
    )
}

fn statements(stmts: &[Statement]) -> Vec<CodeFragment> {
    stmts
        .iter()
        .map(|stmt| match stmt {
            Statement::Return(e) => CodeFragment::line(format!("return {};", expr(e))),
        })
        .collect()
}

fn expr(e: &Expr) -> String {
    match e {
        Expr::Identifier(name) => name.clone(),
        Expr::MemberAccess {
            target,
            member,
            null_conditional,
        } => {
            let op = if *null_conditional { "?." } else { "." };
            format!("{}{}{}", expr(target), op, member)
        }
    }
}
