//! What a UI document's code-behind contains.
//!
//! The shape is fixed: one public partial class named after the document,
//! deriving from `MonoBehaviour`, with a serialized `UIDocument` field, a
//! `Root` accessor and an empty `InitializeDocument` hook, in that order.

use rosalina_codegen::{
    SynthesisRequest,
    ast::{
        Attribute, CompilationUnit, Expr, Field, ImportSet, Method, Property, Statement, TypeDecl,
        TypeName,
    },
};

const UNITY_ENGINE: &str = "UnityEngine";
const UI_ELEMENTS: &str = "UnityEngine.UIElements";

const BASE_TYPE: &str = "MonoBehaviour";
const SERIALIZE_FIELD: &str = "SerializeField";
const DOCUMENT_TYPE: &str = "UIDocument";
const VISUAL_ELEMENT: &str = "VisualElement";

const DOCUMENT_FIELD: &str = "_document";
const ROOT_PROPERTY: &str = "Root";
const INITIALIZE_METHOD: &str = "InitializeDocument";
const ROOT_VISUAL_ELEMENT: &str = "rootVisualElement";

/// Namespaces every code-behind imports.
const IMPORTS: [&str; 2] = [UNITY_ENGINE, UI_ELEMENTS];

/// Build the declaration tree for `request`.
pub fn build(request: &SynthesisRequest) -> CompilationUnit {
    let class = TypeDecl::new(request.type_name())
        .partial()
        .base(TypeName::in_namespace(UNITY_ENGINE, BASE_TYPE))
        .member(document_field())
        .member(root_property())
        .member(initialize_method());

    CompilationUnit::new()
        .imports(ImportSet::canonical(IMPORTS))
        .type_decl(class)
}

/// `[SerializeField] private UIDocument _document;`
fn document_field() -> Field {
    Field::new(DOCUMENT_FIELD, TypeName::in_namespace(UI_ELEMENTS, DOCUMENT_TYPE)).attribute(
        Attribute::new(TypeName::in_namespace(UNITY_ENGINE, SERIALIZE_FIELD)),
    )
}

/// `Root` yields null while no document is assigned.
fn root_property() -> Property {
    Property::new(ROOT_PROPERTY, TypeName::in_namespace(UI_ELEMENTS, VISUAL_ELEMENT)).getter(
        Statement::Return(Expr::ident(DOCUMENT_FIELD).null_conditional_member(ROOT_VISUAL_ELEMENT)),
    )
}

fn initialize_method() -> Method {
    Method::new(INITIALIZE_METHOD)
}

#[cfg(test)]
mod tests {
    use rosalina_codegen::ast::{Member, MemberKind, Visibility};

    use super::*;

    fn unit_for(path: &str) -> CompilationUnit {
        build(&SynthesisRequest::new(path).unwrap())
    }

    #[test]
    fn test_single_partial_type_named_after_document() {
        let unit = unit_for("UI/MainMenu.uxml");

        assert_eq!(unit.types.len(), 1);
        let decl = &unit.types[0];
        assert_eq!(decl.name, "MainMenu");
        assert_eq!(decl.visibility, Visibility::Public);
        assert!(decl.is_partial);
        assert_eq!(decl.base_type.as_ref().map(TypeName::name), Some("MonoBehaviour"));
    }

    #[test]
    fn test_member_order() {
        for path in ["A.uxml", "UI/Hud.uxml", "Deep/Nested/Shop.Panel.uxml"] {
            let kinds: Vec<MemberKind> = unit_for(path).types[0]
                .members
                .iter()
                .map(Member::kind)
                .collect();
            assert_eq!(
                kinds,
                vec![MemberKind::Field, MemberKind::Property, MemberKind::Method]
            );
        }
    }

    #[test]
    fn test_imports_do_not_depend_on_document() {
        for path in [
            "UI/Inventory.uxml",
            "UnityEngine.uxml",
            "System.uxml",
            "UnityEngine.UIElements.uxml",
            "Deep/Nested/Shop.Panel.uxml",
            "main-menu.uxml",
        ] {
            let unit = unit_for(path);

            let imports: Vec<&str> = unit.imports.iter().collect();
            assert_eq!(
                imports,
                vec!["UnityEngine", "UnityEngine.UIElements"],
                "imports for {path}"
            );

            let referenced: Vec<&str> =
                unit.types[0].referenced_namespaces().into_iter().collect();
            assert_eq!(imports, referenced, "referenced namespaces for {path}");
        }
    }

    #[test]
    fn test_members() {
        let unit = unit_for("Hud.uxml");
        let members = &unit.types[0].members;

        let Member::Field(field) = &members[0] else {
            panic!("Expected field");
        };
        assert_eq!(field.name, "_document");
        assert_eq!(field.visibility, Visibility::Private);
        assert_eq!(field.attributes.len(), 1);
        assert_eq!(field.attributes[0].name.name(), "SerializeField");

        let Member::Property(root) = &members[1] else {
            panic!("Expected property");
        };
        assert_eq!(root.name, "Root");
        assert_eq!(root.ty.name(), "VisualElement");
        assert_eq!(
            root.getter,
            vec![Statement::Return(
                Expr::ident("_document").null_conditional_member("rootVisualElement")
            )]
        );

        let Member::Method(init) = &members[2] else {
            panic!("Expected method");
        };
        assert_eq!(init.name, "InitializeDocument");
        assert!(init.return_type.is_none());
        assert!(init.body.is_empty());
    }

    #[test]
    fn test_tree_is_valid() {
        assert!(unit_for("UI/MainMenu.uxml").validate().is_ok());
    }
}
