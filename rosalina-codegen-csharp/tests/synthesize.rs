//! End-to-end behavior of `Generator::synthesize`.

use std::path::PathBuf;

use rosalina_codegen::{BannerMeta, Error, SourceRenderer, SynthesisRequest};
use rosalina_codegen_csharp::{CSharpRenderer, Generator, build};
use rosalina_core::Version;

const MAIN_MENU: &str = "\
//------------------------------------------------------------------------------
// <auto-generated>
//     This code was generated by the Rosalina Code Generator tool.
//     Version: 1.0.0
//
//     Changes to this file may cause incorrect behavior and will be lost if
//     the code is regenerated.
// </auto-generated>
//------------------------------------------------------------------------------

using UnityEngine;
using UnityEngine.UIElements;

public partial class MainMenu : MonoBehaviour
{
    [SerializeField]
    private UIDocument _document;

    public VisualElement Root
    {
        get
        {
            return _document?.rootVisualElement;
        }
    }

    public void InitializeDocument()
    {
    }
}
";

fn banner() -> BannerMeta {
    BannerMeta::new("Rosalina Code Generator", Version::new(1, 0, 0))
}

#[test]
fn test_main_menu_end_to_end() {
    let file = Generator::new(banner())
        .synthesize("UI/MainMenu.uxml")
        .unwrap();

    assert_eq!(file.path(), PathBuf::from("UI/MainMenu.g.cs"));
    assert_eq!(file.text(), MAIN_MENU);
}

#[test]
fn test_rendering_the_same_tree_twice_is_a_fixed_point() {
    let request = SynthesisRequest::new("UI/MainMenu.uxml").unwrap();
    let unit = build(&request);
    let renderer = CSharpRenderer::new();

    let first = renderer.render(&unit, &banner()).unwrap();
    let second = renderer.render(&build(&request), &banner()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, MAIN_MENU);
}

#[test]
fn test_no_trailing_whitespace_and_lf_only() {
    let file = Generator::new(banner()).synthesize("Shop.uxml").unwrap();

    assert!(!file.text().contains('\r'));
    assert!(file.text().lines().all(|l| l == l.trim_end()));
    assert!(file.text().ends_with("}\n"));
    assert!(!file.text().ends_with("\n\n"));
}

#[test]
fn test_type_name_follows_document() {
    let file = Generator::new(banner())
        .synthesize("Assets/Screens/Settings.uxml")
        .unwrap();

    assert!(file.path().ends_with("Settings.g.cs"));
    assert!(
        file
            .text()
            .contains("public partial class Settings : MonoBehaviour")
    );
}

#[test]
fn test_bare_directory_is_rejected() {
    let generator = Generator::new(banner());
    for path in ["Assets/UI/", "Assets/UI/.", "Assets/UI/..", "."] {
        let err = generator.synthesize(path).unwrap_err();
        assert!(
            matches!(err, Error::InvalidRequest { .. }),
            "{path} produced {err:?}"
        );
    }
}

#[test]
fn test_malformed_tree_is_rejected_by_renderer() {
    let mut unit = build(&SynthesisRequest::new("Hud.uxml").unwrap());
    unit.types[0].name.clear();

    let err = CSharpRenderer::new().render(&unit, &banner()).unwrap_err();
    assert!(matches!(err, Error::MalformedTree { .. }));
}
