//! C# code-behind generation for Unity UI Toolkit documents.
//!
//! ```
//! use rosalina_codegen::BannerMeta;
//! use rosalina_codegen_csharp::Generator;
//! use rosalina_core::Version;
//!
//! let banner = BannerMeta::new("Rosalina Code Generator", Version::new(1, 0, 0));
//! let generator = Generator::new(banner);
//! let file = generator.synthesize("UI/MainMenu.uxml").unwrap();
//!
//! assert!(file.path().ends_with("MainMenu.g.cs"));
//! assert!(file.text().contains("public partial class MainMenu : MonoBehaviour"));
//! ```

mod banner;
mod document;
mod generator;
mod renderer;

pub use document::build;
pub use generator::Generator;
pub use renderer::CSharpRenderer;
