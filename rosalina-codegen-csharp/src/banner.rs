//! The `<auto-generated>` banner placed at the top of every generated file.

use rosalina_codegen::{BannerMeta, builder::CodeBuilder};

const RULE: &str = "//------------------------------------------------------------------------------";

/// Render the banner followed by one blank line.
///
/// Contains no timestamp so that regeneration is byte-stable.
pub fn render_banner(meta: &BannerMeta) -> String {
    let mut builder = CodeBuilder::csharp();
    builder
        .push_line(RULE)
        .push_comment("<auto-generated>")
        .push_comment(&format!(
            "    This code was generated by the {} tool.",
            meta.tool_name
        ))
        .push_comment(&format!("    Version: {}", meta.version))
        .push_comment("")
        .push_comment("    Changes to this file may cause incorrect behavior and will be lost if")
        .push_comment("    the code is regenerated.")
        .push_comment("</auto-generated>")
        .push_line(RULE)
        .push_blank();
    builder.build()
}
