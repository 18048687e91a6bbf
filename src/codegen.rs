//! Rust source generation for an embedded file system module.

use crate::archive::blob_digest;
use crate::error::{Error, Result};
use crate::literal;

/// Runtime spliced into every generated module.
pub const RUNTIME_SOURCE: &str = include_str!("runtime.rs");

/// Crates the generated module needs in the consumer's `Cargo.toml`.
pub const RUNTIME_DEPENDENCIES: &[&str] = &["flate2", "tar"];

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "gen", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield", "_",
];

/// Check that `name` can be used as a module identifier.
pub fn validate_module_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid_start = matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic());
    let valid_rest = chars.all(|c| c == '_' || c.is_ascii_alphanumeric());

    if !valid_start || !valid_rest || KEYWORDS.contains(&name) {
        return Err(Error::InvalidModuleName(name.to_string()));
    }
    Ok(())
}

/// Produce the complete generated source for `module_name` embedding `blob`.
///
/// Output depends only on the arguments and the generator version.
pub fn generate(module_name: &str, blob: &[u8]) -> Result<String> {
    validate_module_name(module_name)?;
    Ok(render(
        module_name,
        &literal::encode(blob),
        &blob_digest(blob),
    ))
}

fn render(module_name: &str, data_literal: &str, digest: &str) -> String {
    let mut out = String::with_capacity(RUNTIME_SOURCE.len() + data_literal.len() + 1024);

    out.push_str(&format!(
        "// Code generated by embed-vfs {}. DO NOT EDIT.\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(&format!("// Archive SHA-256: {}\n", digest));
    out.push_str(&format!(
        "// Requires crates: {}\n\n",
        RUNTIME_DEPENDENCIES.join(", ")
    ));
    out.push_str(&format!("pub mod {} {{\n", module_name));

    for line in RUNTIME_SOURCE.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
    }

    out.push_str("\n    /// Compressed archive of the embedded directory.\n");
    out.push_str(&format!("    pub const DATA: &[u8] = {};\n\n", data_literal));
    out.push_str("    /// The embedded files, decoded on first access.\n");
    out.push_str("    pub static FILES: EmbeddedFs = EmbeddedFs::new(DATA);\n");
    out.push_str("}\n");

    out
}
