//! C++ header generator

use std::fmt::Write as FmtWrite;

use crate::error::Result;
use crate::model::GeneratedHeader;

/// Namespace wrapping every generated constant
pub const NAMESPACE: &str = "Plugin::Shaders";

/// Sequence that ends a C++ raw string literal with the empty delimiter
pub const RAW_STRING_TERMINATOR: &str = ")\"";

/// Generate the shader header from the collected entries.
///
/// Shader text is embedded verbatim inside `R"(...)"`, with no escaping.
pub fn generate_header(header: &GeneratedHeader) -> Result<String> {
    let mut output = String::new();

    writeln!(output, "#pragma once")?;
    writeln!(output)?;
    writeln!(output, "namespace {} {{", NAMESPACE)?;
    writeln!(output)?;

    for entry in &header.entries {
        tracing::debug!("Embedding {} ({} bytes)", entry.identifier, entry.content.len());

        if entry.content.contains(RAW_STRING_TERMINATOR) {
            tracing::warn!(
                "{} contains `{}`; the raw string literal will end early",
                entry.identifier,
                RAW_STRING_TERMINATOR
            );
        }

        writeln!(output, "/* {} */", entry.identifier)?;
        writeln!(output)?;
        writeln!(output, "const char* {} = R\"(", entry.identifier)?;
        output.push_str(&entry.content);
        writeln!(output, ")\";")?;
        writeln!(output)?;
    }

    write!(output, "}} // namespace {}", NAMESPACE)?;

    Ok(output)
}
