//! Preview and download surfaces
//!
//! Both wrap the generator. The preview never fails: a malformed snapshot is
//! shown as a single placeholder comment. A download either produces the full
//! file contents or an error, never a partial file.

use crate::codegen::{generate_json, GenerationOptions};
use crate::form::GenerationResult;
use serde_json::Value;

/// Text shown in place of a preview when the snapshot is malformed
pub const PREVIEW_PLACEHOLDER: &str = "// Preview unavailable due to invalid form values";

/// Default file name of a downloaded script
pub const DOWNLOAD_FILE_NAME: &str = "autoexec.cfg";

/// Media type of a downloaded script
pub const DOWNLOAD_MIME: &str = "text/plain;charset=utf-8";

/// A rendered config file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Suggested file name
    pub file_name: String,
    /// Media type
    pub mime: &'static str,
    /// Full file contents, lines joined with `\n`
    pub contents: String,
}

/// Render the preview text for a raw snapshot
///
/// Preview options never carry a timestamp, so the same snapshot always
/// previews the same text.
#[must_use]
pub fn preview_text(snapshot: &Value, options: &GenerationOptions) -> String {
    match generate_json(snapshot, options) {
        Ok(lines) => lines.join("\n"),
        Err(err) => {
            tracing::warn!(error = %err, "preview unavailable");
            PREVIEW_PLACEHOLDER.to_string()
        }
    }
}

/// Render the downloadable file for a raw snapshot
///
/// # Errors
///
/// Returns the generation error when the snapshot is malformed.
pub fn render_download(snapshot: &Value, options: &GenerationOptions) -> GenerationResult<Download> {
    let lines = generate_json(snapshot, options)?;
    Ok(Download {
        file_name: DOWNLOAD_FILE_NAME.to_string(),
        mime: DOWNLOAD_MIME,
        contents: lines.join("\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preview_placeholder_on_error() {
        let snapshot = json!({ "customBinds": "F6" });
        let text = preview_text(&snapshot, &GenerationOptions::preview());
        assert_eq!(text, PREVIEW_PLACEHOLDER);
    }

    #[test]
    fn test_preview_is_stable() {
        let snapshot = json!({ "consoleColor": "yellow" });
        let first = preview_text(&snapshot, &GenerationOptions::preview());
        let second = preview_text(&snapshot, &GenerationOptions::preview());

        assert_eq!(first, second);
        assert!(first.starts_with("log_color \"Console\""));
        assert!(first.contains("\"FFD700FF\";"));
        assert!(!first.contains("// Generated:"));
        assert!(!first.ends_with('\n'));
    }

    #[test]
    fn test_download_contents() {
        let snapshot = json!({ "includeConfigSave": true });
        let download = render_download(&snapshot, &GenerationOptions::download()).unwrap();

        assert_eq!(download.file_name, "autoexec.cfg");
        assert_eq!(download.mime, "text/plain;charset=utf-8");
        assert!(download.contents.contains("// Generated: "));
        assert!(download.contents.contains("\nhost_writeconfig;\n"));
    }

    #[test]
    fn test_download_fails_on_malformed_snapshot() {
        let snapshot = json!({
            "additionalCommands": 3,
            "includeSections": { "additional": true }
        });
        let err = render_download(&snapshot, &GenerationOptions::download()).unwrap_err();
        assert_eq!(err.field(), Some("additionalCommands"));
    }
}
