//! Corpus loading and output writing for the command line.
//! Accepts plain-text files (TXT, MD, or no extension) and stdin.

use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::error::AppError;

/// Path value that selects stdin
pub const STDIN_MARKER: &str = "-";

const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "text"];

/// Read the corpus from `source`, or from stdin when it is `-`.
pub fn read_corpus(source: &Path) -> Result<String, AppError> {
    if source.as_os_str() == STDIN_MARKER {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        info!("Read corpus from stdin: {} characters", buffer.chars().count());
        return Ok(normalize_newlines(buffer));
    }

    let extension = source
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();
    if !extension.is_empty() && !TEXT_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::Validation(format!(
            "Unsupported file extension: {} (extract the text first)",
            extension
        )));
    }

    let bytes = std::fs::read(source)?;
    let text = String::from_utf8(bytes)
        .map_err(|e| AppError::Validation(format!("Invalid UTF-8 content: {}", e)))?;
    info!(
        "Read corpus from {}: {} characters",
        source.display(),
        text.chars().count()
    );
    Ok(normalize_newlines(text))
}

/// Write `content` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), AppError> {
    match path {
        Some(path) => {
            std::fs::write(path, content)?;
            info!("Wrote {} bytes to {}", content.len(), path.display());
        }
        None => {
            use std::io::Write;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}
