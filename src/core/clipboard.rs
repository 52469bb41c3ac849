//! System clipboard access for copying a transform result.
//!
//! Uses `arboard` (NSPasteboard on macOS, X11/Wayland on Linux, the Win32
//! clipboard on Windows). A failed copy never affects the transform result.
//!
//! On X11 and Wayland the clipboard content is served by the process that set
//! it, so `copy_text` blocks there until another application takes ownership of
//! the clipboard. Callers should render their output before copying.

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use arboard::Clipboard;

/// Place `text` on the system clipboard.
#[allow(clippy::result_large_err)]
pub fn copy_text(text: &str) -> Result<(), AppError> {
    if text.is_empty() {
        return Err(AppError::new(
            ErrorCategory::ClipboardError,
            "No text to copy",
        ));
    }

    let mut clipboard = Clipboard::new().map_err(|e| {
        AppError::with_source(
            ErrorCategory::ClipboardError,
            "Clipboard unavailable",
            Box::new(e),
        )
    })?;

    set_text(&mut clipboard, text).map_err(|e| {
        AppError::with_source(
            ErrorCategory::ClipboardError,
            "Failed to copy text",
            Box::new(e),
        )
    })?;

    tracing::debug!(bytes = text.len(), "copied result to clipboard");
    Ok(())
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_text(clipboard: &mut Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    tracing::info!("serving clipboard until another application replaces it");
    clipboard.set().wait().text(text)
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn set_text(clipboard: &mut Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}
