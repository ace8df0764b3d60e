use std::io::{self, Write};
use crate::RunError;

/// Pretty-print a [`RunError`] with line/column and a caret under the offending byte.
/// If `program` is `Some("bf")`, messages are prefixed with "bf: ...".
pub fn print_run_error(program: Option<&str>, code: &[u8], err: &RunError) {
    let prefix_program = |msg: &str| {
        if let Some(p) = program {
            format!("{p}: {msg}")
        } else {
            msg.to_string()
        }
    };

    let msg = match err {
        RunError::OutOfBounds { ptr, .. } => prefix_program(&format!(
            "Runtime error: pointer out of bounds (ptr={ptr}, op=<)"
        )),
        RunError::UnmatchedBracket { kind, .. } => {
            prefix_program(&format!("Runtime error: unmatched bracket {kind}"))
        }
        RunError::Io { source, .. } => prefix_program(&format!("I/O error: {source}")),
    };
    print_error_with_context(&msg, code, err.ip());
}

/// Print a concise error with instruction offset, line:column and a caret context window.
pub fn print_error_with_context(prefix: &str, code: &[u8], pos: usize) {
    let (line, column) = line_and_column(code, pos);
    eprintln!("{prefix} at instruction {pos} (line {line}, column {column})");

    if pos >= code.len() {
        let _ = io::stderr().flush();
        return;
    }

    // Show a short window around the position for context
    const WINDOW: usize = 32;

    let start = pos.saturating_sub(WINDOW);
    let end = (pos + WINDOW + 1).min(code.len());

    // One display column per byte keeps the caret aligned.
    let slice: String = code[start..end]
        .iter()
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { ' ' })
        .collect();
    eprintln!("  {}", slice);

    // Caret under the exact position
    eprintln!("  {}^", " ".repeat(pos - start));
    let _ = io::stderr().flush();
}

/// 1-based line and column of byte offset `pos`.
fn line_and_column(code: &[u8], pos: usize) -> (usize, usize) {
    let before = &code[..pos.min(code.len())];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
    (line, pos - line_start + 1)
}
