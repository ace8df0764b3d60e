//! Loop control without a bracket pre-pass.
//!
//! Entering a loop with a non-zero cell pushes the cursor position just past the
//! `[`; every `]` with a non-zero cell seeks back to that bookmark. A loop entered
//! with a zero cell is skipped by scanning forward for the balancing `]`, so no
//! entry is ever pushed for it.

use crate::cursor::Cursor;
use crate::error::{BracketKind, RunError};

/// Stack of resume positions, one per loop currently being iterated.
#[derive(Debug, Default, Clone)]
pub struct LoopController {
    resume: Vec<usize>,
}

impl LoopController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a `[` that the cursor has just consumed.
    pub fn enter(&mut self, cell: u8, cursor: &mut Cursor) -> Result<(), RunError> {
        if cell != 0 {
            self.resume.push(cursor.position());
            return Ok(());
        }

        let open_ip = cursor.position() - 1;
        let mut depth = 1usize;
        while depth > 0 {
            match cursor.read_symbol() {
                Some(b'[') => depth += 1,
                Some(b']') => depth -= 1,
                Some(_) => {}
                None => {
                    return Err(RunError::UnmatchedBracket {
                        ip: open_ip,
                        kind: BracketKind::Open,
                    });
                }
            }
        }
        Ok(())
    }

    /// Handle a `]` that the cursor has just consumed.
    pub fn exit(&mut self, cell: u8, cursor: &mut Cursor) -> Result<(), RunError> {
        let close_ip = cursor.position() - 1;
        let unmatched = || RunError::UnmatchedBracket {
            ip: close_ip,
            kind: BracketKind::Close,
        };

        if cell != 0 {
            let &resume_at = self.resume.last().ok_or_else(unmatched)?;
            cursor.seek(resume_at);
        } else {
            self.resume.pop().ok_or_else(unmatched)?;
        }
        Ok(())
    }

    /// Called once the program text is exhausted: any loop still being
    /// iterated never saw its `]`.
    pub fn finish(&self) -> Result<(), RunError> {
        match self.resume.last() {
            Some(&resume_at) => Err(RunError::UnmatchedBracket {
                ip: resume_at - 1,
                kind: BracketKind::Open,
            }),
            None => Ok(()),
        }
    }

    /// Number of loops currently being iterated.
    pub fn depth(&self) -> usize {
        self.resume.len()
    }
}
