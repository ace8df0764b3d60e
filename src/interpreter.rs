use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use crate::cursor::Cursor;
use crate::error::{ConfigError, RunError, TapeError};
use crate::io::{EofPolicy, IoAdapter};
use crate::loops::LoopController;
use crate::tape::Tape;

/// The eight recognised symbols. Every other byte is a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Right,
    Left,
    Increment,
    Decrement,
    Output,
    Input,
    LoopStart,
    LoopEnd,
}

impl Instruction {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'>' => Some(Instruction::Right),
            b'<' => Some(Instruction::Left),
            b'+' => Some(Instruction::Increment),
            b'-' => Some(Instruction::Decrement),
            b'.' => Some(Instruction::Output),
            b',' => Some(Instruction::Input),
            b'[' => Some(Instruction::LoopStart),
            b']' => Some(Instruction::LoopEnd),
            _ => None,
        }
    }

    /// Whether a run of this instruction is applied as one batched tape operation
    /// under [`Strategy::RunLength`].
    pub fn coalesces(self) -> bool {
        matches!(self, Instruction::Left | Instruction::Increment | Instruction::Decrement)
    }
}

/// How runs of identical instructions are executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// One symbol at a time.
    Naive,
    /// Consecutive `<`, `+` or `-` are counted and applied once.
    #[default]
    RunLength,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Naive => write!(f, "naive"),
            Strategy::RunLength => write!(f, "rle"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" | "simple" => Ok(Strategy::Naive),
            "rle" | "run-length" | "runlength" => Ok(Strategy::RunLength),
            _ => Err(ConfigError::InvalidStrategy(s.to_string())),
        }
    }
}

/// A single program run.
///
/// Owns the whole machine state for the run:
/// - the program text behind an instruction cursor,
/// - a tape that starts as one zero cell and grows to the right on demand,
/// - the stack of loop resume positions,
/// - the input and output streams.
pub struct Interpreter<R, W> {
    cursor: Cursor,
    tape: Tape,
    loops: LoopController,
    io: IoAdapter<R, W>,
    strategy: Strategy,
}

impl<R: Read, W: Write> Interpreter<R, W> {
    /// Create an interpreter for `code` reading `,` from `input` and writing `.` to `output`.
    pub fn new(code: impl Into<Vec<u8>>, input: R, output: W) -> Self {
        Self {
            cursor: Cursor::new(code),
            tape: Tape::new(),
            loops: LoopController::new(),
            io: IoAdapter::new(input, output),
            strategy: Strategy::default(),
        }
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn set_eof_policy(&mut self, eof: EofPolicy) {
        self.io.set_eof_policy(eof);
    }

    /// Execute the program until the text is exhausted or an error aborts it.
    ///
    /// Output is flushed before returning, on success and on failure alike.
    pub fn run(&mut self) -> Result<(), RunError> {
        log::debug!(
            "running {} byte program (strategy={}, eof={:?})",
            self.cursor.len(),
            self.strategy,
            self.io.eof_policy()
        );

        let result = self.execute();
        let flushed = self.io.flush().map_err(|source| RunError::Io {
            ip: self.cursor.position(),
            source,
        });

        log::debug!(
            "run finished at ip {} (tape len={}, ptr={}, open loops={}, ok={})",
            self.cursor.position(),
            self.tape.len(),
            self.tape.position(),
            self.loops.depth(),
            result.is_ok()
        );

        result?;
        flushed
    }

    fn execute(&mut self) -> Result<(), RunError> {
        let mut next = self.cursor.read_symbol();
        while let Some(symbol) = next {
            let ip = self.cursor.position() - 1;
            next = match Instruction::from_byte(symbol) {
                Some(instr) if self.strategy == Strategy::RunLength && instr.coalesces() => {
                    self.step_run(instr, symbol, ip)?
                }
                Some(instr) => {
                    self.step(instr, ip)?;
                    self.cursor.read_symbol()
                }
                None => self.cursor.read_symbol(),
            };
        }
        self.loops.finish()
    }

    fn step(&mut self, instr: Instruction, ip: usize) -> Result<(), RunError> {
        match instr {
            Instruction::Right => self.tape.move_right(),
            Instruction::Left => self.tape.move_left().map_err(|e| out_of_bounds(ip, e))?,
            Instruction::Increment => self.tape.increment(),
            Instruction::Decrement => self.tape.decrement(),
            Instruction::Output => self
                .io
                .write_byte(self.tape.current_value())
                .map_err(|source| RunError::Io { ip, source })?,
            Instruction::Input => {
                let byte = self
                    .io
                    .read_byte(self.tape.current_value())
                    .map_err(|source| RunError::Io { ip, source })?;
                self.tape.set_current(byte);
            }
            Instruction::LoopStart => self.loops.enter(self.tape.current_value(), &mut self.cursor)?,
            Instruction::LoopEnd => self.loops.exit(self.tape.current_value(), &mut self.cursor)?,
        }
        Ok(())
    }

    /// Consume the rest of a run of `symbol` that started at `ip`, apply it in one
    /// tape operation and hand back the first differing symbol.
    fn step_run(&mut self, instr: Instruction, symbol: u8, ip: usize) -> Result<Option<u8>, RunError> {
        let mut count = 1usize;
        let next = loop {
            match self.cursor.read_symbol() {
                Some(s) if s == symbol => count += 1,
                other => break other,
            }
        };

        let delta = (count % 256) as u8;
        match instr {
            Instruction::Left => self.tape.move_left_by(count).map_err(|e| out_of_bounds(ip, e))?,
            Instruction::Increment => self.tape.add(delta),
            Instruction::Decrement => self.tape.subtract(delta),
            other => unreachable!("{other:?} is never coalesced"),
        }
        Ok(next)
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn program(&self) -> &[u8] {
        self.cursor.text()
    }

    pub fn output(&self) -> &W {
        self.io.output()
    }

    pub fn into_output(self) -> W {
        self.io.into_parts().1
    }

    /// Number of loops entered but not yet terminated.
    pub fn loop_depth(&self) -> usize {
        self.loops.depth()
    }
}

/// Attribute a rejected left move to the `<` that would have stepped off the tape.
/// Inside a run the symbols are contiguous, so that is `position` bytes past the first.
fn out_of_bounds(ip: usize, err: TapeError) -> RunError {
    match err {
        TapeError::OutOfBounds { position, .. } => RunError::OutOfBounds {
            ip: ip + position,
            ptr: 0,
        },
    }
}
