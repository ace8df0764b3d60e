//! A Brainfuck interpreter that runs programs straight off their text.
//!
//! There is no parse or bracket-matching pass. The interpreter reads one symbol at
//! a time from a seekable cursor. Loops are repeated by seeking back to a saved
//! position and skipped by scanning forward for the balancing `]`.
//!
//! Features and behaviors:
//! - The tape starts as a single zero cell and grows to the right, one cell at a
//!   time, whenever the pointer steps past its end.
//! - Moving left of cell 0 is an error.
//! - Cells wrap modulo 256.
//! - Input `,` reads a single byte; at end of input the cell gets [`EOF_SENTINEL`]
//!   (configurable through [`EofPolicy`]).
//! - Output `.` writes the current cell as a raw byte, no newline.
//! - Characters outside `><+-.,[]` are comments.
//! - [`Strategy::RunLength`] applies runs of `<`, `+` and `-` in one step; it
//!   behaves exactly like [`Strategy::Naive`].
//!
//! Quick start:
//!
//! ```no_run
//! use tape_bf::Interpreter;
//!
//! // Classic "Hello World!" in Brainfuck
//! let code = "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.>.";
//! let mut bf = Interpreter::new(code, std::io::stdin().lock(), std::io::stdout());
//! bf.run().expect("program should run");
//! ```

pub mod cli_util;
pub mod commands;
pub mod config;
pub mod cursor;
pub mod error;
pub mod interpreter;
pub mod io;
pub mod loops;
pub mod tape;

pub use config::Settings;
pub use cursor::Cursor;
pub use error::{BracketKind, ConfigError, RunError, TapeError};
pub use interpreter::{Instruction, Interpreter, Strategy};
pub use io::{EofPolicy, IoAdapter, EOF_SENTINEL};
pub use loops::LoopController;
pub use tape::Tape;
