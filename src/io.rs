use std::io::{self, ErrorKind, Read, Write};
use std::str::FromStr;

use crate::error::ConfigError;

/// Value stored by `,` at end of input under [`EofPolicy::Sentinel`]:
/// C's `EOF` (-1) reduced modulo 256.
pub const EOF_SENTINEL: u8 = 0xFF;

/// What `,` stores in the current cell once the input stream is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EofPolicy {
    /// Store [`EOF_SENTINEL`].
    #[default]
    Sentinel,
    /// Store 0.
    Zero,
    /// Leave the cell as it was.
    Unchanged,
}

impl EofPolicy {
    pub fn apply(self, current: u8) -> u8 {
        match self {
            EofPolicy::Sentinel => EOF_SENTINEL,
            EofPolicy::Zero => 0,
            EofPolicy::Unchanged => current,
        }
    }
}

impl FromStr for EofPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sentinel" | "255" | "-1" => Ok(EofPolicy::Sentinel),
            "zero" | "0" => Ok(EofPolicy::Zero),
            "unchanged" | "keep" => Ok(EofPolicy::Unchanged),
            _ => Err(ConfigError::InvalidEofPolicy(s.to_string())),
        }
    }
}

/// Byte-at-a-time input and output for `,` and `.`.
pub struct IoAdapter<R, W> {
    input: R,
    output: W,
    eof: EofPolicy,
}

impl<R: Read, W: Write> IoAdapter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            eof: EofPolicy::default(),
        }
    }

    pub fn set_eof_policy(&mut self, eof: EofPolicy) {
        self.eof = eof;
    }

    pub fn eof_policy(&self) -> EofPolicy {
        self.eof
    }

    pub fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.output.write_all(&[byte])
    }

    /// Block until one byte is available. Pending output is flushed first so
    /// anything the program printed as a prompt is visible while waiting.
    /// `current` is the cell value, kept under [`EofPolicy::Unchanged`].
    pub fn read_byte(&mut self, current: u8) -> io::Result<u8> {
        self.output.flush()?;
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return Ok(self.eof.apply(current)),
                Ok(_) => return Ok(buf[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_one_byte_at_a_time() {
        let mut io = IoAdapter::new(&b"AB"[..], Vec::new());
        assert_eq!(io.read_byte(0).unwrap(), b'A');
        assert_eq!(io.read_byte(0).unwrap(), b'B');
    }

    #[test]
    fn eof_policies() {
        let mut io = IoAdapter::new(&b""[..], Vec::new());
        assert_eq!(io.read_byte(7).unwrap(), EOF_SENTINEL);

        io.set_eof_policy(EofPolicy::Zero);
        assert_eq!(io.read_byte(7).unwrap(), 0);

        io.set_eof_policy(EofPolicy::Unchanged);
        assert_eq!(io.read_byte(7).unwrap(), 7);
    }

    #[test]
    fn writes_raw_bytes_without_newline() {
        let mut io = IoAdapter::new(&b""[..], Vec::new());
        io.write_byte(3).unwrap();
        io.write_byte(0xFF).unwrap();
        assert_eq!(io.output(), &vec![3, 0xFF]);
    }

    #[test]
    fn parses_eof_policy_names() {
        assert_eq!("sentinel".parse::<EofPolicy>().unwrap(), EofPolicy::Sentinel);
        assert_eq!(" Zero ".parse::<EofPolicy>().unwrap(), EofPolicy::Zero);
        assert_eq!("keep".parse::<EofPolicy>().unwrap(), EofPolicy::Unchanged);
        assert!(matches!(
            "eof".parse::<EofPolicy>(),
            Err(ConfigError::InvalidEofPolicy(s)) if s == "eof"
        ));
    }
}
