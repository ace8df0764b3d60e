/// Sequential reader over the program text.
///
/// Positions are byte offsets. A position taken with [`Cursor::position`] can be
/// handed back to [`Cursor::seek`] to replay from that point, which is how loop
/// bodies are repeated.
#[derive(Debug, Clone)]
pub struct Cursor {
    text: Box<[u8]>,
    position: usize,
}

impl Cursor {
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        Self {
            text: text.into().into_boxed_slice(),
            position: 0,
        }
    }

    /// Next symbol, or `None` once the text is exhausted.
    pub fn read_symbol(&mut self) -> Option<u8> {
        let symbol = self.text.get(self.position).copied()?;
        self.position += 1;
        Some(symbol)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn seek(&mut self, position: usize) {
        debug_assert!(position <= self.text.len(), "seek past end of program");
        self.position = position.min(self.text.len());
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }
}
