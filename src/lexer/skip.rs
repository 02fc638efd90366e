//! Whitespace and comment skipping for the lexer.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and line comments in a loop.
    ///
    /// Whitespace is ` `, `\t`, `\r`, and `\f`; `\n` also counts as
    /// whitespace here but is tracked separately by [`Lexer::advance`] for
    /// line counting. Line comments start with `//` and extend to (but do
    /// not include) the next newline.
    pub(super) fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.current_char() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_next_char() == Some('/') => {
                    while self.current_char().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }
}
