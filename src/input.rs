//! Line input for the session loop.
//!
//! The game is strictly turn-based, so blocking line reads are all we
//! need. The one subtlety is EOF: when stdin is a pipe that runs dry,
//! `read_line` returns `Ok(0)` with an empty buffer forever, and a naive
//! loop would spin printing "I don't understand" at full speed. EOF is
//! therefore surfaced as `Err`, which the caller treats as the end of the
//! session (same as an interrupt at the terminal) and answers with a
//! farewell instead of a fault.

use log::debug;
use std::io;

pub struct LineInput {
    buffer: String,
}

impl LineInput {
    pub fn new() -> Self {
        LineInput {
            buffer: String::new(),
        }
    }

    /// Reads one line from stdin, without the trailing newline. `Err`
    /// means no more input will ever arrive (stdin closed, pipe
    /// exhausted, or the read was interrupted).
    pub fn read_line(&mut self) -> Result<String, String> {
        self.buffer.clear();
        let bytes_read = io::stdin()
            .read_line(&mut self.buffer)
            .map_err(|e| format!("failed to read line: {e}"))?;

        if bytes_read == 0 {
            debug!("stdin reached EOF");
            return Err("stdin closed, no more input available".to_string());
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        debug!("input received: {:?}", self.buffer);
        Ok(self.buffer.clone())
    }
}
