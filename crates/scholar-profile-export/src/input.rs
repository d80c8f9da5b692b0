//! Interactive prompt for the profile URL.

use std::io::{BufRead, Write};

use crate::error::InputError;

/// Prompt shown when no URL was given on the command line.
pub const PROMPT: &str = "Enter the Google Scholar profile URL: ";

/// Write the prompt to `output` and read one line from `input`.
///
/// The answer is trimmed.
///
/// # Errors
///
/// Returns [`InputError::Empty`] on EOF or a blank line.
pub fn prompt_base_url<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<String, InputError> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let url = line.trim();
    if url.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(url.to_string())
}
