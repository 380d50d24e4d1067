//! Line-oriented input reading with retry-on-bad-input validation.

use std::io::{self, BufRead, Write};

/// Read one line, trimmed. End of input is an `UnexpectedEof` error.
pub fn read_trimmed_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended while waiting for a line",
        ));
    }
    Ok(line.trim().to_string())
}

/// Prompt with `label` until the user enters an integer within the inclusive
/// range `[min, max]`, and return it. Blank, non-numeric, and out-of-range
/// lines are discarded with a guidance message; there is no attempt limit.
pub fn read_int_in_range<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    min: usize,
    max: usize,
) -> io::Result<usize> {
    loop {
        write!(out, "{label}")?;
        out.flush()?;

        let line = read_trimmed_line(input)?;
        if let Ok(value) = line.parse::<usize>() {
            if (min..=max).contains(&value) {
                return Ok(value);
            }
        }
        writeln!(out, "Please enter a number between {min} and {max}.")?;
    }
}
