//! Interactive fallback when the input paths are not given on the command line.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Ask for the video file, then the SKP file.
pub fn prompt_inputs<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<(PathBuf, PathBuf)> {
    let video = ask(input, output, "Enter the video file: ")?;
    let skp = ask(input, output, "Enter the SKP file: ")?;
    Ok((PathBuf::from(video), PathBuf::from(skp)))
}

/// Prompt on stdout and read the answers from stdin.
pub fn prompt_stdin() -> io::Result<(PathBuf, PathBuf)> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt_inputs(&mut stdin.lock(), &mut stdout)
}

/// EOF yields an empty answer.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<String> {
    output.write_all(label.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
