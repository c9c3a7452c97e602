//! Input helpers shared by interactive commands.

use std::io::BufRead;

/// Read one line from `stdin`, trimmed.
///
/// Returns `None` on EOF or on a read error, which interactive commands treat
/// as a request to quit.
///
/// ```rust
/// # use tilemerge_cli::io_utils::read_stdin_line;
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("  left \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("left"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
