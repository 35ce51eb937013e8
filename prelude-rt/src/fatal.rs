use std::io::{self, Write};

/// Prints `FATAL ERROR: <message>` on stdout and exits the process with status 1.
///
/// Nothing is unwound and destructors do not run.
pub fn fatal_error(message: &str) -> ! {
    tracing::error!(reason = message, "fatal runtime error");

    let mut stdout = io::stdout().lock();
    write_fatal_message(&mut stdout, message).ok();
    std::process::exit(1)
}

/// Writes the diagnostic printed by [`fatal_error`] and flushes `out`.
pub fn write_fatal_message<W>(out: &mut W, message: &str) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "FATAL ERROR: {message}")?;
    out.flush()
}
