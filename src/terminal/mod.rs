//! Terminal detection: color support and whether output is a TTY.

mod capabilities;

pub use capabilities::{ColorSupport, Environment};

use std::os::unix::io::AsRawFd;

/// Check if a file descriptor refers to a terminal.
#[allow(unsafe_code)]
pub fn is_tty<F: AsRawFd>(fd: &F) -> bool {
    // SAFETY: isatty is safe to call with any fd
    unsafe { libc::isatty(fd.as_raw_fd()) == 1 }
}

/// Color support for standard output, taking redirection into account.
///
/// Output that is not a terminal gets no color, as does any environment
/// with `NO_COLOR` set.
#[must_use]
pub fn stdout_color_support() -> ColorSupport {
    let env = Environment::from_process();
    env.color_support(is_tty(&std::io::stdout()))
}
