//! Output destinations.
//!
//! A [`Destination`] is a writer that can also be asked to make written data
//! durable. Destinations without a durability notion treat `sync` as a no-op.

use std::fs::File;
use std::io::{self, Write};

/// A CSV output target.
pub trait Destination: Write {
    /// Pushes written data to durable storage, if the destination has any.
    fn sync(&mut self) -> io::Result<()>;
}

impl Destination for File {
    fn sync(&mut self) -> io::Result<()> {
        self.sync_all()
    }
}

impl Destination for Vec<u8> {
    fn sync(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Locked standard output.
///
/// Syncs only when stdout is redirected to a regular file. Terminals and pipes
/// have nothing to sync (fsync on them fails with `EINVAL`), so they are skipped.
pub struct StdoutDestination {
    inner: io::StdoutLock<'static>,
}

impl StdoutDestination {
    /// Locks stdout for the lifetime of the destination.
    pub fn new() -> Self {
        Self {
            inner: io::stdout().lock(),
        }
    }
}

impl Default for StdoutDestination {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for StdoutDestination {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Destination for StdoutDestination {
    fn sync(&mut self) -> io::Result<()> {
        match stdout_file(&self.inner) {
            Some(file) if is_regular_file(&file) => file.sync_all(),
            _ => Ok(()),
        }
    }
}

fn is_regular_file(file: &File) -> bool {
    file.metadata().map(|m| m.is_file()).unwrap_or(false)
}

#[cfg(unix)]
fn stdout_file(stdout: &io::StdoutLock<'static>) -> Option<File> {
    use std::os::fd::AsFd;
    stdout.as_fd().try_clone_to_owned().ok().map(File::from)
}

#[cfg(windows)]
fn stdout_file(stdout: &io::StdoutLock<'static>) -> Option<File> {
    use std::os::windows::io::AsHandle;
    stdout.as_handle().try_clone_to_owned().ok().map(File::from)
}

#[cfg(not(any(unix, windows)))]
fn stdout_file(_stdout: &io::StdoutLock<'static>) -> Option<File> {
    None
}
