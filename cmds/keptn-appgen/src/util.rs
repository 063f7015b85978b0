use std::io::{self, ErrorKind, Write};

/// A writer wrapper that silently handles broken pipe errors.
///
/// Lets `keptn-appgen … | head -1` exit cleanly once the reader goes away.
pub struct BrokenPipeGuard<W> {
	inner: W,
}

impl<W> BrokenPipeGuard<W> {
	pub fn new(inner: W) -> Self {
		Self { inner }
	}
}

impl<W: Write> Write for BrokenPipeGuard<W> {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		match self.inner.write(buf) {
			Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(buf.len()),
			other => other,
		}
	}

	fn flush(&mut self) -> io::Result<()> {
		match self.inner.flush() {
			Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
			other => other,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct BrokenPipeWriter;

	impl Write for BrokenPipeWriter {
		fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
			Err(io::Error::new(ErrorKind::BrokenPipe, "broken pipe"))
		}

		fn flush(&mut self) -> io::Result<()> {
			Err(io::Error::new(ErrorKind::BrokenPipe, "broken pipe"))
		}
	}

	#[test]
	fn test_broken_pipe_is_swallowed() {
		let mut guard = BrokenPipeGuard::new(BrokenPipeWriter);
		assert!(writeln!(guard, "shop\t0.0.1").is_ok());
		assert!(guard.flush().is_ok());
	}

	#[test]
	fn test_other_errors_pass_through() {
		struct Denied;
		impl Write for Denied {
			fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
				Err(io::Error::new(ErrorKind::PermissionDenied, "denied"))
			}
			fn flush(&mut self) -> io::Result<()> {
				Ok(())
			}
		}
		let mut guard = BrokenPipeGuard::new(Denied);
		assert!(guard.write(b"x").is_err());
	}
}
