//! Error types.
//!
//! Building and rendering a node tree in memory cannot fail. Errors only
//! come from the sink a rendered document is written to.

use std::fmt;
use std::io;

/// Error returned when writing rendered HTML to a sink fails.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
	/// The `std::io::Write` sink failed.
	#[error("failed to write rendered HTML: {0}")]
	Io(#[from] io::Error),

	/// The `std::fmt::Write` sink failed.
	#[error("failed to format rendered HTML")]
	Format(#[from] fmt::Error),
}

/// Result type for fallible render operations.
pub type RenderResult<T> = Result<T, RenderError>;
