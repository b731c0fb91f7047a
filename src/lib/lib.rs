//! Write-only POSIX ustar archive builder.
//!
//! Register files (with in-memory or deferred content) and directories on an
//! [`ArchiveBuilder`], then `build()` to get one `application/x-tar` byte
//! blob that any conforming tar reader can extract. Reading archives,
//! compression, PAX/GNU extensions and link entries are out of scope.

#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions, clippy::default_trait_access)]

pub mod consts;
pub mod error;
mod header;
pub mod prelude;
pub mod source;
pub mod types;
pub mod writer;

pub use crate::error::{Error, Result};
pub use crate::source::{ByteStream, ContentSource};
pub use crate::types::{EntryKind, Metadata, MetadataBuilder};
pub use crate::writer::ArchiveBuilder;
