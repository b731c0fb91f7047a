pub use crate::consts::*;
pub use crate::error::{Error, Result};
pub use crate::source::{ByteStream, ContentSource};
pub use crate::types::{EntryKind, Metadata, MetadataBuilder};
pub use crate::writer::ArchiveBuilder;
