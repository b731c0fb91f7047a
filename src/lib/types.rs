use bytes::Bytes;
use derive_builder::Builder;

use crate::consts::*;
use crate::error::Result;
use crate::source::ContentSource;

/// Kind of an archive entry. Only regular files and plain directories are
/// representable; links, devices and sparse files are out of scope.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EntryKind {
    File,
    Dir,
}

impl EntryKind {
    /// ustar typeflag byte.
    pub(crate) fn type_flag(self) -> u8 {
        match self {
            EntryKind::File => b'0',
            EntryKind::Dir => b'5',
        }
    }

    pub(crate) fn default_mode(self) -> u32 {
        match self {
            EntryKind::File => DEFAULT_FILE_MODE,
            EntryKind::Dir => DEFAULT_DIR_MODE,
        }
    }
}

/// Per-entry metadata overrides.
///
/// Unset fields fall back to the crate defaults: mode 0600 (files) / 0755
/// (directories), uid/gid 0, owner `root:root`, mtime taken from the clock
/// when the archive is built.
#[derive(Debug, Clone, Eq, PartialEq, Builder)]
#[builder(pattern = "owned")]
pub struct Metadata {
    /// unix permission bits
    #[builder(default)]
    pub mode: Option<u32>,
    /// owner user id
    #[builder(default = "DEFAULT_UID")]
    pub uid: u64,
    /// owner group id
    #[builder(default = "DEFAULT_GID")]
    pub gid: u64,
    /// modification time, seconds since the epoch
    #[builder(default)]
    pub mtime: Option<u64>,
    /// owner user name, truncated to 32 bytes on write
    #[builder(default = "DEFAULT_OWNER.to_string()")]
    pub user: String,
    /// owner group name, truncated to 32 bytes on write
    #[builder(default = "DEFAULT_OWNER.to_string()")]
    pub group: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Metadata {
            mode: None,
            uid: DEFAULT_UID,
            gid: DEFAULT_GID,
            mtime: None,
            user: DEFAULT_OWNER.to_string(),
            group: DEFAULT_OWNER.to_string(),
        }
    }
}

/// A registered entry, content not yet resolved.
pub(crate) struct Entry {
    pub(crate) name: String,
    pub(crate) kind: EntryKind,
    pub(crate) source: Option<ContentSource>,
    pub(crate) metadata: Metadata,
}

impl Entry {
    /// Resolve the content source to concrete bytes. Directories resolve to
    /// an empty buffer.
    pub(crate) async fn resolve(self) -> Result<ResolvedEntry> {
        let data = match self.source {
            Some(source) => source.resolve().await?,
            None => Bytes::new(),
        };
        Ok(ResolvedEntry {
            name: self.name,
            kind: self.kind,
            data,
            metadata: self.metadata,
        })
    }
}

/// An entry with its content bytes in hand, ready to be laid out.
pub(crate) struct ResolvedEntry {
    pub(crate) name: String,
    pub(crate) kind: EntryKind,
    pub(crate) data: Bytes,
    pub(crate) metadata: Metadata,
}

impl ResolvedEntry {
    /// Bytes this entry occupies in the archive: one header block plus the
    /// content padded up to a block boundary.
    pub(crate) fn footprint(&self) -> usize {
        BLOCK_SIZE + BLOCK_SIZE * self.data.len().div_ceil(BLOCK_SIZE)
    }
}
