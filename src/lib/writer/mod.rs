use bytes::{Bytes, BytesMut};
use futures::future::try_join_all;

use crate::consts::*;
use crate::error::Result;
use crate::header;
use crate::source::ContentSource;
use crate::types::{Entry, EntryKind, Metadata, ResolvedEntry};


/// Accumulates file and directory entries and serializes them into a POSIX
/// ustar archive.
///
/// Registration is synchronous and never blocks; deferred content sources
/// are resolved only inside [`build`](ArchiveBuilder::build). Entries land
/// in the archive in registration order. `build` consumes the builder, so a
/// finalized builder cannot be appended to; start a fresh one to produce
/// another archive.
#[derive(Default)]
pub struct ArchiveBuilder {
    entries: Vec<Entry>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Append a regular file with default metadata.
    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<ContentSource>) {
        self.add_file_with(name, source, Metadata::default());
    }

    /// Append a regular file with metadata overrides. The name is not
    /// validated here; an over-long name fails the build.
    pub fn add_file_with(
        &mut self,
        name: impl Into<String>,
        source: impl Into<ContentSource>,
        metadata: Metadata,
    ) {
        self.entries.push(Entry {
            name: name.into(),
            kind: EntryKind::File,
            source: Some(source.into()),
            metadata,
        });
    }

    /// Append a directory with default metadata.
    pub fn add_dir(&mut self, name: impl Into<String>) {
        self.add_dir_with(name, Metadata::default());
    }

    /// Append a directory with metadata overrides.
    pub fn add_dir_with(&mut self, name: impl Into<String>, metadata: Metadata) {
        self.entries.push(Entry {
            name: name.into(),
            kind: EntryKind::Dir,
            source: None,
            metadata,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize all registered entries into one ustar archive.
    ///
    /// Content sources are resolved concurrently; any resolution failure
    /// aborts the whole build and no buffer is returned. The result is a
    /// single `application/x-tar` blob whose length is a positive multiple
    /// of the 10240-byte record size, zero padding included (an empty
    /// builder still yields one all-zero record, a valid empty archive).
    pub async fn build(self) -> Result<Bytes> {
        let resolved = try_join_all(self.entries.into_iter().map(Entry::resolve)).await?;

        // Entries with no mtime override share the build timestamp.
        let mtime = chrono::Utc::now().timestamp().max(0) as u64;

        let data_size: usize = resolved.iter().map(ResolvedEntry::footprint).sum();
        let records = data_size.div_ceil(RECORD_SIZE).max(1);
        let mut buf = BytesMut::zeroed(records * RECORD_SIZE);

        let mut offset = 0;
        for entry in &resolved {
            header::fill(
                &mut buf[offset..offset + BLOCK_SIZE],
                &entry.name,
                entry.kind,
                entry.data.len(),
                &entry.metadata,
                mtime,
            )?;
            let data_start = offset + BLOCK_SIZE;
            buf[data_start..data_start + entry.data.len()].copy_from_slice(&entry.data);
            offset += entry.footprint();
        }

        Ok(buf.freeze())
    }
}
