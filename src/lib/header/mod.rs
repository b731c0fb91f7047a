//! ustar header block encoding.
//!
//! Every entry starts with one 512-byte header block of fixed-width fields:
//! NUL-padded strings, zero-padded octal numbers, and a checksum over the
//! block itself. Offsets and widths live in [`crate::consts`].

use crate::consts::*;
use crate::error::{Error, Result};
use crate::types::{EntryKind, Metadata};

#[cfg(test)]
mod tests;

/// Write `value` into a fixed-width field, NUL-padding the remainder.
/// Values longer than the field are truncated at the byte level.
fn write_str(block: &mut [u8], offset: usize, width: usize, value: &str) {
    let bytes = value.as_bytes();
    let n = bytes.len().min(width);
    block[offset..offset + n].copy_from_slice(&bytes[..n]);
    block[offset + n..offset + width].fill(0);
}

/// Write `value` as a zero-padded octal string occupying `width - 1` digits,
/// leaving the field's final byte NUL.
fn write_octal(
    block: &mut [u8],
    offset: usize,
    width: usize,
    field: &'static str,
    value: u64,
) -> Result<()> {
    let digits = width - 1;
    let max = (1u64 << (3 * digits)) - 1;
    if value > max {
        return Err(Error::FieldOverflow { field, value, max });
    }
    write_str(block, offset, width, &format!("{:0width$o}", value, width = digits));
    Ok(())
}

/// Compute and write the header checksum: the byte sum of the whole block
/// with the checksum field itself counted as eight ASCII spaces, stored as
/// zero-padded octal with a trailing space.
fn write_checksum(block: &mut [u8]) {
    block[CHECKSUM_OFFSET..CHECKSUM_OFFSET + CHECKSUM_LEN].fill(b' ');
    let sum: u32 = block[..BLOCK_SIZE].iter().map(|&b| u32::from(b)).sum();
    write_str(
        block,
        CHECKSUM_OFFSET,
        CHECKSUM_LEN,
        &format!("{:07o} ", sum),
    );
}

/// Encode one entry's header into `block` (the entry's first 512 bytes,
/// already zeroed). The checksum is written last, over the finished block.
pub(crate) fn fill(
    block: &mut [u8],
    name: &str,
    kind: EntryKind,
    size: usize,
    metadata: &Metadata,
    default_mtime: u64,
) -> Result<()> {
    if name.len() > NAME_LEN {
        return Err(Error::NameTooLong {
            name: name.to_string(),
            len: name.len(),
        });
    }
    write_str(block, NAME_OFFSET, NAME_LEN, name);

    let mode = metadata.mode.unwrap_or_else(|| kind.default_mode());
    write_octal(block, MODE_OFFSET, MODE_LEN, "mode", u64::from(mode))?;
    write_octal(block, UID_OFFSET, UID_LEN, "uid", metadata.uid)?;
    write_octal(block, GID_OFFSET, GID_LEN, "gid", metadata.gid)?;
    write_octal(block, SIZE_OFFSET, SIZE_LEN, "size", size as u64)?;
    write_octal(
        block,
        MTIME_OFFSET,
        MTIME_LEN,
        "mtime",
        metadata.mtime.unwrap_or(default_mtime),
    )?;

    block[TYPEFLAG_OFFSET] = kind.type_flag();
    write_str(block, MAGIC_OFFSET, MAGIC_LEN, MAGIC);
    write_str(block, VERSION_OFFSET, VERSION_LEN, VERSION);
    write_str(block, UNAME_OFFSET, UNAME_LEN, &metadata.user);
    write_str(block, GNAME_OFFSET, GNAME_LEN, &metadata.group);

    write_checksum(block);
    Ok(())
}
