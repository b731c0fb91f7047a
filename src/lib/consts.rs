/// Size of a single tar block. Headers occupy exactly one block, and file
/// data is padded up to a block boundary.
pub const BLOCK_SIZE: usize = 512;

/// Size of a tar record. The finished archive is padded up to a record
/// boundary, which also supplies the two-zero-block end-of-archive marker.
pub const RECORD_SIZE: usize = 10240;

/// Media type of the finished archive, for HTTP-facing callers.
pub const CONTENT_TYPE: &str = "application/x-tar";

// ustar header field offsets and widths.
pub const NAME_OFFSET: usize = 0;
pub const NAME_LEN: usize = 100;
pub const MODE_OFFSET: usize = 100;
pub const MODE_LEN: usize = 8;
pub const UID_OFFSET: usize = 108;
pub const UID_LEN: usize = 8;
pub const GID_OFFSET: usize = 116;
pub const GID_LEN: usize = 8;
pub const SIZE_OFFSET: usize = 124;
pub const SIZE_LEN: usize = 12;
pub const MTIME_OFFSET: usize = 136;
pub const MTIME_LEN: usize = 12;
pub const CHECKSUM_OFFSET: usize = 148;
pub const CHECKSUM_LEN: usize = 8;
pub const TYPEFLAG_OFFSET: usize = 156;
pub const MAGIC_OFFSET: usize = 257;
pub const MAGIC_LEN: usize = 6;
pub const VERSION_OFFSET: usize = 263;
pub const VERSION_LEN: usize = 2;
pub const UNAME_OFFSET: usize = 265;
pub const UNAME_LEN: usize = 32;
pub const GNAME_OFFSET: usize = 297;
pub const GNAME_LEN: usize = 32;

/// Magic written at [`MAGIC_OFFSET`]. The 6-byte window leaves an implicit
/// trailing NUL.
pub const MAGIC: &str = "ustar";
/// Version written at [`VERSION_OFFSET`].
pub const VERSION: &str = "00";

// Default entry metadata, overridable per entry.
pub const DEFAULT_FILE_MODE: u32 = 0o600;
pub const DEFAULT_DIR_MODE: u32 = 0o755;
pub const DEFAULT_UID: u64 = 0;
pub const DEFAULT_GID: u64 = 0;
pub const DEFAULT_OWNER: &str = "root";
