use rstest::rstest;

use super::*;
use crate::error::Error;
use crate::types::MetadataBuilder;

fn filled_block(name: &str, kind: EntryKind, size: usize) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    fill(&mut block, name, kind, size, &Metadata::default(), 1_600_000_000)
        .expect("fill failed");
    block
}

#[rstest]
#[case(0, "00000000000\0")]
#[case(5, "00000000005\0")]
#[case(0o777, "00000000777\0")]
#[case(8_589_934_591, "77777777777\0")]
fn test_octal_encoding(#[case] value: u64, #[case] expected: &str) {
    let mut block = [0u8; BLOCK_SIZE];
    write_octal(&mut block, SIZE_OFFSET, SIZE_LEN, "size", value).expect("write failed");
    assert_eq!(
        &block[SIZE_OFFSET..SIZE_OFFSET + SIZE_LEN],
        expected.as_bytes(),
        "field mismatch"
    );
}

#[test]
fn test_octal_overflow() {
    let mut block = [0u8; BLOCK_SIZE];
    let err = write_octal(&mut block, SIZE_OFFSET, SIZE_LEN, "size", 8_589_934_592)
        .expect_err("write should fail");
    assert!(
        matches!(err, Error::FieldOverflow { field: "size", .. }),
        "unexpected error: {}",
        err
    );
}

#[test]
fn test_fixed_fields() {
    let block = filled_block("etc/hosts", EntryKind::File, 5);
    assert_eq!(&block[NAME_OFFSET..NAME_OFFSET + 10], b"etc/hosts\0");
    assert_eq!(&block[MODE_OFFSET..MODE_OFFSET + MODE_LEN], b"0000600\0");
    assert_eq!(&block[UID_OFFSET..UID_OFFSET + UID_LEN], b"0000000\0");
    assert_eq!(&block[GID_OFFSET..GID_OFFSET + GID_LEN], b"0000000\0");
    assert_eq!(block[TYPEFLAG_OFFSET], b'0');
    assert_eq!(&block[MAGIC_OFFSET..MAGIC_OFFSET + MAGIC_LEN], b"ustar\0");
    assert_eq!(&block[VERSION_OFFSET..VERSION_OFFSET + VERSION_LEN], b"00");
    assert_eq!(&block[UNAME_OFFSET..UNAME_OFFSET + 5], b"root\0");
    assert_eq!(&block[GNAME_OFFSET..GNAME_OFFSET + 5], b"root\0");
}

#[test]
fn test_dir_defaults() {
    let block = filled_block("srv/www", EntryKind::Dir, 0);
    assert_eq!(block[TYPEFLAG_OFFSET], b'5');
    assert_eq!(&block[MODE_OFFSET..MODE_OFFSET + MODE_LEN], b"0000755\0");
    assert_eq!(
        &block[SIZE_OFFSET..SIZE_OFFSET + SIZE_LEN],
        b"00000000000\0"
    );
}

#[test]
fn test_checksum_matches_space_filled_sum() {
    let block = filled_block("a/b.txt", EntryKind::File, 42);

    let mut copy = block;
    copy[CHECKSUM_OFFSET..CHECKSUM_OFFSET + CHECKSUM_LEN].fill(b' ');
    let expected: u32 = copy.iter().map(|&b| u32::from(b)).sum();

    let field = std::str::from_utf8(&block[CHECKSUM_OFFSET..CHECKSUM_OFFSET + CHECKSUM_LEN])
        .expect("checksum not utf8");
    let parsed = u32::from_str_radix(field.trim_matches(|c| c == ' ' || c == '\0'), 8)
        .expect("checksum not octal");
    assert_eq!(parsed, expected, "checksum mismatch");
    assert_eq!(field.as_bytes()[CHECKSUM_LEN - 1], b' ', "missing terminator");
}

#[test]
fn test_name_too_long() {
    let mut block = [0u8; BLOCK_SIZE];
    let name = "x".repeat(101);
    let err = fill(
        &mut block,
        &name,
        EntryKind::File,
        0,
        &Metadata::default(),
        0,
    )
    .expect_err("fill should fail");
    assert!(
        matches!(err, Error::NameTooLong { len: 101, .. }),
        "unexpected error: {}",
        err
    );
}

#[test]
fn test_metadata_overrides() {
    let metadata = MetadataBuilder::default()
        .mode(Some(0o644))
        .uid(1000)
        .gid(100)
        .mtime(Some(1))
        .user("geeko".to_string())
        .group("users".to_string())
        .build()
        .expect("builder failed");
    let mut block = [0u8; BLOCK_SIZE];
    fill(&mut block, "f", EntryKind::File, 0, &metadata, 99).expect("fill failed");
    assert_eq!(&block[MODE_OFFSET..MODE_OFFSET + MODE_LEN], b"0000644\0");
    assert_eq!(&block[UID_OFFSET..UID_OFFSET + UID_LEN], b"0001750\0");
    assert_eq!(&block[GID_OFFSET..GID_OFFSET + GID_LEN], b"0000144\0");
    assert_eq!(
        &block[MTIME_OFFSET..MTIME_OFFSET + MTIME_LEN],
        b"00000000001\0"
    );
    assert_eq!(&block[UNAME_OFFSET..UNAME_OFFSET + 6], b"geeko\0");
    assert_eq!(&block[GNAME_OFFSET..GNAME_OFFSET + 6], b"users\0");
}

#[test]
fn test_long_owner_names_truncate() {
    let metadata = MetadataBuilder::default()
        .user("u".repeat(40))
        .build()
        .expect("builder failed");
    let mut block = [0u8; BLOCK_SIZE];
    fill(&mut block, "f", EntryKind::File, 0, &metadata, 0).expect("fill failed");
    assert_eq!(
        &block[UNAME_OFFSET..UNAME_OFFSET + UNAME_LEN],
        "u".repeat(32).as_bytes(),
        "uname should truncate at field width"
    );
}
