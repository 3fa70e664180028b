// Wire constants for the Nexus plot format

pub const SIGNATURE_SIZE: usize = 12;
pub const SIGNATURE: &[u8; SIGNATURE_SIZE] = b"PLOT  BIN   ";
pub const STOP: &[u8; 8] = b"STOP    ";

// Header: lead(4) signature(12) version/simulator blob(24) unit system(6)
// reserved(794) counters(8 * i32)
pub const HEADER_LEAD_SIZE: u64 = 4;
pub const HEADER_VERSION_BLOB_SIZE: u64 = 6 + 6 + 6 + 6;
pub const UNIT_SYSTEM_SIZE: usize = 6;
pub const HEADER_RESERVED_SIZE: u64 = 530 + 264;
pub const HEADER_COUNTERS: usize = 8;
pub const HEADER_SIZE: u64 = HEADER_LEAD_SIZE
    + SIGNATURE_SIZE as u64
    + HEADER_VERSION_BLOB_SIZE
    + UNIT_SYSTEM_SIZE as u64
    + HEADER_RESERVED_SIZE
    + (HEADER_COUNTERS * 4) as u64; // 872 bytes

pub const CLASS_NAME_SIZE: usize = 8;
pub const VAR_NAME_SIZE: usize = 4;
pub const INSTANCE_NAME_SIZE: usize = 8;

// Catalog: separators between the class table, count table and name blocks
pub const CATALOG_SEPARATOR_SIZE: u64 = 8;
pub const TIME_VARNAME_SIZE: u64 = 4;
pub const CLASS_TRAILER_SIZE: u64 = 8;

// Data block: class(8) prefix(8) fields(5 * i32) items... trailer(8)
pub const BLOCK_PREFIX_SIZE: u64 = 8;
pub const BLOCK_FIELDS: usize = 5;
pub const ITEM_PREFIX_SIZE: u64 = 8;
pub const ITEM_RESERVED_SIZE: u64 = 64;
pub const BLOCK_TRAILER_SIZE: u64 = 8;

pub const DEFAULT_BUFFER_CAPACITY: usize = 64 * 1024;

pub const GZIP_MAGIC: &[u8; 2] = &[0x1f, 0x8b];
pub const ZSTD_MAGIC: &[u8; 4] = &[0x28, 0xb5, 0x2f, 0xfd];
pub const LZ4_FRAME_MAGIC: &[u8; 4] = &[0x04, 0x22, 0x4d, 0x18];

// Input stream codecs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    None,
    Zlib,
    Lz4,
    Zstd,
    Gzip,
}

// Lead field plus signature: enough to recognise an uncompressed plot
pub const SNIFF_SIZE: usize = HEADER_LEAD_SIZE as usize + SIGNATURE_SIZE;

impl CompressionType {
    /// Guess the codec from the first `SNIFF_SIZE` bytes of a stream.
    ///
    /// The 4-byte lead field of a raw plot is arbitrary, so a signature at
    /// offset 4 wins over any magic. Zlib has no reliable magic and is
    /// never sniffed.
    pub fn sniff(head: &[u8]) -> Self {
        let lead = HEADER_LEAD_SIZE as usize;
        if head.get(lead..SNIFF_SIZE) == Some(&SIGNATURE[..]) {
            CompressionType::None
        } else if head.starts_with(GZIP_MAGIC) {
            CompressionType::Gzip
        } else if head.starts_with(ZSTD_MAGIC) {
            CompressionType::Zstd
        } else if head.starts_with(LZ4_FRAME_MAGIC) {
            CompressionType::Lz4
        } else {
            CompressionType::None
        }
    }
}
