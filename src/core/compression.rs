// Compression backends for plot input streams

use crate::core::constants::{CompressionType, SNIFF_SIZE};
use crate::core::error::{NexError, Result};
use crate::models::reader_config::CompressionMode;
use flate2::bufread::{MultiGzDecoder, ZlibDecoder};
use std::io::{BufRead, Cursor, Read};
use tracing::debug;

/// Pick the codec for `input` and wrap it in a streaming decoder. In
/// `Auto` mode the first `SNIFF_SIZE` bytes are read ahead and replayed in
/// front of the rest of the stream.
pub fn open_stream<'a, R: BufRead + 'a>(
    mut input: R,
    mode: CompressionMode,
) -> Result<Box<dyn Read + 'a>> {
    match mode.fixed() {
        Some(compression) => {
            debug!("Plot stream compression: {:?}", compression);
            decompress(input, compression)
        }
        None => {
            let head = read_head(&mut input)?;
            let compression = CompressionType::sniff(&head);
            debug!("Plot stream compression (sniffed): {:?}", compression);
            decompress(Cursor::new(head).chain(input), compression)
        }
    }
}

// Loops until SNIFF_SIZE bytes or EOF; one read may return fewer.
fn read_head<R: Read>(input: &mut R) -> Result<Vec<u8>> {
    let mut head = Vec::with_capacity(SNIFF_SIZE);
    input.take(SNIFF_SIZE as u64).read_to_end(&mut head)?;
    Ok(head)
}

pub fn decompress<'a, R: BufRead + 'a>(
    input: R,
    compression: CompressionType,
) -> Result<Box<dyn Read + 'a>> {
    match compression {
        CompressionType::None => Ok(Box::new(input)),

        CompressionType::Zlib => Ok(Box::new(ZlibDecoder::new(input))),

        CompressionType::Gzip => Ok(Box::new(MultiGzDecoder::new(input))),

        #[cfg(feature = "lz4")]
        CompressionType::Lz4 => {
            let decoder = lz4::Decoder::new(input)
                .map_err(|e| NexError::DecompressionFailed(format!("LZ4: {}", e)))?;
            Ok(Box::new(decoder))
        }

        #[cfg(not(feature = "lz4"))]
        CompressionType::Lz4 => Err(NexError::UnsupportedCompression("lz4".to_string())),

        #[cfg(feature = "zstd")]
        CompressionType::Zstd => {
            let decoder = zstd::stream::read::Decoder::with_buffer(input)
                .map_err(|e| NexError::DecompressionFailed(format!("Zstd: {}", e)))?;
            Ok(Box::new(decoder))
        }

        #[cfg(not(feature = "zstd"))]
        CompressionType::Zstd => Err(NexError::UnsupportedCompression("zstd".to_string())),
    }
}
