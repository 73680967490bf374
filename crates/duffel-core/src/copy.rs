//! Shared buffered stream copy.

use std::io::Read;
use std::io::Write;

/// Buffer length for streaming copies, in bytes.
pub const BUFFER_LEN: usize = 8192;

/// Copies `reader` to `writer` through a fixed [`BUFFER_LEN`] buffer.
///
/// Returns the number of bytes copied. Extraction streams every entry
/// payload into its destination file through this helper.
///
/// # Errors
///
/// Returns the first read or write error encountered.
pub fn copy_streaming<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
) -> std::io::Result<u64> {
    let mut buffer = [0u8; BUFFER_LEN];
    let mut total = 0u64;
    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        writer.write_all(&buffer[..read])?;
        total += read as u64;
    }
    Ok(total)
}
