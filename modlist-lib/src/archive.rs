//! Reader for zip-packaged mods.
//!
//! A packaged mod is a zip archive with a `modinfo.json` descriptor at its
//! root. The archive is integrity-checked in full before the descriptor is
//! trusted, since a truncated download usually still has a readable
//! central directory.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::descriptor::Descriptor;
use crate::error::ReadError;

/// Exact (case-sensitive) name of the descriptor entry.
pub const DESCRIPTOR_NAME: &str = "modinfo.json";

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Upper bound on the buffer reserved from the entry's declared size.
const MAX_PREALLOC: u64 = 1024 * 1024;

/// Read and normalize the descriptor of the archive at `path`.
pub fn read_archive_descriptor(path: &Path) -> Result<Descriptor, ReadError> {
    let file = File::open(path)?;
    read_descriptor_from(BufReader::new(file))
}

/// Read and normalize the descriptor from any seekable zip stream.
pub fn read_descriptor_from<R: Read + Seek>(reader: R) -> Result<Descriptor, ReadError> {
    let mut archive = ZipArchive::new(reader).map_err(zip_to_read_error)?;
    verify_archive(&mut archive)?;
    let bytes = read_descriptor_bytes(&mut archive)?;
    let text = decode_descriptor(&bytes)?;
    Descriptor::parse(&text)
}

/// Read every entry to the end so the zip reader checks each CRC.
pub fn verify_archive<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<(), ReadError> {
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(zip_to_read_error)?;
        let name = entry.name().to_string();
        io::copy(&mut entry, &mut io::sink())
            .map_err(|e| ReadError::corrupt(format!("{name}: {e}")))?;
    }
    Ok(())
}

fn read_descriptor_bytes<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Vec<u8>, ReadError> {
    let mut entry = match archive.by_name(DESCRIPTOR_NAME) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Err(ReadError::DescriptorMissing(DESCRIPTOR_NAME)),
        Err(e) => return Err(zip_to_read_error(e)),
    };
    let mut bytes = Vec::with_capacity(entry.size().min(MAX_PREALLOC) as usize);
    entry
        .read_to_end(&mut bytes)
        .map_err(|e| ReadError::corrupt(format!("{DESCRIPTOR_NAME}: {e}")))?;
    Ok(bytes)
}

/// Decode descriptor bytes as UTF-8, dropping a leading byte-order mark.
pub fn decode_descriptor(bytes: &[u8]) -> Result<String, ReadError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8(bytes.to_vec())
        .map_err(|e| ReadError::malformed(format!("{DESCRIPTOR_NAME} is not valid UTF-8: {e}")))
}

/// Once the file is open, any zip-level failure (including short reads)
/// means the archive itself is damaged.
fn zip_to_read_error(err: ZipError) -> ReadError {
    ReadError::corrupt(err.to_string())
}

#[cfg(test)]
#[path = "tests/archive_tests.rs"]
mod tests;
