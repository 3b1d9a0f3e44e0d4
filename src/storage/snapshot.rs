//! Tree snapshot persistence.
//!
//! The whole tree (node pool, root handle, order, entry count, and thereby
//! every key, value, and sibling link) is serialized to a single flat file
//! and restored from it in one piece. There is no page format and no
//! incremental persistence; the snapshot is an opaque blob with a small
//! integrity header in front.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::{Error, Result};
use crate::index::btree::BPlusTree;

/// Magic number identifying a leafdb snapshot file.
pub const SNAPSHOT_MAGIC: [u8; 4] = *b"LFDB";

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u16 = 1;

/// Metadata stored at the beginning of every snapshot file.
///
/// # Layout (18 bytes)
/// ```text
/// Offset  Size  Field
/// ------  ----  -----
/// 0       4     magic (b"LFDB")
/// 4       2     version (u16, little-endian)
/// 6       4     checksum (CRC32 of the payload, little-endian)
/// 10      8     payload_len (u64, little-endian)
/// 18      ...   payload (serialized tree)
/// ```
///
/// # Checksum
/// The checksum covers the payload only, so the header can be parsed and
/// validated before the (much larger) payload is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotHeader {
    /// Snapshot format version.
    pub version: u16,
    /// CRC32 checksum of the payload.
    pub checksum: u32,
    /// Length of the payload in bytes.
    pub payload_len: u64,
}

impl SnapshotHeader {
    /// Size of the header in bytes.
    pub const SIZE: usize = 18;

    /// Offset of each field within the header.
    pub const OFFSET_MAGIC: usize = 0;
    pub const OFFSET_VERSION: usize = 4;
    pub const OFFSET_CHECKSUM: usize = 6;
    pub const OFFSET_PAYLOAD_LEN: usize = 10;

    /// Build the header describing `payload`.
    pub fn new(payload: &[u8]) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            checksum: compute_checksum(payload),
            payload_len: payload.len() as u64,
        }
    }

    /// Parse and validate a header from the beginning of a byte slice.
    ///
    /// # Errors
    /// Returns `Error::Corrupt` if the slice is too short, the magic number
    /// is wrong, or the version is unsupported.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            return Err(Error::Corrupt(format!(
                "file too short for snapshot header: {} bytes",
                data.len()
            )));
        }

        if data[Self::OFFSET_MAGIC..Self::OFFSET_MAGIC + 4] != SNAPSHOT_MAGIC {
            return Err(Error::Corrupt("bad magic number".to_string()));
        }

        let version = u16::from_le_bytes([
            data[Self::OFFSET_VERSION],
            data[Self::OFFSET_VERSION + 1],
        ]);
        if version != SNAPSHOT_VERSION {
            return Err(Error::Corrupt(format!(
                "unsupported snapshot version: {}",
                version
            )));
        }

        let checksum = u32::from_le_bytes([
            data[Self::OFFSET_CHECKSUM],
            data[Self::OFFSET_CHECKSUM + 1],
            data[Self::OFFSET_CHECKSUM + 2],
            data[Self::OFFSET_CHECKSUM + 3],
        ]);

        let payload_len = u64::from_le_bytes([
            data[Self::OFFSET_PAYLOAD_LEN],
            data[Self::OFFSET_PAYLOAD_LEN + 1],
            data[Self::OFFSET_PAYLOAD_LEN + 2],
            data[Self::OFFSET_PAYLOAD_LEN + 3],
            data[Self::OFFSET_PAYLOAD_LEN + 4],
            data[Self::OFFSET_PAYLOAD_LEN + 5],
            data[Self::OFFSET_PAYLOAD_LEN + 6],
            data[Self::OFFSET_PAYLOAD_LEN + 7],
        ]);

        Ok(Self {
            version,
            checksum,
            payload_len,
        })
    }

    /// Write this header to the beginning of a byte slice.
    ///
    /// # Panics
    /// Panics if `data.len() < SnapshotHeader::SIZE`.
    pub fn write_to(&self, data: &mut [u8]) {
        assert!(
            data.len() >= Self::SIZE,
            "buffer too small for SnapshotHeader"
        );

        data[Self::OFFSET_MAGIC..Self::OFFSET_MAGIC + 4].copy_from_slice(&SNAPSHOT_MAGIC);
        data[Self::OFFSET_VERSION..Self::OFFSET_VERSION + 2]
            .copy_from_slice(&self.version.to_le_bytes());
        data[Self::OFFSET_CHECKSUM..Self::OFFSET_CHECKSUM + 4]
            .copy_from_slice(&self.checksum.to_le_bytes());
        data[Self::OFFSET_PAYLOAD_LEN..Self::OFFSET_PAYLOAD_LEN + 8]
            .copy_from_slice(&self.payload_len.to_le_bytes());
    }
}

/// Compute the CRC32 checksum of a snapshot payload.
pub fn compute_checksum(payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(payload);
    hasher.finalize()
}

/// Serialize the whole tree to `path` as a single checksummed blob.
///
/// An existing file at `path` is replaced. The write is followed by
/// `fsync()` so a completed save survives a crash.
///
/// # Errors
/// Returns `Error::Io` on file errors, `Error::Serde` if the tree cannot be
/// encoded.
pub fn save_tree<V: Serialize, P: AsRef<Path>>(path: P, tree: &BPlusTree<V>) -> Result<()> {
    let payload = serde_json::to_vec(tree)?;
    let header = SnapshotHeader::new(&payload);

    let mut buf = vec![0u8; SnapshotHeader::SIZE];
    header.write_to(&mut buf);
    buf.extend_from_slice(&payload);

    let mut file = File::create(path)?;
    file.write_all(&buf)?;
    file.sync_all()?; // fsync for durability

    Ok(())
}

/// Read a snapshot back into an equivalent in-memory tree.
///
/// # Errors
/// - `Error::Io` if the file is missing or unreadable.
/// - `Error::Corrupt` if the header is invalid, the payload length disagrees
///   with the file size, or the checksum does not match.
/// - `Error::Serde` if the payload fails to decode.
///
/// The driver treats every one of these as "no existing tree" and rebuilds
/// from seed data.
pub fn load_tree<V: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<BPlusTree<V>> {
    let data = fs::read(path)?;
    let header = SnapshotHeader::from_bytes(&data)?;

    let payload = &data[SnapshotHeader::SIZE..];
    if payload.len() as u64 != header.payload_len {
        return Err(Error::Corrupt(format!(
            "payload is {} bytes but header says {}",
            payload.len(),
            header.payload_len
        )));
    }

    if compute_checksum(payload) != header.checksum {
        return Err(Error::Corrupt("checksum mismatch".to_string()));
    }

    Ok(serde_json::from_slice(payload)?)
}
