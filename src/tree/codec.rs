//! Node codec
//!
//! Binary encoding of a single tree node for snapshot files.
//!
//! ## Record Format
//! ```text
//! ┌──────────────┬───────────┬────────────────┬─────────────┐
//! │ KeyLen: u64  │ Key bytes │ ValueLen: u64  │ Value bytes │
//! └──────────────┴───────────┴────────────────┴─────────────┘
//! ```
//! Lengths are little-endian. A snapshot is a bare sequence of records with
//! no header, count, or checksum; end of file at a record boundary ends it.

use std::io::{ErrorKind, Read, Write};

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{Result, TreeKvError};

use super::Node;

/// Width of each length field in bytes
pub const LEN_FIELD_SIZE: usize = 8;

/// Encode a node's key and value as one record
pub fn encode_node(node: &Node) -> Bytes {
    let capacity = 2 * LEN_FIELD_SIZE + node.key.len() + node.value.len();
    let mut buf = BytesMut::with_capacity(capacity);
    buf.put_u64_le(node.key.len() as u64);
    buf.put_slice(&node.key);
    buf.put_u64_le(node.value.len() as u64);
    buf.put_slice(&node.value);
    buf.freeze()
}

/// Write one record to a stream
pub fn write_node<W: Write>(writer: &mut W, node: &Node) -> Result<()> {
    writer.write_all(&encode_node(node))?;
    Ok(())
}

/// Decode the next record as a detached leaf node
///
/// Returns:
/// - `Ok(Some(node))` — a complete record
/// - `Ok(None)` — the stream ended cleanly at a record boundary
/// - `Err(Corruption)` — the stream ended inside a record
pub fn decode_node<R: Read>(reader: &mut R) -> Result<Option<Node>> {
    let key_len = match read_len(reader, "key length")? {
        Some(len) => len,
        None => return Ok(None),
    };
    let key = read_bytes(reader, key_len, "key")?;

    let value_len = read_len(reader, "value length")?.ok_or_else(|| {
        TreeKvError::Corruption("truncated value length: stream ended after key".to_string())
    })?;
    let value = read_bytes(reader, value_len, "value")?;

    Ok(Some(Node::new(key, value)))
}

/// Read a length field. EOF before its first byte yields `None`; EOF part way
/// through is corruption.
fn read_len<R: Read>(reader: &mut R, field: &str) -> Result<Option<usize>> {
    let mut buf = [0u8; LEN_FIELD_SIZE];
    let mut filled = 0;

    while filled < LEN_FIELD_SIZE {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(TreeKvError::Io(e)),
        }
    }

    if filled == 0 {
        return Ok(None);
    }
    if filled < LEN_FIELD_SIZE {
        return Err(TreeKvError::Corruption(format!(
            "truncated {}: expected {} bytes, got {}",
            field, LEN_FIELD_SIZE, filled
        )));
    }

    let len = u64::from_le_bytes(buf);
    let len = usize::try_from(len).map_err(|_| {
        TreeKvError::Corruption(format!("{} {} exceeds addressable memory", field, len))
    })?;
    Ok(Some(len))
}

/// Read exactly `len` bytes, growing the buffer only as data arrives so a
/// bogus length cannot force a huge allocation.
fn read_bytes<R: Read>(reader: &mut R, len: usize, field: &str) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.by_ref().take(len as u64).read_to_end(&mut data)?;

    if data.len() < len {
        return Err(TreeKvError::Corruption(format!(
            "truncated {}: expected {} bytes, got {}",
            field,
            len,
            data.len()
        )));
    }
    Ok(data)
}
