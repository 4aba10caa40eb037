// Dictionary binary format
// 字典二进制格式
//
// [signature: 7 bytes, optional][count: vbyte][len_0..len_{n-1}: vbyte]
// [utf8 bytes of string_0][...][utf8 bytes of string_{n-1}]

use crate::{Dict, Error, Result};

/// Magic token identifying a serialized dictionary stream.
/// 标识序列化字典流的魔数。
pub const SIGNATURE: &[u8; 7] = b"astdict";

/// Serialize in two passes after the count: a full length table, then the
/// raw payloads with no delimiters.
/// 在数量之后分两遍序列化：完整长度表，然后是无分隔符的原始负载。
pub fn to_bytes(dict: &Dict, with_signature: bool) -> Vec<u8> {
  let mut out = Vec::new();
  if with_signature {
    out.extend_from_slice(SIGNATURE);
  }
  vbyte::encode_into(dict.len() as u64, &mut out);
  for s in dict.iter() {
    vbyte::encode_into(s.len() as u64, &mut out);
  }
  for s in dict.iter() {
    out.extend_from_slice(s.as_bytes());
  }
  out
}

/// Mirror of [`to_bytes`]. Trailing bytes beyond the last payload are left
/// for the caller.
/// [`to_bytes`] 的镜像。最后一个负载之后的字节留给调用方。
pub fn from_bytes(buf: &[u8], with_signature: bool) -> Result<Dict> {
  let mut pos = 0usize;
  if with_signature {
    let sig = buf.get(..SIGNATURE.len()).ok_or(Error::Truncated)?;
    if sig != SIGNATURE {
      return Err(Error::Signature(sig.into()));
    }
    pos += SIGNATURE.len();
  }

  let (count, used) = vbyte::decode(&buf[pos..])?;
  pos += used;
  let count = count as usize;
  // each entry needs at least one length byte
  // 每个条目至少需要一个长度字节
  if count > buf.len() - pos {
    return Err(Error::Truncated);
  }

  let mut lens = Vec::with_capacity(count);
  for _ in 0..count {
    let (len, used) = vbyte::decode(&buf[pos..])?;
    pos += used;
    lens.push(len as usize);
  }

  let mut strings = Vec::with_capacity(count);
  for len in lens {
    let payload = buf
      .get(pos..pos + len)
      .ok_or(Error::Truncated)?;
    strings.push(std::str::from_utf8(payload)?.into());
    pos += len;
  }

  Ok(Dict::from_sorted(strings))
}
