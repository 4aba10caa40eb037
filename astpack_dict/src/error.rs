// Error types for astpack_dict
// astpack_dict 错误类型

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("signature mismatch: {0:02x?}")]
  Signature(Box<[u8]>),

  #[error("vbyte: {0}")]
  Vbyte(#[from] vbyte::Error),

  #[error("dictionary truncated")]
  Truncated,

  #[error("utf8: {0}")]
  Utf8(#[from] std::str::Utf8Error),

  #[error("walk: {0}")]
  Grammar(#[from] astpack_grammar::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
