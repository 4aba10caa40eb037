// Error types for astpack_grammar
// astpack_grammar 错误类型

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("unknown type: {0}")]
  UnknownType(Box<str>),

  #[error("node object missing \"type\" tag")]
  MissingTag,

  #[error("expected {expect}, found {found}")]
  Shape {
    expect: &'static str,
    found: &'static str,
  },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
