// Error types for astpack_bench
// astpack_bench 错误类型

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("grammar: {0}")]
  Grammar(#[from] astpack_grammar::Error),

  #[error("dict: {0}")]
  Dict(#[from] astpack_dict::Error),

  /// A failed compressor leaves no baseline, so the run aborts.
  /// 压缩器失败则没有基线，运行中止。
  #[error("compressor exited with {status}: {stderr}")]
  Compressor { status: i32, stderr: Box<str> },

  #[error("{0}")]
  Other(Box<str>),
}

impl Error {
  /// 创建 Other 错误 Create Other error
  #[inline]
  pub fn other(msg: impl Into<Box<str>>) -> Self {
    Self::Other(msg.into())
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
