// Compressor seam
// 压缩器接口

use std::path::Path;

use crate::Result;

/// General-purpose compressor at best-effort level, for both the baseline
/// and the optional post-encode measurement.
/// 尽力压缩级别的通用压缩器，用于基线与可选的编码后测量。
pub trait Compress {
  /// Compressor name / 压缩器名称
  fn name(&self) -> &str;

  /// Compress an in-memory buffer / 压缩内存缓冲
  fn bytes(&self, data: &[u8]) -> Result<Vec<u8>>;

  /// Compress a file's raw bytes / 压缩文件原始字节
  fn file(&self, path: &Path) -> Result<Vec<u8>>;
}
