// Aggregate size statistics
// 聚合大小统计

/// Running totals for encoded and baseline sizes. Mutated by addition only;
/// the final report is a read of the last state. Skipped files contribute to
/// neither total.
/// 编码与基线大小的累计值。只增不减；最终报告即最后状态。被跳过的文件不计入
/// 任何一侧。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeStats {
  pub encoded_bytes: u64,
  pub baseline_bytes: u64,
}

impl SizeStats {
  #[inline]
  pub fn add(&mut self, encoded: u64, baseline: u64) {
    self.encoded_bytes += encoded;
    self.baseline_bytes += baseline;
  }

  /// Global ratio; 0 until a baseline lands / 全局比率；无基线时为 0
  #[inline]
  pub fn ratio(&self) -> f64 {
    ratio(self.encoded_bytes, self.baseline_bytes)
  }
}

/// encoded / baseline with a zero guard / 带零保护的 encoded / baseline
#[inline]
pub fn ratio(encoded: u64, baseline: u64) -> f64 {
  if baseline == 0 {
    0.0
  } else {
    encoded as f64 / baseline as f64
  }
}
