//! brotli CLI adapter
//! brotli 命令行适配器

use std::{
  path::{Path, PathBuf},
  process::Command,
};

use crate::{Compress, Error, Result};

const NAME: &str = "brotli";

/// Runs the external brotli with `--best` for both the baseline and the
/// post-encode measurement.
/// 以 `--best` 运行外部 brotli，同时用于基线与编码后测量。
pub struct BrotliCli {
  exe: PathBuf,
}

impl Default for BrotliCli {
  fn default() -> Self {
    Self {
      exe: PathBuf::from(NAME),
    }
  }
}

impl BrotliCli {
  pub fn new(exe: impl Into<PathBuf>) -> Self {
    Self { exe: exe.into() }
  }

  fn tmp_path(&self) -> PathBuf {
    std::env::temp_dir().join(format!("astpack.{}.br_in", std::process::id()))
  }
}

impl Compress for BrotliCli {
  fn name(&self) -> &str {
    NAME
  }

  fn bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
    let tmp = self.tmp_path();
    std::fs::write(&tmp, data)?;
    let out = self.file(&tmp);
    let _ = std::fs::remove_file(&tmp);
    out
  }

  fn file(&self, path: &Path) -> Result<Vec<u8>> {
    let output = Command::new(&self.exe)
      .arg("--stdout")
      .arg(path)
      .arg("--best")
      .output()?;
    if !output.status.success() {
      return Err(Error::Compressor {
        status: output.status.code().unwrap_or(-1),
        stderr: String::from_utf8_lossy(&output.stderr)
          .into_owned()
          .into_boxed_str(),
      });
    }
    Ok(output.stdout)
  }
}
