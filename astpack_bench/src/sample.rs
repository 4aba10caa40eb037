// Corpus walking and seeded partitioning
// 语料遍历与按种子划分

use std::path::{Component, Path, PathBuf};

use crate::Result;

/// Version-control metadata directories, excluded entirely before sampling.
/// 版本控制元数据目录，采样前完全排除。
const VCS_DIRS: &[&str] = &[".git", ".hg", ".svn"];

fn in_vcs_dir(path: &Path) -> bool {
  path.components().any(|c| match c {
    Component::Normal(name) => name.to_str().is_some_and(|n| VCS_DIRS.contains(&n)),
    _ => false,
  })
}

/// Walk roots in sorted entry order so the file list is stable across runs
/// and platforms.
/// 按排序后的目录项遍历根目录，使文件列表跨运行与平台稳定。
pub fn walk_corpus(roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
  let mut files = Vec::new();
  for root in roots {
    walk_dir(root, &mut files)?;
  }
  Ok(files)
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
  let mut entries = Vec::new();
  for entry in std::fs::read_dir(dir)? {
    entries.push(entry?.path());
  }
  entries.sort();
  for path in entries {
    if path.is_dir() {
      walk_dir(&path, files)?;
    } else {
      files.push(path);
    }
  }
  Ok(())
}

/// The two corpus halves / 语料的两半
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
  pub dict_files: Vec<PathBuf>,
  pub eval_files: Vec<PathBuf>,
}

/// One seeded draw in [0,1) per remaining file, consumed in list order;
/// `draw < p` joins the dictionary set. Identical `(files, p, seed)` always
/// yield the identical partition.
/// 每个保留文件按列表顺序消耗一个 [0,1) 种子随机数；`draw < p` 进入字典集。
/// 相同的 `(files, p, seed)` 必然产生相同划分。
pub fn partition(files: Vec<PathBuf>, p: f64, seed: u64) -> Partition {
  let mut rng = fastrand::Rng::with_seed(seed);
  let mut dict_files = Vec::new();
  let mut eval_files = Vec::new();
  for path in files {
    if in_vcs_dir(&path) {
      continue;
    }
    if rng.f64() < p {
      dict_files.push(path);
    } else {
      eval_files.push(path);
    }
  }
  Partition {
    dict_files,
    eval_files,
  }
}
