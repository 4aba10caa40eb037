// Evaluation pipeline
// 评测流水线

use std::path::{Path, PathBuf};

use astpack_dict::Dict;
use astpack_grammar::{Grammar, Ty};
use log::{info, warn};
use serde_json::Value;

use crate::{
  AstEncode, AstParser, Compress, Error, FileAst, Result, SizeStats,
  sample::{Partition, partition, walk_corpus},
  stats,
};

/// Role a corpus file plays / 语料文件的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
  DictSource,
  Eval,
}

/// Terminal per-file outcome / 每个文件的终态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  ParsedOk,
  ParseFailed,
  Malformed,
  Encoded,
}

/// Fixed role at partition time, outcome written once per phase.
/// 角色在划分时固定，结局每阶段写入一次。
#[derive(Debug, Clone)]
pub struct FileRecord {
  pub path: PathBuf,
  pub role: Role,
  pub outcome: Outcome,
}

/// Run configuration / 运行配置
#[derive(Debug, Clone)]
pub struct RunConf {
  pub roots: Vec<PathBuf>,
  pub seed: u64,
  pub sample: f64,
  /// Full diagnostic detail on skips / 跳过时输出完整诊断
  pub show_errors: bool,
  /// Compress the encoded output before measuring / 先压缩编码输出再测量
  pub recompress: bool,
  /// Render the byte transcript while encoding / 编码时渲染字节转录
  pub trace: bool,
  /// Persist the signed dictionary stream / 持久化带签名的字典流
  pub dict_out: Option<PathBuf>,
}

impl RunConf {
  pub fn new(roots: Vec<PathBuf>) -> Self {
    Self {
      roots,
      seed: 0,
      sample: 0.2,
      show_errors: false,
      recompress: false,
      trace: false,
      dict_out: None,
    }
  }

  pub fn seed(mut self, seed: u64) -> Self {
    self.seed = seed;
    self
  }

  pub fn sample(mut self, sample: f64) -> Self {
    self.sample = sample;
    self
  }

  pub fn show_errors(mut self, on: bool) -> Self {
    self.show_errors = on;
    self
  }

  pub fn recompress(mut self, on: bool) -> Self {
    self.recompress = on;
    self
  }

  pub fn trace(mut self, on: bool) -> Self {
    self.trace = on;
    self
  }

  pub fn dict_out(mut self, path: PathBuf) -> Self {
    self.dict_out = Some(path);
    self
  }
}

/// Final report: last stats state plus per-file records.
/// 最终报告：统计的最后状态加上每文件记录。
#[derive(Debug)]
pub struct RunReport {
  pub stats: SizeStats,
  pub records: Vec<FileRecord>,
  pub dict_len: usize,
}

pub struct Runner<'a, E, C> {
  grammar: &'a Grammar,
  parser: AstParser,
  encoder: E,
  compressor: C,
  conf: RunConf,
}

impl<'a, E: AstEncode, C: Compress> Runner<'a, E, C> {
  pub fn new(
    grammar: &'a Grammar,
    parser: AstParser,
    encoder: E,
    compressor: C,
    conf: RunConf,
  ) -> Self {
    Self {
      grammar,
      parser,
      encoder,
      compressor,
      conf,
    }
  }

  /// Partition, build the dictionary, then measure every evaluation file.
  /// Parse and decode failures skip the file; compressor failures abort.
  /// 划分、构建字典、逐个测量评测文件。解析与解码失败跳过该文件；压缩器
  /// 失败则中止。
  pub fn run(&self) -> Result<RunReport> {
    let files = walk_corpus(&self.conf.roots)?;
    let Partition {
      dict_files,
      eval_files,
    } = partition(files, self.conf.sample, self.conf.seed);
    info!(
      "corpus: {} dictionary sources, {} evaluation files ({} vs {} baseline)",
      dict_files.len(),
      eval_files.len(),
      self.encoder.name(),
      self.compressor.name()
    );

    let root_ty = Ty::Node;
    let mut records = Vec::new();

    let mut sources = Vec::new();
    for path in dict_files {
      match self.parser.parse(self.grammar, &path)? {
        FileAst::Parsed(ast) => {
          records.push(FileRecord {
            path,
            role: Role::DictSource,
            outcome: Outcome::ParsedOk,
          });
          sources.push(ast);
        }
        FileAst::ParseFailed(detail) => {
          self.skip(&path, "cannot parse", &detail);
          records.push(FileRecord {
            path,
            role: Role::DictSource,
            outcome: Outcome::ParseFailed,
          });
        }
        FileAst::Malformed(detail) => {
          self.skip(&path, "cannot process", &detail);
          records.push(FileRecord {
            path,
            role: Role::DictSource,
            outcome: Outcome::Malformed,
          });
        }
      }
    }

    let dict = Dict::build(self.grammar, sources.iter().map(|ast| (&root_ty, ast)))?;
    info!("dictionary: {} strings", dict.len());
    if let Some(path) = &self.conf.dict_out {
      std::fs::write(path, astpack_dict::to_bytes(&dict, true))?;
    }

    let mut totals = SizeStats::default();
    for path in eval_files {
      let ast = match self.parser.parse(self.grammar, &path)? {
        FileAst::Parsed(ast) => ast,
        FileAst::ParseFailed(detail) => {
          self.skip(&path, "cannot parse", &detail);
          records.push(FileRecord {
            path,
            role: Role::Eval,
            outcome: Outcome::ParseFailed,
          });
          continue;
        }
        FileAst::Malformed(detail) => {
          self.skip(&path, "cannot process", &detail);
          records.push(FileRecord {
            path,
            role: Role::Eval,
            outcome: Outcome::Malformed,
          });
          continue;
        }
      };

      let encoded = self.encode(&dict, &root_ty, &ast)?;
      let encoded_size = if self.conf.recompress {
        self.compressor.bytes(&encoded)?.len() as u64
      } else {
        encoded.len() as u64
      };
      let baseline_size = self.compressor.file(&path)?.len() as u64;
      totals.add(encoded_size, baseline_size);
      info!(
        "{}: ratio {:.6}, global {:.6}",
        path.display(),
        stats::ratio(encoded_size, baseline_size),
        totals.ratio()
      );
      records.push(FileRecord {
        path,
        role: Role::Eval,
        outcome: Outcome::Encoded,
      });
    }

    Ok(RunReport {
      stats: totals,
      records,
      dict_len: dict.len(),
    })
  }

  fn encode(&self, dict: &Dict, ty: &Ty, ast: &Value) -> Result<Vec<u8>> {
    let logger = hexlog::Logger::new(Vec::new());
    if !self.conf.trace {
      logger.disable();
    }
    self.encoder.encode(self.grammar, dict, ty, ast, &logger)?;
    logger
      .into_inner()
      .ok_or_else(|| Error::other("encoder kept a logger handle"))
  }

  fn skip(&self, path: &Path, what: &str, detail: &str) {
    let detail = detail.trim();
    if self.conf.show_errors && !detail.is_empty() {
      warn!("skipping {} ({what}): {detail}", path.display());
    } else {
      warn!("skipping {} ({what})", path.display());
    }
  }
}
