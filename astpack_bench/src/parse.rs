// External parser invocation and AST classification
// 外部解析器调用与 AST 分类

use std::{
  path::{Path, PathBuf},
  process::Command,
};

use astpack_grammar::{Grammar, Ty, fix_floats};
use serde_json::Value;

use crate::Result;

/// Closed per-file classification, returned to the run loop which alone
/// decides skip vs abort.
/// 封闭的按文件分类结果，交由运行循环独自决定跳过或中止。
#[derive(Debug)]
pub enum FileAst {
  Parsed(Value),
  /// Parser exited non-zero or produced no output / 解析器非零退出或无输出
  ParseFailed(Box<str>),
  /// Output was not a decodable, normalizable AST / 输出不可解码或归一化失败
  Malformed(Box<str>),
}

/// External parser in quiet structure-dump mode.
/// 静默结构倾印模式下的外部解析器。
pub struct AstParser {
  exe: PathBuf,
  out_dir: PathBuf,
}

impl AstParser {
  pub fn new(exe: impl Into<PathBuf>) -> Self {
    Self {
      exe: exe.into(),
      out_dir: std::env::temp_dir().join("astpack"),
    }
  }

  /// Placeholder output path handed to the tool / 交给工具的占位输出路径
  pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.out_dir = dir.into();
    self
  }

  /// Parse one file and normalize floats. Classification never fails the
  /// run; only failure to launch the tool propagates.
  /// 解析单个文件并归一化浮点。分类不会令运行失败；只有工具无法启动才上抛。
  pub fn parse(&self, grammar: &Grammar, path: &Path) -> Result<FileAst> {
    let output = Command::new(&self.exe)
      .arg("--quiet")
      .arg("--show-ast")
      .arg("-i")
      .arg(path)
      .arg("-o")
      .arg(&self.out_dir)
      .output()?;

    if !output.status.success() || output.stdout.is_empty() {
      let detail = String::from_utf8_lossy(&output.stderr).into_owned();
      return Ok(FileAst::ParseFailed(detail.into_boxed_str()));
    }

    let mut ast: Value = match serde_json::from_slice(&output.stdout) {
      Ok(ast) => ast,
      Err(e) => return Ok(FileAst::Malformed(e.to_string().into_boxed_str())),
    };
    if let Err(e) = fix_floats(grammar, &Ty::Node, &mut ast) {
      return Ok(FileAst::Malformed(e.to_string().into_boxed_str()));
    }
    Ok(FileAst::Parsed(ast))
  }
}
