// astpack_bench CLI
// astpack_bench 命令行

use std::path::PathBuf;

use astpack_bench::{AstParser, BrotliCli, DictRefEncoder, Result, RunConf, Runner};
use astpack_grammar::Grammar;
use clap::Parser;
use log::error;

/// Measure dictionary-based AST encoding against a raw-text baseline
/// 对比字典式 AST 编码与原始文本压缩基线
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
  /// Directories to sample/encode / 采样与编码的目录
  #[arg(long = "dir", required = true, num_args = 1..)]
  dir: Vec<PathBuf>,

  /// Seed value / 种子
  #[arg(long, default_value_t = 0)]
  seed: u64,

  /// Sample probability / 采样概率
  #[arg(long, default_value_t = 0.2, value_parser = probability)]
  sample: f64,

  /// Path to the external parser / 外部解析器路径
  #[arg(long)]
  parser: PathBuf,

  /// Grammar description file / 语法描述文件
  #[arg(long)]
  grammar: PathBuf,

  /// Show full diagnostics for skipped files / 显示被跳过文件的完整诊断
  #[arg(long)]
  errors: bool,

  /// Compress the encoded output before measuring / 测量前压缩编码输出
  #[arg(long)]
  recompress: bool,

  /// Write the dictionary stream to this path / 字典流写入路径
  #[arg(long)]
  dict_out: Option<PathBuf>,

  /// Render the encoder byte transcript / 渲染编码器字节转录
  #[arg(long)]
  trace: bool,
}

fn probability(s: &str) -> std::result::Result<f64, String> {
  let p: f64 = s.parse().map_err(|e| format!("{e}"))?;
  if (0.0..=1.0).contains(&p) {
    Ok(p)
  } else {
    Err(format!("{p} not in [0, 1]"))
  }
}

fn run(args: Args) -> Result<()> {
  let grammar = Grammar::load(&args.grammar)?;
  let mut conf = RunConf::new(args.dir)
    .seed(args.seed)
    .sample(args.sample)
    .show_errors(args.errors)
    .recompress(args.recompress)
    .trace(args.trace);
  if let Some(path) = args.dict_out {
    conf = conf.dict_out(path);
  }

  let runner = Runner::new(
    &grammar,
    AstParser::new(args.parser),
    DictRefEncoder,
    BrotliCli::default(),
    conf,
  );
  let report = runner.run()?;
  println!("global ratio: {:.6}", report.stats.ratio());
  Ok(())
}

fn main() {
  log_init::init();
  let args = Args::parse();
  if let Err(e) = run(args) {
    error!("{e}");
    std::process::exit(1);
  }
}
