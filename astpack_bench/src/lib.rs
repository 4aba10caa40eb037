#![cfg_attr(docsrs, feature(doc_cfg))]

// AST dictionary-encoding benchmark library
// AST 字典编码评测库
//
// Samples a corpus into dictionary-source and evaluation halves, builds a
// string dictionary from the first, then measures dictionary-conditioned
// encoding of the second against a general-purpose compression baseline.
// 将语料采样为字典源与评测两半，用前者构建字符串字典，再以通用压缩基线
// 衡量后者的字典条件编码。

mod adapter;
mod compress;
mod encode;
mod error;
mod parse;
mod runner;
mod sample;
mod stats;

pub use adapter::{brotli::BrotliCli, dict_ref::DictRefEncoder};
pub use compress::Compress;
pub use encode::AstEncode;
pub use error::{Error, Result};
pub use parse::{AstParser, FileAst};
pub use runner::{FileRecord, Outcome, Role, RunConf, RunReport, Runner};
pub use sample::{Partition, partition, walk_corpus};
pub use stats::{SizeStats, ratio};
