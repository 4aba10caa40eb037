// Encoder seam
// 编码器接口

use std::io::Write;

use astpack_dict::Dict;
use astpack_grammar::{Grammar, Ty};
use hexlog::Logger;
use serde_json::Value;

use crate::Result;

/// AST-to-binary encoder conditioned on a dictionary. Implementations write
/// through the logger sink and must not mutate the dictionary.
/// 以字典为条件的 AST 二进制编码器。实现通过日志器输出写入，不得修改字典。
pub trait AstEncode {
  /// Encoder name / 编码器名称
  fn name(&self) -> &str;

  fn encode<W: Write>(
    &self,
    grammar: &Grammar,
    dict: &Dict,
    ty: &Ty,
    value: &Value,
    out: &Logger<W>,
  ) -> Result<()>;
}
