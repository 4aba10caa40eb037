#![cfg_attr(docsrs, feature(doc_cfg))]

//! String dictionary for AST compact encoding
//! AST 紧凑编码的字符串字典
//!
//! Collects every string literal from typed AST values into a deduplicated
//! dictionary in ascending byte order, and (de)serializes it as
//! `[signature?][count: vbyte][len_i: vbyte...][utf8 payload...]`.
//! 从带类型的 AST 值收集所有字符串字面量，按字节升序去重构成字典，并以
//! `[签名?][数量: vbyte][长度: vbyte...][utf8 负载...]` 格式（反）序列化。
//!
//! The UTF-8 payload step cannot represent lone surrogate code points;
//! streams built from such strings by other tooling fail validation on read.
//! UTF-8 负载无法表示孤立代理码点；其他工具由此类字符串生成的流在读取时
//! 校验失败。

mod bin;
mod dict;
mod error;

pub use bin::{SIGNATURE, from_bytes, to_bytes};
pub use dict::Dict;
pub use error::{Error, Result};
