//! Dictionary-reference encoder
//! 字典引用编码器
//!
//! Demonstration collaborator for the pipeline: emits a tagged leaf stream
//! where known strings become vbyte dictionary references. Not a full AST
//! wire format.
//! 流水线的演示协作者：输出带标签的叶子流，已知字符串以 vbyte 字典引用
//! 表示。不是完整的 AST 线格式。

use std::io::Write;

use astpack_dict::Dict;
use astpack_grammar::{Grammar, Prim, Ty, Visitor, walk};
use hexlog::Logger;
use serde_json::Value;

use crate::{AstEncode, Result};

const NAME: &str = "dict_ref";

const TAG_NULL: u8 = 0x00;
const TAG_REF: u8 = 0x01;
const TAG_RAW: u8 = 0x02;
const TAG_INT: u8 = 0x03;
const TAG_FLOAT: u8 = 0x04;
const TAG_BOOL: u8 = 0x05;

pub struct DictRefEncoder;

struct Emit<'a, W: Write> {
  dict: &'a Dict,
  out: &'a Logger<W>,
}

impl<W: Write> Visitor for Emit<'_, W> {
  fn visit_prim(&mut self, prim: Prim, value: &Value) -> astpack_grammar::Result<()> {
    match prim {
      Prim::Str => {
        if let Some(s) = value.as_str() {
          match self.dict.index_of(s) {
            Some(index) => {
              self.out.comment(&format!("str ref {index}"))?;
              self.out.write(&[TAG_REF])?;
              self.out.write(&vbyte::encode(index as u64))?;
            }
            None => {
              self.out.comment(&format!("raw str, {} bytes", s.len()))?;
              self.out.write(&[TAG_RAW])?;
              self.out.write(&vbyte::encode(s.len() as u64))?;
              self.out.write(s.as_bytes())?;
            }
          }
        } else {
          self.out.write(&[TAG_NULL])?;
        }
      }
      Prim::Int => {
        if let Some(n) = value.as_i64() {
          // zigzag keeps small negatives short
          // zigzag 让小负数保持短
          let zz = ((n << 1) ^ (n >> 63)) as u64;
          self.out.write(&[TAG_INT])?;
          self.out.write(&vbyte::encode(zz))?;
        } else {
          self.out.write(&[TAG_NULL])?;
        }
      }
      Prim::Float => {
        if let Some(n) = value.as_f64() {
          self.out.write(&[TAG_FLOAT])?;
          self.out.write(&n.to_le_bytes())?;
        } else {
          self.out.write(&[TAG_NULL])?;
        }
      }
      Prim::Bool => {
        if let Some(b) = value.as_bool() {
          self.out.write(&[TAG_BOOL, b as u8])?;
        } else {
          self.out.write(&[TAG_NULL])?;
        }
      }
      Prim::Null => {
        self.out.write(&[TAG_NULL])?;
      }
    }
    Ok(())
  }
}

impl AstEncode for DictRefEncoder {
  fn name(&self) -> &str {
    NAME
  }

  fn encode<W: Write>(
    &self,
    grammar: &Grammar,
    dict: &Dict,
    ty: &Ty,
    value: &Value,
    out: &Logger<W>,
  ) -> Result<()> {
    let mut emit = Emit { dict, out };
    walk(grammar, ty, value, &mut emit)?;
    out.flush()?;
    Ok(())
  }
}
