// Grammar descriptor types
// 语法描述类型

use std::{collections::HashMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Tag key naming the interface of a node object in parser output.
/// 解析器输出中节点对象用于标识接口的标签键。
pub const TYPE_TAG: &str = "type";

/// Primitive leaf kinds / 原始叶子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prim {
  Bool,
  Int,
  Float,
  Str,
  Null,
}

/// Declared shape of a field value. Node shapes are not named here; a node
/// object self-describes via its [`TYPE_TAG`] and is resolved through the
/// grammar table, which is what makes tagged variants work.
/// 字段值的声明形状。节点形状不在此命名；节点对象通过 [`TYPE_TAG`]
/// 自描述并经语法表解析，带标签的变体由此支持。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ty {
  Prim(Prim),
  Node,
  Seq(Box<Ty>),
  Opt(Box<Ty>),
}

/// Named interface field / 接口字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
  pub name: Box<str>,
  pub ty: Ty,
}

/// Interface shape: an ordered field list / 接口形状：有序字段表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Iface {
  pub fields: Vec<Field>,
}

/// Table of named interfaces, loaded from a JSON description.
/// 命名接口表，从 JSON 描述加载。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grammar {
  pub interfaces: HashMap<Box<str>, Iface>,
}

impl Grammar {
  pub fn from_json(text: &str) -> Result<Self> {
    Ok(serde_json::from_str(text)?)
  }

  pub fn load(path: &Path) -> Result<Self> {
    Self::from_json(&std::fs::read_to_string(path)?)
  }

  /// Resolve an interface by tag / 按标签解析接口
  pub fn iface(&self, name: &str) -> Result<&Iface> {
    self
      .interfaces
      .get(name)
      .ok_or_else(|| Error::UnknownType(name.into()))
  }
}
