// Dictionary entity and builder
// 字典实体与构建器

use std::collections::BTreeSet;

use astpack_grammar::{Grammar, Prim, Ty, Visitor, walk};
use serde_json::Value;

use crate::Result;

/// Immutable ordered set of unique strings, ascending byte-wise lexicographic
/// order of the UTF-8 encoding. Built once per run, never mutated after.
/// 不可变的唯一字符串有序集合，按 UTF-8 编码字节升序排列。每次运行构建一次，
/// 之后不再修改。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dict {
  strings: Vec<Box<str>>,
}

/// Collects string-typed leaves; dedup and order fall out of the set.
/// 收集字符串类型叶子；去重与排序由集合承担。
#[derive(Default)]
struct Collect {
  strings: BTreeSet<Box<str>>,
}

impl Visitor for Collect {
  fn visit_prim(&mut self, prim: Prim, value: &Value) -> astpack_grammar::Result<()> {
    if prim == Prim::Str {
      if let Some(s) = value.as_str() {
        if !self.strings.contains(s) {
          self.strings.insert(s.into());
        }
      }
    }
    Ok(())
  }
}

impl Dict {
  /// Build from typed AST values. The result depends only on the set of
  /// distinct string leaf values: invariant to traversal order, input count
  /// and repeats.
  /// 从带类型的 AST 值构建。结果只取决于不同字符串叶子值的集合：与遍历
  /// 顺序、输入数量和重复无关。
  pub fn build<'a, I>(grammar: &Grammar, sources: I) -> Result<Self>
  where
    I: IntoIterator<Item = (&'a Ty, &'a Value)>,
  {
    let mut collect = Collect::default();
    for (ty, value) in sources {
      walk(grammar, ty, value, &mut collect)?;
    }
    Ok(Self {
      strings: collect.strings.into_iter().collect(),
    })
  }

  /// Strings already in serialized order; used by the reader.
  /// 已按序列化顺序排列的字符串；供读取器使用。
  pub(crate) fn from_sorted(strings: Vec<Box<str>>) -> Self {
    Self { strings }
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.strings.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.strings.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.strings.iter().map(AsRef::as_ref)
  }

  #[inline]
  pub fn get(&self, index: usize) -> Option<&str> {
    self.strings.get(index).map(AsRef::as_ref)
  }

  /// Position of `s`, by binary search over the sorted entries.
  /// `s` 的位置，对有序条目二分查找。
  pub fn index_of(&self, s: &str) -> Option<usize> {
    self.strings.binary_search_by(|e| (**e).cmp(s)).ok()
  }
}
