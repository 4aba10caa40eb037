// Type-directed AST traversal
// 类型导向的 AST 遍历

use serde_json::Value;

use crate::{Error, Grammar, Prim, TYPE_TAG, Ty};

static NULL: Value = Value::Null;

/// Leaf hook for [`walk`]; structural recursion is the walker's job.
/// [`walk`] 的叶子钩子；结构递归由遍历器完成。
pub trait Visitor {
  fn visit_prim(&mut self, prim: Prim, value: &Value) -> crate::Result<()>;
}

/// Short value kind for shape diagnostics / 形状诊断用的值类别
pub(crate) fn kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "bool",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

/// Walk `value` as declared by `ty`, dispatching on the shape category and
/// resolving node objects through the grammar table by their type tag.
/// Missing fields are treated as null so optional shapes absorb them.
/// 按 `ty` 声明遍历 `value`，按形状类别分派，节点对象依其类型标签经语法表
/// 解析。缺失字段按 null 处理，可选形状会吸收它们。
pub fn walk<V: Visitor>(
  grammar: &Grammar,
  ty: &Ty,
  value: &Value,
  visitor: &mut V,
) -> crate::Result<()> {
  match ty {
    Ty::Prim(prim) => visitor.visit_prim(*prim, value),
    Ty::Opt(inner) => {
      if value.is_null() {
        Ok(())
      } else {
        walk(grammar, inner, value, visitor)
      }
    }
    Ty::Seq(inner) => {
      let items = value.as_array().ok_or(Error::Shape {
        expect: "array",
        found: kind(value),
      })?;
      for item in items {
        walk(grammar, inner, item, visitor)?;
      }
      Ok(())
    }
    Ty::Node => {
      let obj = value.as_object().ok_or(Error::Shape {
        expect: "node object",
        found: kind(value),
      })?;
      let tag = obj
        .get(TYPE_TAG)
        .and_then(Value::as_str)
        .ok_or(Error::MissingTag)?;
      let iface = grammar.iface(tag)?;
      for field in &iface.fields {
        let field_value = obj.get(field.name.as_ref()).unwrap_or(&NULL);
        walk(grammar, &field.ty, field_value, visitor)?;
      }
      Ok(())
    }
  }
}
