// Float normalization pass
// 浮点归一化

use serde_json::Value;

use crate::{Error, Grammar, Prim, TYPE_TAG, Ty, walk::kind};

/// Rewrite in place every leaf declared float whose parsed representation is
/// an integer literal. Parsers that dump structure as JSON lose the
/// integer/float distinction for whole-valued floats; the grammar gets it
/// back.
/// 原地改写声明为浮点、但解析表示为整数字面量的叶子。以 JSON 倾印结构的
/// 解析器会在整值浮点上丢失整型/浮点区分，依语法恢复。
pub fn fix_floats(grammar: &Grammar, ty: &Ty, value: &mut Value) -> crate::Result<()> {
  match ty {
    Ty::Prim(Prim::Float) => {
      if let Some(n) = value.as_i64() {
        *value = Value::from(n as f64);
      } else if let Some(n) = value.as_u64() {
        *value = Value::from(n as f64);
      }
      Ok(())
    }
    Ty::Prim(_) => Ok(()),
    Ty::Opt(inner) => {
      if value.is_null() {
        Ok(())
      } else {
        fix_floats(grammar, inner, value)
      }
    }
    Ty::Seq(inner) => {
      let found = kind(value);
      let items = value.as_array_mut().ok_or(Error::Shape {
        expect: "array",
        found,
      })?;
      for item in items {
        fix_floats(grammar, inner, item)?;
      }
      Ok(())
    }
    Ty::Node => {
      let found = kind(value);
      let obj = value.as_object_mut().ok_or(Error::Shape {
        expect: "node object",
        found,
      })?;
      let tag: Box<str> = obj
        .get(TYPE_TAG)
        .and_then(Value::as_str)
        .ok_or(Error::MissingTag)?
        .into();
      let iface = grammar.iface(&tag)?;
      for field in &iface.fields {
        if let Some(field_value) = obj.get_mut(field.name.as_ref()) {
          fix_floats(grammar, &field.ty, field_value)?;
        }
      }
      Ok(())
    }
  }
}
