use aok::{OK, Void};
use astpack_grammar::{Error, Grammar, Prim, Ty, Visitor, fix_floats, walk};
use log::info;
use serde_json::{Value, json};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

/// Expression grammar: literals under a script node
/// 表达式语法：脚本节点下的字面量
fn grammar() -> Grammar {
  Grammar::from_json(
    r#"{
      "interfaces": {
        "script": {
          "fields": [
            { "name": "body", "ty": { "seq": "node" } }
          ]
        },
        "lit_str": {
          "fields": [
            { "name": "value", "ty": { "prim": "str" } }
          ]
        },
        "lit_num": {
          "fields": [
            { "name": "value", "ty": { "prim": "float" } },
            { "name": "label", "ty": { "opt": { "prim": "str" } } }
          ]
        }
      }
    }"#,
  )
  .unwrap()
}

#[derive(Default)]
struct Leaves {
  strings: Vec<String>,
  numbers: Vec<f64>,
}

impl Visitor for Leaves {
  fn visit_prim(&mut self, prim: Prim, value: &Value) -> astpack_grammar::Result<()> {
    match prim {
      Prim::Str => {
        if let Some(s) = value.as_str() {
          self.strings.push(s.to_string());
        }
      }
      Prim::Float => {
        if let Some(n) = value.as_f64() {
          self.numbers.push(n);
        }
      }
      _ => {}
    }
    Ok(())
  }
}

fn script() -> Value {
  json!({
    "type": "script",
    "body": [
      { "type": "lit_str", "value": "hello" },
      { "type": "lit_num", "value": 3, "label": "three" },
      { "type": "lit_num", "value": 2.5, "label": null },
    ]
  })
}

/// Dispatch covers sequences, optionals and tag-resolved nodes
/// 分派覆盖序列、可选与按标签解析的节点
#[test]
fn test_walk_collects_leaves() -> Void {
  let g = grammar();
  let ast = script();
  let mut leaves = Leaves::default();
  walk(&g, &Ty::Node, &ast, &mut leaves)?;
  assert_eq!(leaves.strings, ["hello", "three"]);
  assert_eq!(leaves.numbers, [3.0, 2.5]);
  OK
}

#[test]
fn test_unknown_type() -> Void {
  let g = grammar();
  let ast = json!({ "type": "mystery" });
  let mut leaves = Leaves::default();
  let err = walk(&g, &Ty::Node, &ast, &mut leaves).unwrap_err();
  assert!(matches!(err, Error::UnknownType(name) if &*name == "mystery"));
  OK
}

#[test]
fn test_missing_tag() -> Void {
  let g = grammar();
  let ast = json!({ "value": 1 });
  let mut leaves = Leaves::default();
  assert!(matches!(
    walk(&g, &Ty::Node, &ast, &mut leaves).unwrap_err(),
    Error::MissingTag
  ));
  OK
}

#[test]
fn test_shape_mismatch() -> Void {
  let g = grammar();
  // body must be an array
  // body 必须是数组
  let ast = json!({ "type": "script", "body": { "type": "lit_str", "value": "x" } });
  let mut leaves = Leaves::default();
  let err = walk(&g, &Ty::Node, &ast, &mut leaves).unwrap_err();
  info!("> shape error: {err}");
  assert!(matches!(err, Error::Shape { expect: "array", .. }));
  OK
}

/// Integer literals in float positions are rewritten, nothing else moves
/// 浮点位置的整数字面量被改写，其余不动
#[test]
fn test_fix_floats() -> Void {
  let g = grammar();
  let mut ast = script();
  fix_floats(&g, &Ty::Node, &mut ast)?;

  let body = ast["body"].as_array().unwrap();
  assert!(body[1]["value"].is_f64());
  assert_eq!(body[1]["value"].as_f64(), Some(3.0));
  // label is a string leaf on the same node, untouched
  // 同节点上的字符串叶子不受影响
  assert_eq!(body[1]["label"].as_str(), Some("three"));
  assert_eq!(body[2]["value"].as_f64(), Some(2.5));
  // strings stay strings even when numeric-looking
  // 字符串保持字符串
  assert_eq!(body[0]["value"].as_str(), Some("hello"));
  OK
}

#[test]
fn test_fix_floats_large_u64() -> Void {
  let g = grammar();
  let mut ast = json!({ "type": "lit_num", "value": u64::MAX, "label": null });
  fix_floats(&g, &Ty::Node, &mut ast)?;
  assert!(ast["value"].is_f64());
  OK
}

/// Grammar descriptions round-trip through serde
/// 语法描述经 serde 往返
#[test]
fn test_grammar_serde_roundtrip() -> Void {
  let g = grammar();
  let text = serde_json::to_string(&g).unwrap();
  let back = Grammar::from_json(&text)?;
  assert_eq!(g, back);
  OK
}
