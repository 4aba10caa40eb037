use aok::{OK, Void};
use astpack_dict::{Dict, Error, SIGNATURE, from_bytes, to_bytes};
use astpack_grammar::{Grammar, Ty};
use log::info;
use serde_json::{Value, json};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

fn grammar() -> Grammar {
  Grammar::from_json(
    r#"{
      "interfaces": {
        "list": {
          "fields": [
            { "name": "items", "ty": { "seq": "node" } }
          ]
        },
        "lit": {
          "fields": [
            { "name": "value", "ty": { "prim": "str" } }
          ]
        }
      }
    }"#,
  )
  .unwrap()
}

fn list(values: &[&str]) -> Value {
  let items: Vec<Value> = values
    .iter()
    .map(|v| json!({ "type": "lit", "value": v }))
    .collect();
  json!({ "type": "list", "items": items })
}

fn build(grammar: &Grammar, asts: &[Value]) -> Dict {
  let root = Ty::Node;
  Dict::build(grammar, asts.iter().map(|v| (&root, v))).unwrap()
}

#[test]
fn test_build_sorted_dedup() -> Void {
  let g = grammar();
  let dict = build(&g, &[list(&["b", "a", "a", "b"])]);
  let strings: Vec<&str> = dict.iter().collect();
  assert_eq!(strings, ["a", "b"]);
  assert_eq!(dict.len(), 2);
  assert_eq!(dict.get(0), Some("a"));
  assert_eq!(dict.index_of("b"), Some(1));
  assert_eq!(dict.index_of("c"), None);
  OK
}

/// Invariant to repeats, input count and traversal order
/// 与重复、输入数量和遍历顺序无关
#[test]
fn test_build_determinism() -> Void {
  let g = grammar();
  let base = build(&g, &[list(&["a", "b"])]);
  assert_eq!(base, build(&g, &[list(&["a", "a", "b"])]));
  assert_eq!(base, build(&g, &[list(&["b", "a"])]));
  assert_eq!(base, build(&g, &[list(&["b"]), list(&["a"])]));
  OK
}

/// count = 2 encodes as the single byte 0x04, then two length-prefixed
/// payloads in dictionary order
/// count = 2 编码为单字节 0x04，之后按字典顺序的两个带长度前缀负载
#[test]
fn test_scenario_two_strings() -> Void {
  let g = grammar();
  let dict = build(&g, &[list(&["b", "a", "a"])]);
  let bytes = to_bytes(&dict, false);
  assert_eq!(bytes, [0x04, 0x02, 0x02, b'a', b'b']);

  let back = from_bytes(&bytes, false)?;
  let strings: Vec<&str> = back.iter().collect();
  assert_eq!(strings, ["a", "b"]);
  OK
}

#[test]
fn test_scenario_empty_signed() -> Void {
  let dict = Dict::default();
  let bytes = to_bytes(&dict, true);
  let mut expect = SIGNATURE.to_vec();
  expect.push(0x00);
  assert_eq!(bytes, expect);

  let back = from_bytes(&bytes, true)?;
  assert!(back.is_empty());
  OK
}

#[test]
fn test_roundtrip() -> Void {
  let g = grammar();
  let dict = build(&g, &[list(&["", "你好", "hello", "naïve", "z"])]);
  for with_signature in [false, true] {
    let bytes = to_bytes(&dict, with_signature);
    let back = from_bytes(&bytes, with_signature)?;
    assert_eq!(dict, back);
  }
  info!("> roundtrip ok");
  OK
}

#[test]
fn test_signature_mismatch() -> Void {
  let dict = Dict::default();
  let mut bytes = to_bytes(&dict, true);
  bytes[0] = b'x';
  assert!(matches!(
    from_bytes(&bytes, true).unwrap_err(),
    Error::Signature(_)
  ));
  // reading an unsigned stream as signed also fails
  // 将无签名流按有签名读取同样失败
  assert!(from_bytes(&[0x00], true).is_err());
  OK
}

#[test]
fn test_truncated() -> Void {
  // count says 10 entries, stream ends
  // 数量声明 10 个条目，流到此为止
  assert!(matches!(
    from_bytes(&[0x14], false).unwrap_err(),
    Error::Truncated
  ));
  // length table present, payload missing
  // 有长度表，缺负载
  assert!(matches!(
    from_bytes(&[0x02, 0x06, b'a'], false).unwrap_err(),
    Error::Truncated
  ));
  // unterminated count varint
  // 未终止的数量 varint
  assert!(matches!(
    from_bytes(&[0x01], false).unwrap_err(),
    Error::Vbyte(vbyte::Error::Truncated)
  ));
  OK
}

#[test]
fn test_invalid_utf8() -> Void {
  // one string of length 1 whose payload is not UTF-8
  // 一个长度为 1 的字符串，负载不是 UTF-8
  let bytes = [0x02, 0x02, 0xFF];
  assert!(matches!(
    from_bytes(&bytes, false).unwrap_err(),
    Error::Utf8(_)
  ));
  OK
}
