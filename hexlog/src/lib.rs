#![cfg_attr(docsrs, feature(doc_cfg))]

//! Nested hex byte transcript for debugging binary encoders
//! 调试二进制编码器的嵌套十六进制字节转录
//!
//! A [`Logger`] is a handle onto a scope tree. The root scope owns the real
//! output sink, a transcript sink, a pending-comment buffer and a byte column
//! counter; a child scope holds only its parent and forwards every operation
//! to the root. State is never duplicated across the tree.
//! [`Logger`] 是作用域树上的句柄。根作用域拥有真实输出、转录输出、待定注释
//! 缓冲与字节列计数；子作用域仅持有父节点并将所有操作转发到根。状态绝不在
//! 树中重复。
//!
//! Disabling silences only the rendered transcript; [`Logger::write`] always
//! reaches the real sink.
//! 停用仅静默转录渲染；[`Logger::write`] 始终写入真实输出。

use std::{
  cell::RefCell,
  io::{self, Write},
  rc::Rc,
};

/// Wrap once more than 8 byte-groups (3 columns each) sit on a line.
/// 当一行超过 8 个字节组（每组 3 列）时换行。
const WRAP_COLS: usize = 3 * 8;

/// Comments are right-aligned past this column.
/// 注释右对齐到此列之后。
const COMMENT_COL: usize = 32;

struct Root<W> {
  out: W,
  transcript: Box<dyn Write>,
  pending: Vec<String>,
  count: usize,
  enabled: bool,
}

impl<W> Root<W> {
  fn pad(&self) -> String {
    " ".repeat(COMMENT_COL.saturating_sub(self.count))
  }

  fn flush(&mut self) -> io::Result<()> {
    if !self.enabled {
      return Ok(());
    }
    if self.pending.is_empty() && self.count > 0 {
      writeln!(self.transcript)?;
    }
    let pending = std::mem::take(&mut self.pending);
    for comment in &pending {
      let pad = self.pad();
      writeln!(self.transcript, "{pad} {comment}")?;
      self.count = 0;
    }
    Ok(())
  }

  fn comment(&mut self, text: &str) -> io::Result<()> {
    if !self.enabled {
      return Ok(());
    }
    if self.count != 0 && !self.pending.is_empty() {
      self.flush()?;
    }
    self.pending.push(format!("# {text}"));
    Ok(())
  }

  fn comment_immediate(&mut self, text: &str) -> io::Result<()> {
    if !self.enabled {
      return Ok(());
    }
    self.flush()?;
    self.pending.push(format!("% {text}"));
    self.flush()
  }

  fn print_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
    if !self.enabled {
      return Ok(());
    }
    for &byte in bytes {
      if self.count > WRAP_COLS {
        let pad = self.pad();
        writeln!(self.transcript, "{pad} \\")?;
        self.count = 0;
      }
      write!(self.transcript, "{byte:02x} ")?;
      self.count += 3;
    }
    Ok(())
  }
}

enum Node<W> {
  Root(RefCell<Root<W>>),
  Child(Rc<Node<W>>),
}

/// Handle onto a transcript scope tree. Clones share the same root.
/// 转录作用域树的句柄。克隆共享同一个根。
pub struct Logger<W>(Rc<Node<W>>);

impl<W> Clone for Logger<W> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<W: Write> Logger<W> {
  /// Root scope rendering its transcript to stdout.
  /// 根作用域，转录渲染到标准输出。
  pub fn new(out: W) -> Self {
    Self::with_transcript(out, Box::new(io::stdout()))
  }

  /// Root scope with an explicit transcript sink.
  /// 指定转录输出的根作用域。
  pub fn with_transcript(out: W, transcript: Box<dyn Write>) -> Self {
    Self(Rc::new(Node::Root(RefCell::new(Root {
      out,
      transcript,
      pending: Vec::new(),
      count: 0,
      enabled: true,
    }))))
  }

  /// Child scope delegating every operation to this one.
  /// 将所有操作委托给当前作用域的子作用域。
  pub fn child(&self) -> Self {
    Self(Rc::new(Node::Child(self.0.clone())))
  }

  fn root(&self) -> &RefCell<Root<W>> {
    let mut node: &Node<W> = &*self.0;
    loop {
      match node {
        Node::Root(cell) => return cell,
        Node::Child(parent) => node = &**parent,
      }
    }
  }

  pub fn enable(&self) {
    self.root().borrow_mut().enabled = true;
  }

  pub fn disable(&self) {
    self.root().borrow_mut().enabled = false;
  }

  /// Queue a comment for the next flush point.
  /// 将注释排队到下一个刷新点。
  pub fn comment(&self, text: &str) -> io::Result<()> {
    self.root().borrow_mut().comment(text)
  }

  /// Flush, insert the comment, flush again.
  /// 刷新、插入注释、再次刷新。
  pub fn comment_immediate(&self, text: &str) -> io::Result<()> {
    self.root().borrow_mut().comment_immediate(text)
  }

  /// Print pending comments aligned past the byte columns.
  /// 将待定注释对齐打印到字节列之后。
  pub fn flush(&self) -> io::Result<()> {
    self.root().borrow_mut().flush()
  }

  /// Render bytes as hex pairs, wrapping at the column budget.
  /// 按十六进制对渲染字节，超出列预算即换行。
  pub fn print_bytes(&self, bytes: &[u8]) -> io::Result<()> {
    self.root().borrow_mut().print_bytes(bytes)
  }

  /// Mirror `bytes` into the transcript, then write them to the real sink.
  /// The real write happens regardless of the enabled state.
  /// 将 `bytes` 镜像到转录，再写入真实输出。真实写入不受启用状态影响。
  pub fn write(&self, bytes: &[u8]) -> io::Result<()> {
    let mut root = self.root().borrow_mut();
    root.print_bytes(bytes)?;
    root.out.write_all(bytes)
  }

  /// Recover the sink from a root with no other handles outstanding.
  /// 当根没有其他句柄时取回输出。
  pub fn into_inner(self) -> Option<W> {
    match Rc::try_unwrap(self.0) {
      Ok(Node::Root(cell)) => Some(cell.into_inner().out),
      _ => None,
    }
  }
}
