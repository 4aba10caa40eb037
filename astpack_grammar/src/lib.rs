#![cfg_attr(docsrs, feature(doc_cfg))]

//! AST grammar descriptors and type-directed traversal
//! AST 语法描述与类型导向遍历
//!
//! The grammar itself comes from outside (a JSON description file); this
//! crate only defines the descriptor types, the polymorphic walk over parsed
//! AST values, and the float normalization pass.
//! 语法本身来自外部（JSON 描述文件）；本 crate 只定义描述类型、对已解析
//! AST 值的多态遍历，以及浮点归一化。

mod error;
mod float;
mod grammar;
mod walk;

pub use error::{Error, Result};
pub use float::fix_floats;
pub use grammar::{Field, Grammar, Iface, Prim, TYPE_TAG, Ty};
pub use walk::{Visitor, walk};
