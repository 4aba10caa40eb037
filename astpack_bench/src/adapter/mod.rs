// Adapter modules / 适配器模块

pub mod brotli;
pub mod dict_ref;
