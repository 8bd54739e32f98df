//! Conversion infrastructure

mod converter;
mod kind_mapper;

pub use converter::UastConverter;
pub use kind_mapper::{default_mapping_rules, KindMapper};
