#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod angles;
pub mod data_gen;
pub mod palette;
pub mod render;
pub mod sector;
pub mod svg;
pub mod test_util;
