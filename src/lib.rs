#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod emit;
pub mod palette;
pub mod pixmap;

#[doc(inline)]
pub use crate::emit::{emit, EmitConfig, OutputMode, BASE_ADDR};

#[doc(inline)]
pub use crate::palette::{map_color, Rgb, BACKGROUND, PALETTE};

#[doc(inline)]
pub use crate::pixmap::{PixelGrid, MAX_DIMENSION};
