//! ペルシア数字の 64x64 画像を作るためのライブラリ.

pub mod basis;
pub mod bitmap;
pub mod generate;
pub mod glyph;
pub mod inspect;
pub mod png;
