//! 8 ビット RGB (パレット・アルファ・インターレース無し) の最小限の PNG エンコーダ.
//!
//! http://www.libpng.org/pub/png/spec/1.2/PNG-Structures.html

use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};


pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGB: u8 = 2;
const FILTER_NONE: u8 = 0;

/// `width` x `height` の画像を PNG のバイト列にする.
///
/// `scanlines` は上の行から順に並んだ `width * 3` バイトの RGB 列である. 入力の大きさは検証しない.
pub fn encode<R: AsRef<[u8]>>(width: u32, height: u32, scanlines: &[R]) -> Vec<u8> {
    debug_assert_eq!(scanlines.len(), height as usize);

    let mut png = SIGNATURE.to_vec();

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    // bit depth, color type, compression, filter, interlace
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_RGB, 0, 0, 0]);
    write_chunk(&mut png, b"IHDR", &ihdr);

    let mut raw = Vec::with_capacity(scanlines.len() * (width as usize * 3 + 1));
    for line in scanlines {
        let line = line.as_ref();
        debug_assert_eq!(line.len(), width as usize * 3);
        raw.push(FILTER_NONE);
        raw.extend_from_slice(line);
    }
    let compressed = compress_to_vec_zlib(&raw, CompressionLevel::BestCompression as u8);
    write_chunk(&mut png, b"IDAT", &compressed);

    write_chunk(&mut png, b"IEND", &[]);

    png
}

/// 長さ, 種類, データ, CRC の順にチャンクを `out` へ追記する.
fn write_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    out.extend_from_slice(&chunk_crc(kind, data).to_be_bytes());
}

/// チャンクの種類とデータを続けたものの CRC-32.
fn chunk_crc(kind: &[u8], data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(kind);
    hasher.update(data);
    hasher.finalize()
}
