use crate::{
    basis::{BACKGROUND, FOREGROUND},
    bitmap::Bitmap,
};


/// 画像の一辺のピクセル数.
pub const SIDE_LENGTH: u32 = 64;

/// 引数無しで実行したときに作る数字.
pub const DEFAULT_GLYPHS: [u8; 8] = [0, 3, 4, 5, 6, 7, 8, 9];

/// 形が定義されている数字.
pub const DECLARED_GLYPHS: [u8; 9] = [0, 1, 3, 4, 5, 6, 7, 8, 9];

const CX: f64 = 32.0;
const CY: f64 = 32.0;

/// 線分からのずれの許容量.
const LINE_TOLERANCE: f64 = 0.1;

/// 輪の太さの半分.
const RING_HALF_WIDTH: f64 = 2.5;

pub fn is_declared(glyph: u8) -> bool {
    DECLARED_GLYPHS.contains(&glyph)
}

/// 数字 `glyph` を描くとき, 座標 `(x, y)` のピクセルが前景になるかを返す.
///
/// 定義されていない数字や画像の外の座標では `false` になる.
pub fn is_pixel_on(glyph: u8, x: u32, y: u32) -> bool {
    if x >= SIDE_LENGTH || y >= SIDE_LENGTH {
        return false;
    }
    let (x, y) = (x as f64, y as f64);

    match glyph {
        // filled dot
        0 => distance(x, y, CX, CY) < 8.0,
        1 => in_range(x, 30.0, 33.0),
        3 => {
            (in_range(y, 18.0, 22.0) || in_range(y, 32.0, 36.0)) && in_range(x, 22.0, 42.0)
                || (in_range(x, 20.0, 24.0) || in_range(x, 40.0, 44.0)) && in_range(y, 20.0, 34.0)
        }
        // "W" like shape drawn as two lines from (32, 20)
        4 => {
            in_diagonal_band(y)
                && (on_line(from_top(y), x, 20.0 - CX) || on_line(from_top(y), x, 44.0 - CX))
        }
        5 => on_ring(x, y, CX, CY, 16.0),
        6 => {
            in_range(y, 18.0, 22.0) && in_range(x, 22.0, 42.0)
                || in_range(x, 20.0, 24.0) && in_range(y, 22.0, 48.0)
        }
        // intended as a "V" but the lines share glyph 4's apex
        7 => {
            in_diagonal_band(y)
                && (on_line(from_top(y), x, 44.0 - CX) || on_line(from_top(y), x, 20.0 - CX))
        }
        // inverted "V" from (32, 44)
        8 => {
            in_diagonal_band(y)
                && (on_line(from_bottom(y), x, 20.0 - CX) || on_line(from_bottom(y), x, 44.0 - CX))
        }
        // circle with a tail
        9 => {
            on_ring(x, y, CX, CY - 5.0, 12.0)
                || in_range(x, 28.0, 32.0) && in_range(y, 18.0, 44.0)
        }
        _ => false,
    }
}

/// 数字 `glyph` の `SIDE_LENGTH` 四方の画像を作る.
pub fn rasterize(glyph: u8) -> Bitmap {
    Bitmap::from_fn(SIDE_LENGTH, SIDE_LENGTH, |x, y| {
        if is_pixel_on(glyph, x, y) {
            FOREGROUND
        } else {
            BACKGROUND
        }
    })
}

fn distance(x: f64, y: f64, cx: f64, cy: f64) -> f64 {
    ((x - cx).powi(2) + (y - cy).powi(2)).sqrt()
}

fn on_ring(x: f64, y: f64, cx: f64, cy: f64, radius: f64) -> bool {
    (distance(x, y, cx, cy) - radius).abs() < RING_HALF_WIDTH
}

fn in_range(v: f64, lo: f64, hi: f64) -> bool {
    lo <= v && v <= hi
}

fn in_diagonal_band(y: f64) -> bool {
    20.0 < y && y < 44.0
}

/// 上端 `y = 20` から下端 `y = 44` へ向かう割合.
fn from_top(y: f64) -> f64 {
    (y - 20.0) / (44.0 - 20.0)
}

/// 下端 `y = 44` から上端 `y = 20` へ向かう割合.
fn from_bottom(y: f64) -> f64 {
    (y - 44.0) / (20.0 - 44.0)
}

/// 中心の列から横に `dx` 進む線分上で, 縦の割合 `t` の位置に `x` があるか.
fn on_line(t: f64, x: f64, dx: f64) -> bool {
    (t - (x - CX) / dx).abs() < LINE_TOLERANCE
}
