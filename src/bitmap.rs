use {
    crate::{basis::Color, png},
    anyhow::{bail, ensure, Context as _, Result},
    std::io::{self, Read, Write},
};

#[cfg(test)]
mod tests;

/// `Bitmap` は行ごとに並べた RGB ピクセルの画像を表す.
///
/// `data` の長さは `height` で, 各行の長さは `width` になる.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<Vec<Color>>,
}

impl Bitmap {
    /// 各座標 `(x, y)` の色を `f` で決めて画像を作る.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Color) -> Self {
        let data = (0..height)
            .map(|y| (0..width).map(|x| f(x, y)).collect())
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.data[y as usize][x as usize]
    }

    /// 行ごとの RGB バイト列を作る. 各行は `width * 3` バイトになる.
    pub fn scanlines(&self) -> Vec<Vec<u8>> {
        self.data
            .iter()
            .map(|row| row.iter().flat_map(|c| c.to_bytes()).collect())
            .collect()
    }

    pub fn to_png(&self) -> Vec<u8> {
        png::encode(self.width, self.height, &self.scanlines())
    }

    // http://netpbm.sourceforge.net/doc/ppm.html
    pub fn to_ppm(&self) -> Vec<u8> {
        let mut bytes = format!("P6\n{} {}\n255\n", self.width, self.height).into_bytes();
        bytes.reserve(self.width as usize * self.height as usize * 3);
        for row in &self.data {
            bytes.extend(row.iter().flat_map(|c| c.to_bytes()));
        }
        bytes
    }

    pub fn write_ppm(&self, mut writer: impl Write) -> io::Result<()> {
        writer.write_all(&self.to_ppm())
    }

    pub fn write_png(&self, mut writer: impl Write) -> io::Result<()> {
        writer.write_all(&self.to_png())
    }

    pub fn read_ppm(mut data: impl Read) -> Result<Self> {
        let mut bytes = vec![];
        data.read_to_end(&mut bytes)
            .context("failed to read ppm data")?;

        let mut cursor = 0;

        let mut next_token = || {
            // skip whitespaces and comments before the token
            loop {
                match bytes.get(cursor) {
                    Some(b'#') => {
                        while let Some(&byte) = bytes.get(cursor) {
                            cursor += 1;
                            if byte == b'\n' {
                                break;
                            }
                        }
                    }
                    Some(byte) if byte.is_ascii_whitespace() => cursor += 1,
                    _ => break,
                }
            }

            let start = cursor;
            while matches!(bytes.get(cursor), Some(byte) if !byte.is_ascii_whitespace()) {
                cursor += 1;
            }
            let token = String::from_utf8_lossy(&bytes[start..cursor]).into_owned();

            // exactly one whitespace follows each header token
            if cursor < bytes.len() {
                cursor += 1;
            }

            if token.is_empty() {
                None
            } else {
                Some(token)
            }
        };

        // check magic number
        match next_token() {
            Some(m) if m == "P6" => {}
            t => bail!("expected magic number \"P6\", but found {:?}", t),
        };

        let width = parse_header_field(next_token(), "width")?;
        let height = parse_header_field(next_token(), "height")?;
        let max_color_value = parse_header_field(next_token(), "maximum value of color")?;

        ensure!(
            (1..=255).contains(&max_color_value),
            "maximum value of color must be in 1..=255, but found {}",
            max_color_value
        );

        ensure!(
            width > 0 && height > 0,
            "image must not be empty, but found {}x{}",
            width,
            height
        );

        let row_len = (width as usize)
            .checked_mul(3)
            .context("image is too large")?;
        let expected = row_len
            .checked_mul(height as usize)
            .context("image is too large")?;
        let raster = bytes.get(cursor..).unwrap_or_default();
        ensure!(
            raster.len() >= expected,
            "expected {} bytes of pixel data, but found {}",
            expected,
            raster.len()
        );

        let data = (0..height as usize)
            .map(|y| {
                raster[y * row_len..(y + 1) * row_len]
                    .chunks(3)
                    .map(|c| Color {
                        r: c[0],
                        g: c[1],
                        b: c[2],
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            width,
            height,
            data,
        })
    }
}

fn parse_header_field(token: Option<String>, name: &str) -> Result<u32> {
    let token = token.with_context(|| format!("expected {}, but found none", name))?;
    token
        .parse()
        .with_context(|| format!("failed to parse {}: {:?}", name, token))
}
