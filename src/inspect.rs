use {
    anyhow::{Context as _, Result},
    image::{io::Reader, GenericImageView},
    std::{collections::BTreeSet, fmt, path::Path},
};


/// `Summary` は画像ファイルの大きさと使われている色の一覧を表す.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub width: u32,
    pub height: u32,
    pub colors: BTreeSet<[u8; 3]>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} {} colors",
            self.width,
            self.height,
            self.colors.len()
        )
    }
}

/// 画像ファイルを形式を推測して読み込み, `Summary` を作る.
pub fn inspect(path: &Path) -> Result<Summary> {
    let img = Reader::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("failed to read {}", path.display()))?
        .decode()
        .with_context(|| format!("failed to decode {}", path.display()))?;

    let (width, height) = img.dimensions();
    let colors = img.to_rgb8().pixels().map(|p| p.0).collect();

    Ok(Summary {
        width,
        height,
        colors,
    })
}
