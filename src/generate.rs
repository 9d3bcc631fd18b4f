use {
    crate::{
        basis::OutputFormat,
        glyph::{self, rasterize},
    },
    anyhow::{ensure, Context as _, Result},
    std::{
        fs::File,
        io::{BufWriter, Write},
        path::{Path, PathBuf},
    },
};


pub fn file_name(glyph: u8, format: OutputFormat) -> String {
    format!("persian_{}.{}", glyph, format.extension())
}

/// ファイルを書き出したときにコンソールへ出す一行.
pub fn created_message(path: &Path) -> String {
    format!("Created {}", path.display())
}

/// 数字 `glyph` の画像を `dir` に書き出し, そのパスを返す.
pub fn generate(glyph: u8, format: OutputFormat, dir: &Path) -> Result<PathBuf> {
    ensure!(glyph::is_declared(glyph), "glyph {} has no shape", glyph);

    let bitmap = rasterize(glyph);
    let path = dir.join(file_name(glyph, format));

    let file =
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    match format {
        OutputFormat::Png => bitmap.write_png(&mut writer),
        OutputFormat::Ppm => bitmap.write_ppm(&mut writer),
    }
    .and_then(|()| writer.flush())
    .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(path)
}

/// `glyphs` を順に書き出す. 最初に失敗したところで止まる.
pub fn generate_all(glyphs: &[u8], format: OutputFormat, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut created = Vec::with_capacity(glyphs.len());
    for &glyph in glyphs {
        let path = generate(glyph, format, dir)?;
        println!("{}", created_message(&path));
        created.push(path);
    }
    Ok(created)
}
