use std::path::PathBuf;

use anyhow::{bail, ensure, Context as _, Result};

use persian_digits::{basis::OutputFormat, generate, glyph};

/// コマンドライン引数から読み取った設定.
#[derive(Debug, PartialEq)]
struct Options {
    glyphs: Vec<u8>,
    format: OutputFormat,
    out_dir: PathBuf,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options> {
    let mut glyphs = vec![];
    let mut format = OutputFormat::default();
    let mut out_dir = PathBuf::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ppm" => format = OutputFormat::Ppm,
            "--png" => format = OutputFormat::Png,
            "--out" => {
                out_dir = args
                    .next()
                    .context("expected a directory after --out")?
                    .into();
            }
            flag if flag.starts_with('-') => bail!("unknown option {:?}", flag),
            digit => {
                let glyph: u8 = digit
                    .parse()
                    .with_context(|| format!("failed to parse glyph {:?}", digit))?;
                ensure!(glyph::is_declared(glyph), "glyph {} has no shape", glyph);
                glyphs.push(glyph);
            }
        }
    }

    if glyphs.is_empty() {
        glyphs = glyph::DEFAULT_GLYPHS.to_vec();
    }

    Ok(Options {
        glyphs,
        format,
        out_dir,
    })
}

fn main() -> Result<()> {
    let options = parse_args(std::env::args().skip(1))?;
    generate::generate_all(&options.glyphs, options.format, &options.out_dir)?;
    Ok(())
}

#[test]
fn test_parse_args() {
    fn parse(args: &[&str]) -> Result<Options> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    assert_eq!(
        parse(&[]).unwrap(),
        Options {
            glyphs: vec![0, 3, 4, 5, 6, 7, 8, 9],
            format: OutputFormat::Png,
            out_dir: PathBuf::new(),
        }
    );
    assert_eq!(
        parse(&["--ppm", "--out", "assets", "1", "0"]).unwrap(),
        Options {
            glyphs: vec![1, 0],
            format: OutputFormat::Ppm,
            out_dir: "assets".into(),
        }
    );
    assert!(parse(&["2"]).is_err());
    assert!(parse(&["x"]).is_err());
    assert!(parse(&["--out"]).is_err());
    assert!(parse(&["--jpeg"]).is_err());
}
