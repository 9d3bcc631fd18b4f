use std::{env, path::Path};

use anyhow::{ensure, Result};

use persian_digits::inspect::inspect;

fn main() -> Result<()> {
    let paths = env::args().skip(1).collect::<Vec<_>>();
    ensure!(!paths.is_empty(), "at least one image path must be provided");

    for path in &paths {
        let summary = inspect(Path::new(path))?;
        println!("{}: {}", path, summary);

        // the generated assets only have a background and a foreground
        if summary.colors.len() <= 16 {
            for [r, g, b] in &summary.colors {
                println!("    ({}, {}, {})", r, g, b);
            }
        }
    }

    Ok(())
}
