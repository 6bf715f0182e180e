//! Module boilerplate generator: writes `<module>.cpp` and `<module>.h`
//! skeletons into the current directory, overwriting prior output.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;

mod render;
use render::{render_header, render_source};

#[derive(Parser)]
#[command(name = "template-gen")]
#[command(about = "Generate the module .cpp and .h file templates")]
struct Cmd {
    /// Module name, like i2c or nexus_mgr
    #[arg(short, long)]
    module: String,
    /// What the module is about
    #[arg(short, long)]
    description: String,
    /// Your name as author, displayed on top of the module
    #[arg(short, long)]
    author: String,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let year = Local::now().year();
    let (source_path, header_path) = write_pair(
        Path::new("."),
        &cmd.module,
        &cmd.description,
        &cmd.author,
        year,
    )?;
    println!(
        "wrote {} and {}",
        source_path.display(),
        header_path.display()
    );
    Ok(())
}

/// Render and write the file pair under `dir`. The module name is lowercased
/// for file names and the `#include`; renderers uppercase it where the
/// boilerplate calls for it.
fn write_pair(
    dir: &Path,
    module: &str,
    description: &str,
    author: &str,
    year: i32,
) -> Result<(PathBuf, PathBuf)> {
    let module = module.to_lowercase();
    let source_path = dir.join(format!("{module}.cpp"));
    let header_path = dir.join(format!("{module}.h"));
    fs::write(&source_path, render_source(&module, description, author, year))
        .with_context(|| format!("writing {}", source_path.display()))?;
    fs::write(&header_path, render_header(&module, author, year))
        .with_context(|| format!("writing {}", header_path.display()))?;
    Ok((source_path, header_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_both_files_and_overwrites() {
        let dir = tempdir().unwrap();
        let (cpp, h) = write_pair(dir.path(), "Foo", "bar", "baz", 2026).unwrap();
        assert_eq!(cpp, dir.path().join("foo.cpp"));
        assert_eq!(h, dir.path().join("foo.h"));
        let first = fs::read_to_string(&h).unwrap();
        assert!(first.contains("__FOO_H__"));
        assert!(fs::read_to_string(&cpp).unwrap().contains("#include \"foo.h\""));

        // Second run with identical inputs overwrites byte-identically.
        write_pair(dir.path(), "Foo", "bar", "baz", 2026).unwrap();
        assert_eq!(fs::read_to_string(&h).unwrap(), first);
    }
}
