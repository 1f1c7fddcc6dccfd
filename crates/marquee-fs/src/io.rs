use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Escribe `contents` en `path` sin dejar nunca un fichero a medias:
/// primero a un temporal hermano, luego `rename`.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn replaces_content_and_leaves_no_temp_file() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("marquee.toml");

    atomic_write_str(&path, "a = 1\n").unwrap();
    atomic_write_str(&path, "a = 2\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a = 2\n");
    assert!(!path.with_extension("tmp").exists());
  }
}
