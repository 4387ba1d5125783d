use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Reemplaza `path` con `contents` sin dejar nunca un archivo a medias.
///
/// Escribe primero en un temporal propio de este proceso
/// (`pledge.toml.<pid>.tmp`) y lo renombra encima. Si algo falla, el
/// temporal se borra y `path` queda como estaba.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let tmp_path = tmp_sibling(path);

  let result = write_synced(&tmp_path, contents).and_then(|()| fs::rename(&tmp_path, path));
  if result.is_err() {
    let _ = fs::remove_file(&tmp_path);
  }

  result
}

fn write_synced(tmp_path: &Path, contents: &str) -> io::Result<()> {
  let mut file = fs::File::create(tmp_path)?;
  file.write_all(contents.as_bytes())?;
  file.sync_all()
}

fn tmp_sibling(path: &Path) -> PathBuf {
  let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
  name.push(format!(".{}.tmp", std::process::id()));
  path.with_file_name(name)
}
