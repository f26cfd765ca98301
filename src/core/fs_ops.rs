use std::{
  io,
  path::{
    Path,
    PathBuf,
  },
};

use super::catalog::Category;

/// Copy `src` into the vault under `category`'s directory.
///
/// Rejects files over `max_upload_bytes`, files whose extension does not
/// belong to the category, and names that already exist in the target
/// directory. Returns the destination path on success.
pub fn import_file(
  src: &Path,
  vault_root: &Path,
  category: Category,
  max_upload_bytes: u64,
) -> io::Result<PathBuf>
{
  let meta = std::fs::metadata(src)?;
  if !meta.is_file()
  {
    return Err(io::Error::other(format!(
      "'{}' is not a regular file",
      src.display()
    )));
  }
  let ext = src.extension().and_then(|s| s.to_str()).unwrap_or("");
  if !category.allows_extension(ext)
  {
    return Err(io::Error::other(format!(
      "file type '.{}' not allowed for {}",
      ext,
      category.dir_name()
    )));
  }
  if meta.len() > max_upload_bytes
  {
    return Err(io::Error::other(format!(
      "file exceeds {} limit",
      crate::ui::format::human_size(max_upload_bytes)
    )));
  }
  let name = src
    .file_name()
    .ok_or_else(|| io::Error::other("source has no file name"))?;
  let dir = vault_root.join(category.dir_name());
  std::fs::create_dir_all(&dir)?;
  let dest = dir.join(name);
  if dest.exists()
  {
    return Err(io::Error::other(format!(
      "'{}' already exists in {}",
      name.to_string_lossy(),
      category.dir_name()
    )));
  }
  std::fs::copy(src, &dest)?;
  Ok(dest)
}

/// Remove a single vault file.
pub fn remove_item(path: &Path) -> io::Result<()>
{
  std::fs::remove_file(path)
}
