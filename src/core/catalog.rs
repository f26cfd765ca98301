//! Vault catalog: reading category directories into rows.
//!
//! A vault is a plain directory with `notes/`, `images/` and `videos/`
//! subdirectories. Each file inside a category directory becomes a
//! [`VaultItem`]; a missing category directory is an empty listing, not an
//! error.

use std::{
  io,
  path::{
    Path,
    PathBuf,
  },
  time::SystemTime,
};

use crate::actions::SortKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category
{
  Notes,
  Images,
  Videos,
}

impl Category
{
  pub const ALL: [Category; 3] =
    [Category::Notes, Category::Images, Category::Videos];

  pub fn dir_name(self) -> &'static str
  {
    match self
    {
      Category::Notes => "notes",
      Category::Images => "images",
      Category::Videos => "videos",
    }
  }

  pub fn title(self) -> &'static str
  {
    match self
    {
      Category::Notes => "Notes",
      Category::Images => "Images",
      Category::Videos => "Videos",
    }
  }

  pub fn index(self) -> usize
  {
    match self
    {
      Category::Notes => 0,
      Category::Images => 1,
      Category::Videos => 2,
    }
  }

  pub fn next(self) -> Category
  {
    match self
    {
      Category::Notes => Category::Images,
      Category::Images => Category::Videos,
      Category::Videos => Category::Notes,
    }
  }

  /// Allowed file extensions (lowercase, without dot).
  pub fn extensions(self) -> &'static [&'static str]
  {
    match self
    {
      Category::Notes =>
      {
        &["pdf", "txt", "doc", "docx", "ppt", "pptx", "xls", "xlsx", "odt",
          "ods", "odp"]
      }
      Category::Images =>
      {
        &["png", "jpg", "jpeg", "webp", "svg", "gif", "bmp", "tiff"]
      }
      Category::Videos =>
      {
        &["mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "mpeg", "mpg"]
      }
    }
  }

  pub fn allows_extension(
    self,
    ext: &str,
  ) -> bool
  {
    let low = ext.to_ascii_lowercase();
    self.extensions().contains(&low.as_str())
  }
}

/// Category owning an extension, if any.
pub fn category_for_extension(ext: &str) -> Option<Category>
{
  Category::ALL.iter().copied().find(|c| c.allows_extension(ext))
}

/// MIME type by extension; unknown extensions fall back to octet-stream.
pub fn mime_for_extension(ext: &str) -> &'static str
{
  match ext.to_ascii_lowercase().as_str()
  {
    "pdf" => "application/pdf",
    "txt" => "text/plain",
    "doc" => "application/msword",
    "docx" =>
    {
      "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    }
    "ppt" => "application/vnd.ms-powerpoint",
    "pptx" =>
    {
      "application/vnd.openxmlformats-officedocument.presentationml.presentation"
    }
    "xls" => "application/vnd.ms-excel",
    "xlsx" =>
    {
      "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    }
    "odt" => "application/vnd.oasis.opendocument.text",
    "ods" => "application/vnd.oasis.opendocument.spreadsheet",
    "odp" => "application/vnd.oasis.opendocument.presentation",
    "jpg" | "jpeg" => "image/jpeg",
    "png" => "image/png",
    "gif" => "image/gif",
    "webp" => "image/webp",
    "svg" => "image/svg+xml",
    "bmp" => "image/bmp",
    "tiff" => "image/tiff",
    "mp4" => "video/mp4",
    "mkv" => "video/x-matroska",
    "avi" => "video/x-msvideo",
    "mov" => "video/quicktime",
    "wmv" => "video/x-ms-wmv",
    "flv" => "video/x-flv",
    "webm" => "video/webm",
    "mpeg" | "mpg" => "video/mpeg",
    _ => "application/octet-stream",
  }
}

#[derive(Debug, Clone)]
/// One displayable record in a category listing.
pub struct VaultItem
{
  pub name:        String,
  pub path:        PathBuf,
  pub category:    Category,
  pub title:       String,
  pub description: Option<String>,
  pub size:        u64,
  pub mtime:       Option<SystemTime>,
  pub ctime:       Option<SystemTime>,
  pub mime:        &'static str,
  pub shown:       bool,
}

impl crate::core::filter::SearchRow for VaultItem
{
  fn search_text(&self) -> String
  {
    let mut text = String::new();
    text.push_str(&self.title);
    text.push(' ');
    if let Some(ref desc) = self.description
    {
      text.push_str(desc);
      text.push(' ');
    }
    text.push_str(&self.name);
    text
  }

  fn is_shown(&self) -> bool
  {
    self.shown
  }

  fn set_shown(
    &mut self,
    shown: bool,
  )
  {
    self.shown = shown;
  }
}

/// Read one category directory of the vault into items.
///
/// Dotfiles are skipped unless `show_hidden`; subdirectories are ignored. A
/// missing category directory yields an empty list.
pub fn read_category(
  vault_root: &Path,
  category: Category,
  show_hidden: bool,
) -> io::Result<Vec<VaultItem>>
{
  use std::fs;
  let dir = vault_root.join(category.dir_name());
  let read_dir = match fs::read_dir(&dir)
  {
    Ok(rd) => rd,
    Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
    Err(e) => return Err(e),
  };

  let items: Vec<VaultItem> = read_dir
    .filter_map(|res| res.ok())
    .filter_map(|e| {
      let path = e.path();
      let name = e.file_name().to_string_lossy().to_string();
      if !show_hidden && name.starts_with('.')
      {
        return None;
      }
      match e.file_type()
      {
        Ok(ft) if ft.is_file() =>
        {
          let meta = fs::metadata(&path).ok();
          let size = meta.as_ref().map(|m| m.len()).unwrap_or(0);
          let mtime = meta.as_ref().and_then(|m| m.modified().ok());
          let ctime = meta.as_ref().and_then(|m| m.created().ok());
          let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();
          let title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| name.clone());
          Some(VaultItem {
            name,
            path,
            category,
            title,
            description: None,
            size,
            mtime,
            ctime,
            mime: mime_for_extension(&ext),
            shown: true,
          })
        }
        _ => None,
      }
    })
    .collect();

  Ok(items)
}

/// Sort items in place by the given key. Sorting never touches visibility.
pub fn sort_items(
  items: &mut [VaultItem],
  sort_key: SortKey,
  sort_reverse: bool,
)
{
  items.sort_by(|a, b| {
    let ord = match sort_key
    {
      SortKey::Name => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
      SortKey::Size => a.size.cmp(&b.size),
      SortKey::Type => a.mime.cmp(b.mime),
      SortKey::Date =>
      {
        let at = a.ctime.unwrap_or(SystemTime::UNIX_EPOCH);
        let bt = b.ctime.unwrap_or(SystemTime::UNIX_EPOCH);
        at.cmp(&bt)
      }
    };
    if sort_reverse { ord.reverse() } else { ord }
  });
}
