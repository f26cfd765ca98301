use std::fs;

use vlt::core::catalog::{
  Category,
  category_for_extension,
  mime_for_extension,
  read_category,
  sort_items,
};

#[test]
fn read_category_lists_files_and_skips_noise()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let notes = tmp.path().join("notes");
  fs::create_dir_all(notes.join("subdir")).unwrap();
  fs::write(notes.join("alpha.txt"), b"A").unwrap();
  fs::write(notes.join("beta.pdf"), b"BB").unwrap();
  fs::write(notes.join(".hidden.txt"), b"H").unwrap();

  let items = read_category(tmp.path(), Category::Notes, false).unwrap();
  let mut names: Vec<&str> = items.iter().map(|e| e.name.as_str()).collect();
  names.sort();
  assert_eq!(names, vec!["alpha.txt", "beta.pdf"]);

  // hidden files appear when requested
  let items = read_category(tmp.path(), Category::Notes, true).unwrap();
  assert_eq!(items.len(), 3);
}

#[test]
fn missing_category_directory_is_an_empty_listing()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let items = read_category(tmp.path(), Category::Videos, false).unwrap();
  assert!(items.is_empty());
}

#[test]
fn item_fields_are_derived_from_the_file()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let images = tmp.path().join("images");
  fs::create_dir_all(&images).unwrap();
  fs::write(images.join("holiday.png"), vec![0u8; 64]).unwrap();

  let items = read_category(tmp.path(), Category::Images, false).unwrap();
  assert_eq!(items.len(), 1);
  let e = &items[0];
  assert_eq!(e.name, "holiday.png");
  assert_eq!(e.title, "holiday");
  assert_eq!(e.size, 64);
  assert_eq!(e.mime, "image/png");
  assert!(e.shown);
  assert!(e.description.is_none());
}

#[test]
fn extensions_map_to_their_category()
{
  assert_eq!(category_for_extension("pdf"), Some(Category::Notes));
  assert_eq!(category_for_extension("JPG"), Some(Category::Images));
  assert_eq!(category_for_extension("mkv"), Some(Category::Videos));
  assert_eq!(category_for_extension("exe"), None);

  assert!(Category::Notes.allows_extension("docx"));
  assert!(!Category::Notes.allows_extension("png"));
}

#[test]
fn unknown_extensions_fall_back_to_octet_stream()
{
  assert_eq!(mime_for_extension("pdf"), "application/pdf");
  assert_eq!(mime_for_extension("JPEG"), "image/jpeg");
  assert_eq!(mime_for_extension("weird"), "application/octet-stream");
}

#[test]
fn sort_items_orders_by_key()
{
  use vlt::actions::SortKey;
  let tmp = tempfile::tempdir().expect("tmp");
  let notes = tmp.path().join("notes");
  fs::create_dir_all(&notes).unwrap();
  fs::write(notes.join("Zed.txt"), vec![0u8; 10]).unwrap();
  fs::write(notes.join("apple.txt"), vec![0u8; 30]).unwrap();
  fs::write(notes.join("Mango.pdf"), vec![0u8; 20]).unwrap();

  let mut items = read_category(tmp.path(), Category::Notes, false).unwrap();

  sort_items(&mut items, SortKey::Name, false);
  let names: Vec<&str> = items.iter().map(|e| e.title.as_str()).collect();
  assert_eq!(names, vec!["apple", "Mango", "Zed"]);

  sort_items(&mut items, SortKey::Size, false);
  let sizes: Vec<u64> = items.iter().map(|e| e.size).collect();
  assert_eq!(sizes, vec![10, 20, 30]);

  sort_items(&mut items, SortKey::Size, true);
  let sizes: Vec<u64> = items.iter().map(|e| e.size).collect();
  assert_eq!(sizes, vec![30, 20, 10]);

  sort_items(&mut items, SortKey::Type, false);
  let mimes: Vec<&str> = items.iter().map(|e| e.mime).collect();
  assert_eq!(mimes, vec!["application/pdf", "text/plain", "text/plain"]);
}
