use std::fs;

use vlt::core::{
  catalog::Category,
  fs_ops::{
    import_file,
    remove_item,
  },
};

const MAX: u64 = 100 * 1024 * 1024;

#[test]
fn import_copies_into_the_category_directory()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let vault = tmp.path().join("vault");
  fs::create_dir_all(&vault).unwrap();
  let src = tmp.path().join("report.pdf");
  fs::write(&src, b"PDF").unwrap();

  let dest = import_file(&src, &vault, Category::Notes, MAX).expect("import");
  assert_eq!(dest, vault.join("notes").join("report.pdf"));
  assert_eq!(fs::read(&dest).unwrap(), b"PDF");
  // source untouched
  assert!(src.exists());
}

#[test]
fn import_rejects_disallowed_extension()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let vault = tmp.path().join("vault");
  fs::create_dir_all(&vault).unwrap();
  let src = tmp.path().join("clip.mp4");
  fs::write(&src, b"VID").unwrap();

  let err = import_file(&src, &vault, Category::Notes, MAX).unwrap_err();
  assert!(err.to_string().contains("not allowed"), "{}", err);
  assert!(!vault.join("notes").join("clip.mp4").exists());

  // same file is fine for the videos category
  import_file(&src, &vault, Category::Videos, MAX).expect("import video");
}

#[test]
fn import_rejects_oversized_files()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let vault = tmp.path().join("vault");
  fs::create_dir_all(&vault).unwrap();
  let src = tmp.path().join("big.txt");
  fs::write(&src, vec![0u8; 2048]).unwrap();

  let err = import_file(&src, &vault, Category::Notes, 1024).unwrap_err();
  assert!(err.to_string().contains("exceeds"), "{}", err);
}

#[test]
fn import_rejects_duplicate_names()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let vault = tmp.path().join("vault");
  fs::create_dir_all(&vault).unwrap();
  let src = tmp.path().join("dup.txt");
  fs::write(&src, b"ONE").unwrap();

  import_file(&src, &vault, Category::Notes, MAX).expect("first import");
  let err = import_file(&src, &vault, Category::Notes, MAX).unwrap_err();
  assert!(err.to_string().contains("already exists"), "{}", err);
  // original copy untouched
  assert_eq!(fs::read(vault.join("notes").join("dup.txt")).unwrap(), b"ONE");
}

#[test]
fn import_rejects_directories()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let vault = tmp.path().join("vault");
  let dir = tmp.path().join("some.txt");
  fs::create_dir_all(&vault).unwrap();
  fs::create_dir_all(&dir).unwrap();

  assert!(import_file(&dir, &vault, Category::Notes, MAX).is_err());
}

#[test]
fn remove_item_deletes_the_file()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let file = tmp.path().join("gone.txt");
  fs::write(&file, b"X").unwrap();
  remove_item(&file).expect("remove");
  assert!(!file.exists());
  assert!(remove_item(&file).is_err());
}
