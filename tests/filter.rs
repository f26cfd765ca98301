use vlt::core::filter::{
  SearchRow,
  apply_filter,
  visible_count,
  visible_indices,
};

struct Row
{
  text:  String,
  shown: bool,
}

impl Row
{
  fn new(text: &str) -> Self
  {
    Self { text: text.to_string(), shown: true }
  }
}

impl SearchRow for Row
{
  fn search_text(&self) -> String
  {
    self.text.clone()
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

fn sample() -> Vec<Row>
{
  vec![
    Row::new("Invoice_2024.pdf"),
    Row::new("Report_Q1.docx"),
    Row::new("invoice_summary.txt"),
  ]
}

#[test]
fn empty_query_shows_every_row()
{
  let mut rows = sample();
  rows[1].shown = false;
  apply_filter(&mut rows, "");
  assert_eq!(visible_indices(&rows), vec![0, 1, 2]);
}

#[test]
fn substring_match_is_case_insensitive()
{
  let mut rows = sample();
  apply_filter(&mut rows, "invoice");
  assert_eq!(visible_indices(&rows), vec![0, 2]);

  // Uppercase query hits the same rows
  apply_filter(&mut rows, "INVOICE");
  assert_eq!(visible_indices(&rows), vec![0, 2]);
}

#[test]
fn non_matching_query_hides_all_but_keeps_rows()
{
  let mut rows = sample();
  apply_filter(&mut rows, "zzz");
  assert_eq!(visible_count(&rows), 0);
  assert_eq!(rows.len(), 3);
  // names untouched
  assert_eq!(rows[0].text, "Invoice_2024.pdf");
}

#[test]
fn reapplying_the_same_query_is_idempotent()
{
  let mut rows = sample();
  apply_filter(&mut rows, "report");
  let first: Vec<bool> = rows.iter().map(|r| r.shown).collect();
  apply_filter(&mut rows, "report");
  let second: Vec<bool> = rows.iter().map(|r| r.shown).collect();
  assert_eq!(first, second);
  assert_eq!(visible_indices(&rows), vec![1]);
}

#[test]
fn later_query_fully_replaces_earlier_visibility()
{
  let mut rows = sample();
  apply_filter(&mut rows, "invoice");
  assert_eq!(visible_indices(&rows), vec![0, 2]);
  apply_filter(&mut rows, "report");
  assert_eq!(visible_indices(&rows), vec![1]);
  // rows hidden by the first pass are reconsidered, not stuck hidden
  apply_filter(&mut rows, "summary");
  assert_eq!(visible_indices(&rows), vec![2]);
}

#[test]
fn clearing_the_query_restores_visibility()
{
  let mut rows = sample();
  apply_filter(&mut rows, "no such thing");
  assert_eq!(visible_count(&rows), 0);
  apply_filter(&mut rows, "");
  assert_eq!(visible_count(&rows), 3);
}

#[test]
fn filter_never_reorders_rows()
{
  let mut rows = sample();
  apply_filter(&mut rows, "o");
  let names: Vec<&str> = rows.iter().map(|r| r.text.as_str()).collect();
  assert_eq!(
    names,
    vec!["Invoice_2024.pdf", "Report_Q1.docx", "invoice_summary.txt"]
  );
}

#[test]
fn vault_items_match_on_title_description_and_name()
{
  use vlt::core::catalog::{
    Category,
    VaultItem,
    mime_for_extension,
  };
  let item = |name: &str, title: &str, desc: Option<&str>| VaultItem {
    name:        name.to_string(),
    path:        std::path::PathBuf::from(name),
    category:    Category::Notes,
    title:       title.to_string(),
    description: desc.map(|s| s.to_string()),
    size:        0,
    mtime:       None,
    ctime:       None,
    mime:        mime_for_extension("txt"),
    shown:       true,
  };
  let mut rows = vec![
    item("a.txt", "Tax return", None),
    item("b.txt", "Misc", Some("scanned receipts")),
    item("receipt_c.txt", "Untitled", None),
  ];
  apply_filter(&mut rows, "receipt");
  assert_eq!(visible_indices(&rows), vec![1, 2]);
  apply_filter(&mut rows, "tax");
  assert_eq!(visible_indices(&rows), vec![0]);
}
