//! Incremental row filtering.
//!
//! The search box drives one [`apply_filter`] pass per input keystroke. The
//! pass is total over the row set and only toggles visibility flags, so rows
//! are never reordered or dropped and clearing the query restores everything
//! without touching the filesystem.

/// A row that the incremental search can show or hide.
///
/// Implementors expose the concatenated displayable text used for containment
/// matching plus the visibility flag the filter writes. Fields that are
/// absent on a given row simply contribute nothing to the haystack.
pub trait SearchRow
{
  /// Concatenated text content considered for matching.
  fn search_text(&self) -> String;
  fn is_shown(&self) -> bool;
  fn set_shown(
    &mut self,
    shown: bool,
  );
}

/// Recompute visibility for every row against `query`.
///
/// A row ends up shown iff its text contains `query` as a case-insensitive
/// substring; the empty query shows every row. Lower-casing is the only
/// normalization applied. Re-applying the same query is idempotent, and a
/// later pass fully replaces the visibility set of an earlier one.
pub fn apply_filter<R: SearchRow>(
  rows: &mut [R],
  query: &str,
)
{
  let needle = query.to_lowercase();
  for row in rows.iter_mut()
  {
    let shown =
      needle.is_empty() || row.search_text().to_lowercase().contains(&needle);
    row.set_shown(shown);
  }
}

/// Indices of shown rows, in their original order.
pub fn visible_indices<R: SearchRow>(rows: &[R]) -> Vec<usize>
{
  rows
    .iter()
    .enumerate()
    .filter(|(_, r)| r.is_shown())
    .map(|(i, _)| i)
    .collect()
}

pub fn visible_count<R: SearchRow>(rows: &[R]) -> usize
{
  rows.iter().filter(|r| r.is_shown()).count()
}
