// Centralized helpers to convert between enums and strings

use crate::core::catalog::Category;

#[inline]
pub(crate) fn sort_key_to_str(k: crate::actions::SortKey) -> &'static str {
  match k {
    crate::actions::SortKey::Name => "name",
    crate::actions::SortKey::Size => "size",
    crate::actions::SortKey::Type => "type",
    crate::actions::SortKey::Date => "date",
  }
}

pub(crate) fn sort_key_from_str(s: &str) -> Option<crate::actions::SortKey> {
  let low = s.to_ascii_lowercase();
  match low.as_str() {
    "name" | "n" => Some(crate::actions::SortKey::Name),
    "size" | "s" => Some(crate::actions::SortKey::Size),
    "type" | "mime" | "t" => Some(crate::actions::SortKey::Type),
    "date" | "newest" | "created" | "d" => Some(crate::actions::SortKey::Date),
    _ => None,
  }
}

pub(crate) fn category_from_str(s: &str) -> Option<Category> {
  let low = s.to_ascii_lowercase();
  match low.as_str() {
    "notes" | "note" => Some(Category::Notes),
    "images" | "image" => Some(Category::Images),
    "videos" | "video" => Some(Category::Videos),
    _ => None,
  }
}

#[inline]
pub(crate) fn display_mode_to_str(d: crate::app::DisplayMode) -> &'static str {
  match d {
    crate::app::DisplayMode::Absolute => "absolute",
    crate::app::DisplayMode::Friendly => "friendly",
  }
}

pub(crate) fn display_mode_from_str(s: &str) -> Option<crate::app::DisplayMode> {
  let low = s.to_ascii_lowercase();
  match low.as_str() {
    "absolute" | "abs" => Some(crate::app::DisplayMode::Absolute),
    "friendly" | "ago" | "human" => Some(crate::app::DisplayMode::Friendly),
    _ => None,
  }
}
