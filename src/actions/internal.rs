// Internal actions: every operation a key sequence can be bound to.
// This module is a child of the crate root and can access crate-private items.

use crate::core::catalog::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey
{
  Name,
  Size,
  Type,
  Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InternalAction
{
  Quit,
  Sort(SortKey),
  ToggleSortReverse,
  Tab(Category),
  NextTab,
  SetDisplayMode(crate::app::DisplayMode),
  ThemeToggle,
  SearchStart,
  SearchClear,
  GoTop,
  GoBottom,
  Delete,
  Import,
  Stats,
  Keys,
  Messages,
}

pub(crate) fn parse_internal_action(s: &str) -> Option<InternalAction>
{
  let low = s.trim().to_ascii_lowercase();
  if low == "quit" || low == "q"
  {
    return Some(InternalAction::Quit);
  }
  if low == "sort:reverse:toggle" || low == "sort:rev:toggle"
  {
    return Some(InternalAction::ToggleSortReverse);
  }
  if let Some(rest) = low.strip_prefix("sort:")
  {
    return crate::enums::sort_key_from_str(rest).map(InternalAction::Sort);
  }
  if low == "tab:next"
  {
    return Some(InternalAction::NextTab);
  }
  if let Some(rest) = low.strip_prefix("tab:")
  {
    return crate::enums::category_from_str(rest).map(InternalAction::Tab);
  }
  if let Some(rest) = low.strip_prefix("display:")
  {
    return crate::enums::display_mode_from_str(rest)
      .map(InternalAction::SetDisplayMode);
  }
  if low == "theme:toggle"
  {
    return Some(InternalAction::ThemeToggle);
  }
  if low == "search:start" || low == "search"
  {
    return Some(InternalAction::SearchStart);
  }
  if low == "search:clear"
  {
    return Some(InternalAction::SearchClear);
  }
  if low == "nav:top" || low == "top"
  {
    return Some(InternalAction::GoTop);
  }
  if low == "nav:bottom" || low == "bottom"
  {
    return Some(InternalAction::GoBottom);
  }
  if low == "delete"
  {
    return Some(InternalAction::Delete);
  }
  if low == "import" || low == "add"
  {
    return Some(InternalAction::Import);
  }
  if low == "stats"
  {
    return Some(InternalAction::Stats);
  }
  if low == "keys" || low == "help"
  {
    return Some(InternalAction::Keys);
  }
  if low == "messages"
  {
    return Some(InternalAction::Messages);
  }
  None
}

pub(crate) fn execute_internal_action(
  app: &mut crate::app::App,
  action: InternalAction,
)
{
  match action
  {
    InternalAction::Quit =>
    {
      app.should_quit = true;
    }
    InternalAction::Sort(key) =>
    {
      // Reselect current item by name after resort
      let current_name = app.selected_item().map(|e| e.name.clone());
      app.sort_key = key;
      app.resort_catalogs();
      if let Some(name) = current_name
      {
        app.select_visible_by_name(&name);
      }
    }
    InternalAction::ToggleSortReverse =>
    {
      let current_name = app.selected_item().map(|e| e.name.clone());
      app.sort_reverse = !app.sort_reverse;
      app.resort_catalogs();
      if let Some(name) = current_name
      {
        app.select_visible_by_name(&name);
      }
    }
    InternalAction::Tab(category) =>
    {
      app.switch_tab(category);
    }
    InternalAction::NextTab =>
    {
      app.switch_tab(app.active_tab.next());
    }
    InternalAction::SetDisplayMode(mode) =>
    {
      app.display_mode = mode;
      app.force_full_redraw = true;
    }
    InternalAction::ThemeToggle =>
    {
      app.toggle_theme();
    }
    InternalAction::SearchStart =>
    {
      app.start_search();
    }
    InternalAction::SearchClear =>
    {
      app.clear_search();
    }
    InternalAction::GoTop =>
    {
      app.select_visible_position(0);
    }
    InternalAction::GoBottom =>
    {
      let last = app.visible_len().saturating_sub(1);
      app.select_visible_position(last);
    }
    InternalAction::Delete =>
    {
      app.request_delete_selected();
    }
    InternalAction::Import =>
    {
      app.open_import_prompt();
    }
    InternalAction::Stats =>
    {
      app.open_stats();
    }
    InternalAction::Keys =>
    {
      app.open_keys();
    }
    InternalAction::Messages =>
    {
      app.toggle_messages();
    }
  }
}
