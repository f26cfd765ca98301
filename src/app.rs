//! Core application state, used both by the TUI and integration tests.
//!
//! The [`App`] struct models the in-memory view of the vault: one catalog of
//! rows per category tab, the shared search query, overlay state, and
//! configuration. The binary owns an instance of `App`, but tests can create
//! their own to simulate browsing or exercise the filter through the same
//! entry points the key handler uses.

use std::{
  io,
  path::{
    Path,
    PathBuf,
  },
};

use ratatui::widgets::ListState;

use crate::{
  actions::SortKey,
  core::{
    catalog::{
      self,
      Category,
      VaultItem,
    },
    filter,
  },
};

#[derive(Debug, Clone)]
pub enum Overlay
{
  None,
  Messages,
  Stats { lines: Vec<String> },
  Keys { lines: Vec<String> },
  Prompt(Box<PromptState>),
  Confirm(Box<ConfirmState>),
}

#[derive(Debug, Clone, Default)]
pub struct KeyState
{
  pub maps:     Vec<crate::config::KeyMapping>,
  pub lookup:   std::collections::HashMap<String, String>,
  pub prefixes: std::collections::HashSet<String>,
  pub pending:  String,
  pub last_at:  Option<std::time::Instant>,
}

#[derive(Debug, Clone)]
pub enum PromptKind
{
  ImportFile,
}

#[derive(Debug, Clone)]
pub struct PromptState
{
  pub title: String,
  pub input: String,
  pub kind:  PromptKind,
}

#[derive(Debug, Clone)]
pub enum ConfirmKind
{
  DeleteItem(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ConfirmState
{
  pub title:       String,
  pub question:    String,
  pub default_yes: bool,
  pub kind:        ConfirmKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode
{
  Absolute,
  Friendly,
}

/// Mutable application state driving the tabbed vault UI.
pub struct App
{
  pub(crate) vault_root:        PathBuf,
  pub(crate) catalogs:          [Vec<VaultItem>; 3],
  pub(crate) active_tab:        Category,
  pub(crate) query:             String,
  pub(crate) searching:         bool,
  pub(crate) list_state:        ListState,
  // Messages
  pub(crate) recent_messages:   Vec<String>,
  // Overlay state (mutually exclusive)
  pub(crate) overlay:           Overlay,
  pub(crate) config:            crate::config::Config,
  pub(crate) keys:              KeyState,
  pub(crate) force_full_redraw: bool,
  // In-memory runtime settings
  pub(crate) sort_key:          SortKey,
  pub(crate) sort_reverse:      bool,
  pub(crate) display_mode:      DisplayMode,
  // Signal to exit after handling a key/action
  pub(crate) should_quit:       bool,
}

impl App
{
  /// Construct a fresh [`App`] rooted at `vault_root`.
  ///
  /// Loads configuration from the discovered config directory, applies the
  /// configured sort and display settings, then reads the three category
  /// directories. Missing category directories are empty tabs.
  pub fn new(vault_root: &Path) -> io::Result<Self>
  {
    let meta = std::fs::metadata(vault_root)?;
    if !meta.is_dir()
    {
      return Err(io::Error::other(format!(
        "'{}' is not a directory",
        vault_root.display()
      )));
    }

    let mut app = Self {
      vault_root: vault_root.to_path_buf(),
      catalogs: [Vec::new(), Vec::new(), Vec::new()],
      active_tab: Category::Notes,
      query: String::new(),
      searching: false,
      list_state: ListState::default(),
      recent_messages: Vec::new(),
      overlay: Overlay::None,
      config: crate::config::Config::default(),
      keys: KeyState::default(),
      force_full_redraw: false,
      // Newest first, mirroring the browse default
      sort_key: SortKey::Date,
      sort_reverse: true,
      display_mode: DisplayMode::Absolute,
      should_quit: false,
    };

    match crate::config::discover_config_paths()
      .and_then(|paths| crate::config::load_config(&paths))
    {
      Ok((cfg, maps)) =>
      {
        app.config = cfg;
        app.keys.maps = maps;
        app.rebuild_keymap_lookup();
        app.apply_config_settings();
      }
      Err(e) =>
      {
        eprintln!("vlt: config load error: {}", e);
        app.keys.maps = crate::config::default_keymaps();
        app.rebuild_keymap_lookup();
      }
    }

    app.reload_catalogs();
    Ok(app)
  }

  /// Test helper: construct an `App` without touching config discovery.
  #[doc(hidden)]
  pub fn with_config(
    vault_root: &Path,
    config: crate::config::Config,
    maps: Vec<crate::config::KeyMapping>,
  ) -> Self
  {
    let mut app = Self {
      vault_root: vault_root.to_path_buf(),
      catalogs: [Vec::new(), Vec::new(), Vec::new()],
      active_tab: Category::Notes,
      query: String::new(),
      searching: false,
      list_state: ListState::default(),
      recent_messages: Vec::new(),
      overlay: Overlay::None,
      config,
      keys: KeyState::default(),
      force_full_redraw: false,
      sort_key: SortKey::Date,
      sort_reverse: true,
      display_mode: DisplayMode::Absolute,
      should_quit: false,
    };
    app.keys.maps = maps;
    app.rebuild_keymap_lookup();
    app.apply_config_settings();
    app.reload_catalogs();
    app
  }

  /// Copy sort and display settings out of the loaded config.
  fn apply_config_settings(&mut self)
  {
    if let Some(ref srt) = self.config.ui.sort
      && let Some(k) = crate::enums::sort_key_from_str(srt)
    {
      self.sort_key = k;
    }
    if let Some(b) = self.config.ui.sort_reverse
    {
      self.sort_reverse = b;
    }
    if let Some(dm) = self.config.ui.display_mode.as_deref()
      && let Some(mode) = crate::enums::display_mode_from_str(dm)
    {
      self.display_mode = mode;
    }
  }

  // ----- catalogs and visibility ------------------------------------------

  pub(crate) fn items(&self) -> &[VaultItem]
  {
    &self.catalogs[self.active_tab.index()]
  }

  pub fn active_tab(&self) -> Category
  {
    self.active_tab
  }

  pub fn query(&self) -> &str
  {
    &self.query
  }

  pub fn is_searching(&self) -> bool
  {
    self.searching
  }

  /// Re-read every category directory, keeping sort and filter applied.
  pub fn reload_catalogs(&mut self)
  {
    for cat in Category::ALL
    {
      let mut items = match catalog::read_category(
        &self.vault_root,
        cat,
        self.config.ui.show_hidden,
      )
      {
        Ok(items) => items,
        Err(e) =>
        {
          self.add_message(&format!(
            "Error reading {}: {}",
            cat.dir_name(),
            e
          ));
          Vec::new()
        }
      };
      if items.len() > self.config.ui.max_list_items
      {
        items.truncate(self.config.ui.max_list_items);
      }
      catalog::sort_items(&mut items, self.sort_key, self.sort_reverse);
      self.catalogs[cat.index()] = items;
    }
    self.refilter();
  }

  pub(crate) fn resort_catalogs(&mut self)
  {
    for cat in Category::ALL
    {
      catalog::sort_items(
        &mut self.catalogs[cat.index()],
        self.sort_key,
        self.sort_reverse,
      );
    }
    self.clamp_selection();
  }

  /// Re-apply the current query to every tab and clamp the selection.
  ///
  /// This is the single funnel between input events and the filter core:
  /// each keystroke in search mode ends up here.
  pub(crate) fn refilter(&mut self)
  {
    for cat in Category::ALL
    {
      filter::apply_filter(&mut self.catalogs[cat.index()], &self.query);
    }
    self.clamp_selection();
  }

  pub fn visible_indices(&self) -> Vec<usize>
  {
    filter::visible_indices(self.items())
  }

  pub fn visible_len(&self) -> usize
  {
    filter::visible_count(self.items())
  }

  /// Names of the rows currently shown on the active tab, in display order.
  pub fn visible_names(&self) -> Vec<String>
  {
    self
      .visible_indices()
      .into_iter()
      .map(|i| self.items()[i].name.clone())
      .collect()
  }

  pub(crate) fn selected_item(&self) -> Option<&VaultItem>
  {
    let pos = self.list_state.selected()?;
    let idx = *self.visible_indices().get(pos)?;
    self.items().get(idx)
  }

  pub fn selected_name(&self) -> Option<String>
  {
    self.selected_item().map(|e| e.name.clone())
  }

  pub fn select_visible_position(
    &mut self,
    pos: usize,
  )
  {
    let len = self.visible_len();
    if len == 0
    {
      self.list_state.select(None);
    }
    else
    {
      self.list_state.select(Some(pos.min(len - 1)));
    }
  }

  pub(crate) fn move_selection(
    &mut self,
    delta: isize,
  )
  {
    let len = self.visible_len();
    if len == 0
    {
      self.list_state.select(None);
      return;
    }
    let cur = self.list_state.selected().unwrap_or(0) as isize;
    let next = (cur + delta).clamp(0, len as isize - 1);
    self.list_state.select(Some(next as usize));
  }

  pub(crate) fn select_visible_by_name(
    &mut self,
    name: &str,
  )
  {
    let indices = self.visible_indices();
    if let Some(pos) =
      indices.iter().position(|&i| self.items()[i].name == name)
    {
      self.list_state.select(Some(pos));
    }
  }

  pub(crate) fn clamp_selection(&mut self)
  {
    let len = self.visible_len();
    match self.list_state.selected()
    {
      Some(_) if len == 0 =>
      {
        self.list_state.select(None);
      }
      Some(sel) if sel >= len =>
      {
        self.list_state.select(Some(len - 1));
      }
      None if len > 0 =>
      {
        self.list_state.select(Some(0));
      }
      _ =>
      {}
    }
  }

  // ----- search ------------------------------------------------------------

  pub fn start_search(&mut self)
  {
    self.searching = true;
    self.force_full_redraw = true;
  }

  /// Leave search mode keeping the query (and its visibility set) in place.
  pub fn finish_search(&mut self)
  {
    self.searching = false;
  }

  /// Leave search mode and restore full visibility.
  pub fn clear_search(&mut self)
  {
    self.searching = false;
    self.query.clear();
    self.refilter();
    self.force_full_redraw = true;
  }

  /// Replace the whole query, as if typed. Public for tests.
  pub fn set_query(
    &mut self,
    query: &str,
  )
  {
    self.query = query.to_string();
    self.refilter();
  }

  pub(crate) fn push_search_char(
    &mut self,
    ch: char,
  )
  {
    self.query.push(ch);
    self.refilter();
  }

  pub(crate) fn pop_search_char(&mut self)
  {
    self.query.pop();
    self.refilter();
  }

  // ----- tabs ---------------------------------------------------------------

  pub fn switch_tab(
    &mut self,
    category: Category,
  )
  {
    if self.active_tab != category
    {
      self.active_tab = category;
      // The shared query is already applied to every tab; just reseat the
      // selection inside the new tab's visible set.
      self.list_state.select(None);
      self.clamp_selection();
      self.force_full_redraw = true;
    }
  }

  // ----- overlays and vault operations -------------------------------------

  pub fn request_delete_selected(&mut self)
  {
    crate::trace::log("[delete] request_delete_selected()");
    let (path, name) = match self.selected_item()
    {
      Some(e) => (e.path.clone(), e.name.clone()),
      None =>
      {
        self.add_message("Delete: no selection");
        return;
      }
    };
    if self.config.ui.confirm_delete
    {
      crate::trace::log(format!("[delete] opening confirm for '{}'", name));
      self.overlay = Overlay::Confirm(Box::new(ConfirmState {
        title:       "Confirm Delete".to_string(),
        question:    format!("Delete '{}' ? (y/n)", name),
        default_yes: false,
        kind:        ConfirmKind::DeleteItem(path),
      }));
      self.force_full_redraw = true;
    }
    else
    {
      self.perform_delete_path(&path);
    }
  }

  pub(crate) fn perform_delete_path(
    &mut self,
    path: &Path,
  )
  {
    crate::trace::log(format!("[delete] perform path='{}'", path.display()));
    match crate::core::fs_ops::remove_item(path)
    {
      Ok(()) => self.add_message("Deleted"),
      Err(e) => self.add_message(&format!("Delete error: {}", e)),
    }
    self.reload_catalogs();
  }

  pub fn open_import_prompt(&mut self)
  {
    self.overlay = Overlay::Prompt(Box::new(PromptState {
      title: format!("Import file into {}:", self.active_tab.dir_name()),
      input: String::new(),
      kind:  PromptKind::ImportFile,
    }));
    self.force_full_redraw = true;
  }

  /// Handle a submitted import prompt. On failure the prompt stays open with
  /// its input reset so the user can try another path.
  pub(crate) fn submit_import(
    &mut self,
    input: &str,
  )
  {
    let src = input.trim();
    if src.is_empty()
    {
      self.close_overlay();
      return;
    }
    let max = self.config.limits.max_upload_bytes;
    match crate::core::fs_ops::import_file(
      Path::new(src),
      &self.vault_root,
      self.active_tab,
      max,
    )
    {
      Ok(dest) =>
      {
        let name = dest
          .file_name()
          .map(|s| s.to_string_lossy().to_string())
          .unwrap_or_else(|| dest.display().to_string());
        self.add_message(&format!("Imported '{}'", name));
        self.close_overlay();
        self.reload_catalogs();
      }
      Err(e) =>
      {
        self.add_message(&format!("Import error: {}", e));
        if let Overlay::Prompt(ref mut p) = self.overlay
        {
          p.input.clear();
        }
        self.force_full_redraw = true;
      }
    }
  }

  pub fn open_stats(&mut self)
  {
    let mut lines = Vec::new();
    let mut total_count = 0usize;
    let mut total_size = 0u64;
    for cat in Category::ALL
    {
      let items = &self.catalogs[cat.index()];
      let size: u64 = items.iter().map(|e| e.size).sum();
      total_count += items.len();
      total_size += size;
      lines.push(format!(
        "{:<8} {:>5} items  {:>12}",
        cat.title(),
        items.len(),
        crate::ui::format::human_size(size)
      ));
    }
    lines.push(String::new());
    lines.push(format!(
      "{:<8} {:>5} items  {:>12}",
      "Total",
      total_count,
      crate::ui::format::human_size(total_size)
    ));
    self.overlay = Overlay::Stats { lines };
    self.force_full_redraw = true;
  }

  /// Key bindings overlay: one line per mapping, described where the
  /// config gave a description and falling back to the action string.
  pub fn open_keys(&mut self)
  {
    let lines: Vec<String> = self
      .keys
      .maps
      .iter()
      .map(|m| {
        format!(
          "{:<6} {}",
          m.sequence,
          m.description.as_deref().unwrap_or(&m.action)
        )
      })
      .collect();
    self.overlay = Overlay::Keys { lines };
    self.force_full_redraw = true;
  }

  pub fn toggle_theme(&mut self)
  {
    self.config.ui.theme = self.config.ui.theme.toggle();
    self.add_message(&format!("Theme: {}", self.config.ui.theme.name()));
    self.force_full_redraw = true;
  }

  pub fn toggle_messages(&mut self)
  {
    self.overlay = match self.overlay
    {
      Overlay::Messages => Overlay::None,
      _ => Overlay::Messages,
    };
    self.force_full_redraw = true;
  }

  pub(crate) fn close_overlay(&mut self)
  {
    self.overlay = Overlay::None;
    self.force_full_redraw = true;
  }

  pub fn add_message(
    &mut self,
    msg: &str,
  )
  {
    let m = msg.trim().to_string();
    if m.is_empty()
    {
      return;
    }
    self.recent_messages.push(m);
    if self.recent_messages.len() > 100
    {
      let _ = self.recent_messages.drain(0..self.recent_messages.len() - 100);
    }
    self.force_full_redraw = true;
  }

  pub fn recent_messages_len(&self) -> usize
  {
    self.recent_messages.len()
  }

  pub fn last_message(&self) -> Option<&str>
  {
    self.recent_messages.last().map(String::as_str)
  }

  // ----- keymaps ------------------------------------------------------------

  pub(crate) fn rebuild_keymap_lookup(&mut self)
  {
    self.keys.lookup.clear();
    self.keys.prefixes.clear();
    for m in &self.keys.maps
    {
      self.keys.lookup.insert(m.sequence.clone(), m.action.clone());
      // collect prefixes for sequence matching
      let s = &m.sequence;
      let mut prefix = String::new();
      for c in s.chars()
      {
        prefix.push(c);
        // do not include the full sequence as prefix-only
        if prefix.len() < s.len()
        {
          self.keys.prefixes.insert(prefix.clone());
        }
      }
    }
  }

  pub fn set_keymaps(
    &mut self,
    maps: Vec<crate::config::KeyMapping>,
  )
  {
    self.keys.maps = maps;
    self.rebuild_keymap_lookup();
  }

  pub fn get_keymap_action(
    &self,
    seq: &str,
  ) -> Option<String>
  {
    self.keys.lookup.get(seq).cloned()
  }

  pub fn has_prefix(
    &self,
    seq: &str,
  ) -> bool
  {
    self.keys.prefixes.contains(seq)
  }

  // ----- misc accessors -----------------------------------------------------

  pub fn get_quit(&self) -> bool
  {
    self.should_quit
  }

  pub fn get_sort_key(&self) -> SortKey
  {
    self.sort_key
  }

  pub fn get_sort_reverse(&self) -> bool
  {
    self.sort_reverse
  }

  pub fn get_display_mode(&self) -> DisplayMode
  {
    self.display_mode
  }

  pub fn get_show_messages(&self) -> bool
  {
    matches!(self.overlay, Overlay::Messages)
  }

  pub fn get_show_stats(&self) -> bool
  {
    matches!(self.overlay, Overlay::Stats { .. })
  }

  pub fn get_show_keys(&self) -> bool
  {
    matches!(self.overlay, Overlay::Keys { .. })
  }

  /// Lines of the current passive overlay, if one is open.
  pub fn overlay_lines(&self) -> Option<&[String]>
  {
    match self.overlay
    {
      Overlay::Stats { ref lines } | Overlay::Keys { ref lines } =>
      {
        Some(lines)
      }
      _ => None,
    }
  }

  pub fn get_show_confirm(&self) -> bool
  {
    matches!(self.overlay, Overlay::Confirm(_))
  }

  pub fn get_show_prompt(&self) -> bool
  {
    matches!(self.overlay, Overlay::Prompt(_))
  }

  pub fn theme_variant(&self) -> crate::config::ThemeVariant
  {
    self.config.ui.theme
  }

  pub fn vault_root(&self) -> &Path
  {
    &self.vault_root
  }
}
