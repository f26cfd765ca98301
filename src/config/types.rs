#[derive(Debug, Clone)]
/// Key-handling configuration (currently only sequence timeout).
pub struct KeysConfig
{
  pub sequence_timeout_ms: u64,
}

impl Default for KeysConfig
{
  fn default() -> Self
  {
    Self { sequence_timeout_ms: 800 }
  }
}

#[derive(Debug, Clone)]
/// Limits applied to vault mutations.
pub struct LimitsConfig
{
  pub max_upload_bytes: u64,
}

impl Default for LimitsConfig
{
  fn default() -> Self
  {
    // 100 MB upload ceiling
    Self { max_upload_bytes: 100 * 1024 * 1024 }
  }
}

#[derive(Debug, Clone, Default)]
/// Top-level configuration composed from Lua input.
pub struct Config
{
  pub config_version: u32,
  pub keys:           KeysConfig,
  pub ui:             UiConfig,
  pub limits:         LimitsConfig,
}

#[derive(Debug, Clone)]
/// A single key mapping supplied by `vlt.map`.
pub struct KeyMapping
{
  pub sequence:    String,
  pub action:      String,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The two built-in palettes. `ui.theme` selects the starting one.
pub enum ThemeVariant
{
  #[default]
  Dark,
  Light,
}

impl ThemeVariant
{
  pub fn toggle(self) -> ThemeVariant
  {
    match self
    {
      ThemeVariant::Dark => ThemeVariant::Light,
      ThemeVariant::Light => ThemeVariant::Dark,
    }
  }

  pub fn name(self) -> &'static str
  {
    match self
    {
      ThemeVariant::Dark => "dark",
      ThemeVariant::Light => "light",
    }
  }
}

#[derive(Debug, Clone)]
/// User interface configuration block replicated from Lua.
pub struct UiConfig
{
  pub show_hidden:     bool,
  pub max_list_items:  usize,
  pub date_format:     Option<String>,
  pub display_mode:    Option<String>,
  pub sort:            Option<String>,
  pub sort_reverse:    Option<bool>,
  pub confirm_delete:  bool,
  pub theme:           ThemeVariant,
  pub theme_overrides: Option<UiTheme>,
}

impl Default for UiConfig
{
  fn default() -> Self
  {
    Self {
      show_hidden:     false,
      max_list_items:  5000,
      date_format:     None,
      display_mode:    None,
      sort:            None,
      sort_reverse:    None,
      confirm_delete:  true,
      theme:           ThemeVariant::Dark,
      theme_overrides: None,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Theme colours for the UI. Fields are optional and fall back to the
/// selected built-in palette.
pub struct UiTheme
{
  pub pane_bg:          Option<String>,
  pub border_fg:        Option<String>,
  pub item_fg:          Option<String>,
  pub item_bg:          Option<String>,
  pub selected_item_fg: Option<String>,
  pub selected_item_bg: Option<String>,
  pub title_fg:         Option<String>,
  pub title_bg:         Option<String>,
  pub info_fg:          Option<String>,
  pub tab_fg:           Option<String>,
  pub tab_active_fg:    Option<String>,
  pub query_fg:         Option<String>,
}
