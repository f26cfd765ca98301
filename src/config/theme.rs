use mlua::Table;

use super::{
  ThemeVariant,
  UiTheme,
};

/// Built-in palette for a theme variant.
pub fn palette(variant: ThemeVariant) -> UiTheme
{
  match variant
  {
    ThemeVariant::Dark => UiTheme {
      pane_bg:          None,
      border_fg:        Some("darkgray".to_string()),
      item_fg:          Some("gray".to_string()),
      item_bg:          None,
      selected_item_fg: Some("cyan".to_string()),
      selected_item_bg: None,
      title_fg:         Some("yellow".to_string()),
      title_bg:         None,
      info_fg:          Some("darkgray".to_string()),
      tab_fg:           Some("gray".to_string()),
      tab_active_fg:    Some("cyan".to_string()),
      query_fg:         Some("green".to_string()),
    },
    ThemeVariant::Light => UiTheme {
      pane_bg:          Some("white".to_string()),
      border_fg:        Some("gray".to_string()),
      item_fg:          Some("black".to_string()),
      item_bg:          None,
      selected_item_fg: Some("blue".to_string()),
      selected_item_bg: None,
      title_fg:         Some("magenta".to_string()),
      title_bg:         None,
      info_fg:          Some("gray".to_string()),
      tab_fg:           Some("darkgray".to_string()),
      tab_active_fg:    Some("blue".to_string()),
      query_fg:         Some("blue".to_string()),
    },
  }
}

/// Palette for `variant` with any configured overrides applied on top.
pub fn effective_theme(
  variant: ThemeVariant,
  overrides: Option<&UiTheme>,
) -> UiTheme
{
  let mut theme = palette(variant);
  if let Some(over) = overrides
  {
    merge_theme(over, &mut theme);
  }
  theme
}

fn merge_theme(
  over: &UiTheme,
  theme: &mut UiTheme,
)
{
  macro_rules! take {
    ($field:ident) => {
      if let Some(ref v) = over.$field
      {
        theme.$field = Some(v.clone());
      }
    };
  }
  take!(pane_bg);
  take!(border_fg);
  take!(item_fg);
  take!(item_bg);
  take!(selected_item_fg);
  take!(selected_item_bg);
  take!(title_fg);
  take!(title_bg);
  take!(info_fg);
  take!(tab_fg);
  take!(tab_active_fg);
  take!(query_fg);
}

pub(crate) fn merge_theme_table(
  theme_tbl: &Table,
  theme: &mut UiTheme,
)
{
  if let Ok(s) = theme_tbl.get::<String>("pane_bg")
  {
    theme.pane_bg = Some(s);
  }
  if let Ok(s) = theme_tbl.get::<String>("border_fg")
  {
    theme.border_fg = Some(s);
  }
  if let Ok(s) = theme_tbl.get::<String>("item_fg")
  {
    theme.item_fg = Some(s);
  }
  if let Ok(s) = theme_tbl.get::<String>("item_bg")
  {
    theme.item_bg = Some(s);
  }
  if let Ok(s) = theme_tbl.get::<String>("selected_item_fg")
  {
    theme.selected_item_fg = Some(s);
  }
  if let Ok(s) = theme_tbl.get::<String>("selected_item_bg")
  {
    theme.selected_item_bg = Some(s);
  }
  if let Ok(s) = theme_tbl.get::<String>("title_fg")
  {
    theme.title_fg = Some(s);
  }
  if let Ok(s) = theme_tbl.get::<String>("title_bg")
  {
    theme.title_bg = Some(s);
  }
  if let Ok(s) = theme_tbl.get::<String>("info_fg")
  {
    theme.info_fg = Some(s);
  }
  if let Ok(s) = theme_tbl.get::<String>("tab_fg")
  {
    theme.tab_fg = Some(s);
  }
  if let Ok(s) = theme_tbl.get::<String>("tab_active_fg")
  {
    theme.tab_active_fg = Some(s);
  }
  if let Ok(s) = theme_tbl.get::<String>("query_fg")
  {
    theme.query_fg = Some(s);
  }
}
