mod confirm;
mod keys;
mod messages;
mod prompt;
mod stats;

pub use confirm::draw_confirm_panel;
pub use keys::draw_keys_panel;
pub use messages::draw_messages_panel;
pub use prompt::draw_prompt_panel;
pub use stats::draw_stats_panel;

use ratatui::{
  layout::Rect,
  style::{
    Color,
    Modifier,
    Style,
  },
  text::Span,
  widgets::{
    Block,
    Borders,
  },
};

use crate::{
  config::UiTheme,
  ui::colors::parse_color,
};

/// Bordered popup block styled by the active theme.
pub(crate) fn popup_block(
  theme: &UiTheme,
  title: &str,
) -> Block<'static>
{
  let mut block = Block::default().borders(Borders::ALL);
  if let Some(bg) = theme.pane_bg.as_ref().and_then(|s| parse_color(s))
  {
    block = block.style(Style::default().bg(bg));
  }
  if let Some(bfg) = theme.border_fg.as_ref().and_then(|s| parse_color(s))
  {
    block = block.border_style(Style::default().fg(bfg));
  }
  let title_fg = theme
    .title_fg
    .as_ref()
    .and_then(|s| parse_color(s))
    .unwrap_or(Color::Yellow);
  let mut title_style =
    Style::default().fg(title_fg).add_modifier(Modifier::BOLD);
  if let Some(tb) = theme.title_bg.as_ref().and_then(|s| parse_color(s))
  {
    title_style = title_style.bg(tb);
  }
  block.title(Span::styled(title.to_string(), title_style))
}

/// Fixed-size rect centered in `area`, clamped to fit.
pub(crate) fn centered_rect(
  area: Rect,
  width: u16,
  height: u16,
) -> Rect
{
  let w = width.min(area.width);
  let h = height.min(area.height);
  Rect::new(
    area.x + area.width.saturating_sub(w) / 2,
    area.y + area.height.saturating_sub(h) / 2,
    w,
    h,
  )
}
