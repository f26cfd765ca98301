use ratatui::{
  layout::Rect,
  text::{
    Line,
    Span,
  },
  widgets::{
    Clear,
    Paragraph,
  },
};

use crate::config::UiTheme;

/// Centered popup listing every active key binding with its description.
pub fn draw_keys_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
  theme: &UiTheme,
)
{
  let key_lines = match app.overlay
  {
    crate::app::Overlay::Keys { ref lines } => lines,
    _ => return,
  };

  // Leave a row of breathing room top and bottom when the list is long
  let max_height = area.height.saturating_sub(2);
  let height =
    (key_lines.len() as u16).saturating_add(2).max(5).min(max_height);
  let popup = super::centered_rect(area, 48, height);
  f.render_widget(Clear, popup);

  let block = super::popup_block(theme, "Keys");
  let inner = block.inner(popup);
  f.render_widget(block, popup);

  let lines: Vec<Line> =
    key_lines.iter().map(|l| Line::from(Span::raw(l.clone()))).collect();
  f.render_widget(Paragraph::new(lines), inner);
}
