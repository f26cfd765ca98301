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

/// Centered popup with per-category item counts and sizes.
pub fn draw_stats_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
  theme: &UiTheme,
)
{
  let stat_lines = match app.overlay
  {
    crate::app::Overlay::Stats { ref lines } => lines,
    _ => return,
  };

  let height = (stat_lines.len() as u16).saturating_add(2).max(5);
  let popup = super::centered_rect(area, 44, height);
  f.render_widget(Clear, popup);

  let block = super::popup_block(theme, "Vault Stats");
  let inner = block.inner(popup);
  f.render_widget(block, popup);

  let lines: Vec<Line> =
    stat_lines.iter().map(|l| Line::from(Span::raw(l.clone()))).collect();
  f.render_widget(Paragraph::new(lines), inner);
}
