use ratatui::{
  layout::Rect,
  text::{
    Line,
    Span,
  },
  widgets::{
    Clear,
    Paragraph,
    Wrap,
  },
};

use crate::config::UiTheme;

pub fn draw_prompt_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
  theme: &UiTheme,
)
{
  let state = match app.overlay
  {
    crate::app::Overlay::Prompt(ref s) => s.as_ref(),
    _ => return,
  };

  let popup = super::centered_rect(area, 60, 5);
  f.render_widget(Clear, popup);

  let block = super::popup_block(theme, &state.title);
  let inner = block.inner(popup);
  f.render_widget(block, popup);
  // Display the current input as the editable line
  let lines: Vec<Line> = vec![
    Line::from(""),
    Line::from(Span::raw(format!("{}_", state.input))),
  ];
  let para = Paragraph::new(lines).wrap(Wrap { trim: true });
  f.render_widget(para, inner);
}
