pub mod colors;
pub mod format;
pub mod overlays;
pub mod panes;

use ratatui::layout::{Direction, Layout, Constraint, Alignment, Rect};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::UiTheme;

pub(crate) fn current_theme(app: &crate::App) -> UiTheme {
  crate::config::theme::effective_theme(
    app.config.ui.theme,
    app.config.ui.theme_overrides.as_ref(),
  )
}

pub fn draw(
  f: &mut ratatui::Frame,
  app: &mut crate::App,
) {
  // Rows: header, tab bar, content, search/status bar
  let full = f.area();
  let vchunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1),
      Constraint::Length(1),
      Constraint::Min(1),
      Constraint::Length(1),
    ])
    .split(full);

  let theme = current_theme(app);
  draw_header(f, vchunks[0], app, &theme);
  panes::draw_tab_bar(f, vchunks[1], app, &theme);

  let chunks = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
    .split(vchunks[2]);
  panes::draw_list_panel(f, chunks[0], app, &theme);
  panes::draw_detail_panel(f, chunks[1], app, &theme);

  panes::draw_search_bar(f, vchunks[3], app, &theme);

  // Overlays draw last so they appear on top
  match app.overlay {
    crate::app::Overlay::Messages => {
      overlays::draw_messages_panel(f, full, app, &theme);
    }
    crate::app::Overlay::Stats { .. } => {
      overlays::draw_stats_panel(f, full, app, &theme);
    }
    crate::app::Overlay::Keys { .. } => {
      overlays::draw_keys_panel(f, full, app, &theme);
    }
    crate::app::Overlay::Confirm(_) => {
      overlays::draw_confirm_panel(f, full, app, &theme);
    }
    crate::app::Overlay::Prompt(_) => {
      overlays::draw_prompt_panel(f, full, app, &theme);
    }
    crate::app::Overlay::None => {}
  }
}

fn draw_header(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
  theme: &UiTheme,
) {
  // Left: {user}@{host}:{vault_root}
  let user = whoami::username();
  let host = whoami::fallible::hostname().unwrap_or_default();
  let left_full = format!("{}@{}:{}", user, host, app.vault_root().display());

  // Right: selected item details: size, mime, created
  let right_full = if let Some(sel) = app.selected_item() {
    let size_s = match app.get_display_mode() {
      crate::app::DisplayMode::Friendly => format::human_size(sel.size),
      crate::app::DisplayMode::Absolute => format!("{} B", sel.size),
    };
    let created_s = if let Some(ct) = sel.ctime {
      match app.get_display_mode() {
        crate::app::DisplayMode::Friendly => format::format_time_ago(ct),
        crate::app::DisplayMode::Absolute => {
          let fmt = app.config.ui.date_format.as_deref().unwrap_or("%Y-%m-%d %H:%M");
          format::format_time_abs(ct, fmt)
        }
      }
    } else { String::from("-") };
    format!("{}  {}  {}", size_s, sel.mime, created_s)
  } else { String::new() };

  let total = area.width as usize;
  let right_w = UnicodeWidthStr::width(right_full.as_str());
  let left_max = total.saturating_sub(right_w + 1);
  let left = truncate_to_width(&left_full, left_max);

  let mut style = ratatui::style::Style::default().fg(ratatui::style::Color::Gray);
  if let Some(fg) = theme.title_fg.as_ref().and_then(|s| colors::parse_color(s)) {
    style = style.fg(fg);
  }
  if let Some(bg) = theme.title_bg.as_ref().and_then(|s| colors::parse_color(s)) {
    style = style.bg(bg);
  }
  let left_p = Paragraph::new(left).alignment(Alignment::Left).style(style);
  let right_p = Paragraph::new(right_full).alignment(Alignment::Right).style(style);
  f.render_widget(left_p, area);
  f.render_widget(right_p, area);
}

fn truncate_to_width(s: &str, max_w: usize) -> String {
  if max_w == 0 { return String::new(); }
  let mut out = String::new();
  let mut w = 0usize;
  for ch in s.chars() {
    let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
    if w + cw > max_w { break; }
    out.push(ch);
    w += cw;
  }
  out
}
