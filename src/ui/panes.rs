//! Tab bar, list and detail panes.

use ratatui::{
  layout::{
    Alignment,
    Rect,
  },
  style::{
    Color,
    Modifier,
    Style,
  },
  text::{
    Line,
    Span,
  },
  widgets::{
    Block,
    Borders,
    Clear,
    List,
    ListItem,
    Paragraph,
  },
};

use crate::{
  config::UiTheme,
  core::catalog::Category,
  ui::colors::parse_color,
};

/// Base style for unselected list rows, from `item_fg`/`item_bg`.
pub fn list_style(theme: &UiTheme) -> Style
{
  let mut style = Style::default();
  if let Some(fg) = theme.item_fg.as_ref().and_then(|s| parse_color(s))
  {
    style = style.fg(fg);
  }
  if let Some(bg) = theme.item_bg.as_ref().and_then(|s| parse_color(s))
  {
    style = style.bg(bg);
  }
  style
}

fn themed_block(theme: &UiTheme) -> Block<'static>
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
  block
}

pub fn draw_tab_bar(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
  theme: &UiTheme,
)
{
  let tab_fg = theme
    .tab_fg
    .as_ref()
    .and_then(|s| parse_color(s))
    .unwrap_or(Color::Gray);
  let active_fg = theme
    .tab_active_fg
    .as_ref()
    .and_then(|s| parse_color(s))
    .unwrap_or(Color::Cyan);

  let mut spans: Vec<Span> = Vec::new();
  for cat in Category::ALL
  {
    let visible = crate::core::filter::visible_count(
      &app.catalogs[cat.index()],
    );
    let total = app.catalogs[cat.index()].len();
    let label = if visible == total
    {
      format!(" {} ({}) ", cat.title(), total)
    }
    else
    {
      format!(" {} ({}/{}) ", cat.title(), visible, total)
    };
    let style = if cat == app.active_tab()
    {
      Style::default().fg(active_fg).add_modifier(Modifier::BOLD)
    }
    else
    {
      Style::default().fg(tab_fg)
    };
    spans.push(Span::styled(label, style));
    spans.push(Span::raw(" "));
  }
  let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
  f.render_widget(para, area);
}

pub fn draw_list_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &mut crate::App,
  theme: &UiTheme,
)
{
  f.render_widget(Clear, area);
  let block = themed_block(theme).title(Span::styled(
    app.active_tab().title(),
    Style::default()
      .fg(
        theme
          .title_fg
          .as_ref()
          .and_then(|s| parse_color(s))
          .unwrap_or(Color::Yellow),
      )
      .add_modifier(Modifier::BOLD),
  ));
  let inner = block.inner(area);
  f.render_widget(block, area);

  // Only rows that passed the filter are rendered
  let indices = app.visible_indices();
  let items: Vec<ListItem> = indices
    .iter()
    .map(|&i| {
      let e = &app.items()[i];
      ListItem::new(Line::from(Span::raw(e.name.clone())))
    })
    .collect();

  let mut list = List::new(items).highlight_symbol("");
  let mut hl = Style::default();
  if let Some(fg) =
    theme.selected_item_fg.as_ref().and_then(|s| parse_color(s))
  {
    hl = hl.fg(fg);
  }
  if let Some(bg) =
    theme.selected_item_bg.as_ref().and_then(|s| parse_color(s))
  {
    hl = hl.bg(bg);
  }
  list = list.highlight_style(hl.add_modifier(Modifier::BOLD));
  list = list.style(list_style(theme));

  f.render_stateful_widget(list, inner, &mut app.list_state);
}

pub fn draw_detail_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
  theme: &UiTheme,
)
{
  f.render_widget(Clear, area);
  let block = themed_block(theme).title(Span::styled(
    "Details",
    Style::default()
      .fg(
        theme
          .title_fg
          .as_ref()
          .and_then(|s| parse_color(s))
          .unwrap_or(Color::Yellow),
      )
      .add_modifier(Modifier::BOLD),
  ));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let info_fg = theme
    .info_fg
    .as_ref()
    .and_then(|s| parse_color(s))
    .unwrap_or(Color::DarkGray);
  let info = Style::default().fg(info_fg);

  let mut lines: Vec<Line> = Vec::new();
  if let Some(sel) = app.selected_item()
  {
    let date_fmt =
      app.config.ui.date_format.as_deref().unwrap_or("%Y-%m-%d %H:%M");
    let fmt_time = |t: Option<std::time::SystemTime>| match t
    {
      Some(t) => match app.get_display_mode()
      {
        crate::app::DisplayMode::Friendly =>
        {
          crate::ui::format::format_time_ago(t)
        }
        crate::app::DisplayMode::Absolute =>
        {
          crate::ui::format::format_time_abs(t, date_fmt)
        }
      },
      None => "-".to_string(),
    };
    let size_s = match app.get_display_mode()
    {
      crate::app::DisplayMode::Friendly =>
      {
        crate::ui::format::human_size(sel.size)
      }
      crate::app::DisplayMode::Absolute => format!("{} B", sel.size),
    };
    lines.push(Line::from(Span::raw(sel.title.clone())));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
      Span::styled("Name      ", info),
      Span::raw(sel.name.clone()),
    ]));
    lines.push(Line::from(vec![
      Span::styled("Category  ", info),
      Span::raw(sel.category.title()),
    ]));
    lines.push(Line::from(vec![
      Span::styled("Type      ", info),
      Span::raw(sel.mime),
    ]));
    lines.push(Line::from(vec![
      Span::styled("Size      ", info),
      Span::raw(size_s),
    ]));
    lines.push(Line::from(vec![
      Span::styled("Created   ", info),
      Span::raw(fmt_time(sel.ctime)),
    ]));
    lines.push(Line::from(vec![
      Span::styled("Modified  ", info),
      Span::raw(fmt_time(sel.mtime)),
    ]));
    if let Some(ref desc) = sel.description
    {
      lines.push(Line::from(""));
      lines.push(Line::from(Span::raw(desc.clone())));
    }
  }
  else if app.visible_len() == 0 && !app.query().is_empty()
  {
    lines.push(Line::from(Span::styled("No matches", info)));
  }
  else
  {
    lines.push(Line::from(Span::styled("Nothing selected", info)));
  }

  let para = Paragraph::new(lines)
    .wrap(ratatui::widgets::Wrap { trim: true });
  f.render_widget(para, inner);
}

pub fn draw_search_bar(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
  theme: &UiTheme,
)
{
  let query_fg = theme
    .query_fg
    .as_ref()
    .and_then(|s| parse_color(s))
    .unwrap_or(Color::Green);
  let info_fg = theme
    .info_fg
    .as_ref()
    .and_then(|s| parse_color(s))
    .unwrap_or(Color::DarkGray);

  let line = if app.is_searching()
  {
    Line::from(vec![
      Span::styled("/", Style::default().fg(query_fg)),
      Span::styled(
        app.query().to_string(),
        Style::default().fg(query_fg).add_modifier(Modifier::BOLD),
      ),
      Span::styled("_", Style::default().fg(query_fg)),
    ])
  }
  else if !app.query().is_empty()
  {
    Line::from(vec![
      Span::styled("filter: ", Style::default().fg(info_fg)),
      Span::styled(app.query().to_string(), Style::default().fg(query_fg)),
      Span::styled("  (Esc clears)", Style::default().fg(info_fg)),
    ])
  }
  else
  {
    let sort_s = format!(
      "sort:{}{}",
      crate::enums::sort_key_to_str(app.get_sort_key()),
      if app.get_sort_reverse() { "-" } else { "+" }
    );
    Line::from(vec![
      Span::styled(
        "/ search  d delete  a import  S stats  ? keys  q quit",
        Style::default().fg(info_fg),
      ),
      Span::styled(
        format!(
          "   [{} {}]",
          sort_s,
          crate::enums::display_mode_to_str(app.get_display_mode())
        ),
        Style::default().fg(info_fg),
      ),
    ])
  };
  f.render_widget(Paragraph::new(line), area);
}
