use std::{
  io,
  time::Duration,
};

use crossterm::{
  event,
  event::Event,
  execute,
  terminal::{
    EnterAlternateScreen,
    LeaveAlternateScreen,
    disable_raw_mode,
    enable_raw_mode,
  },
};
use ratatui::{
  Terminal,
  backend::CrosstermBackend,
};

use crate::app::App;

/// Drive the draw/poll loop until the user quits or an error surfaces.
///
/// The terminal is restored (raw mode off, main screen back) before the
/// result is returned, so callers can print errors normally.
pub fn run_app(app: &mut App) -> Result<(), Box<dyn std::error::Error>>
{
  enable_raw_mode()?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend)?;
  terminal.clear()?;

  let res = event_loop(app, &mut terminal);

  disable_raw_mode()?;
  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
  terminal.show_cursor()?;
  res
}

fn event_loop(
  app: &mut App,
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>>
{
  loop
  {
    if app.force_full_redraw
    {
      let _ = terminal.clear();
      app.force_full_redraw = false;
    }
    terminal.draw(|f| crate::ui::draw(f, app))?;

    if !crossterm::event::poll(Duration::from_millis(200))?
    {
      continue;
    }
    match event::read()?
    {
      Event::Key(key) =>
      {
        if crate::input::handle_key(app, key)?
        {
          return Ok(()); // graceful exit
        }
      }
      Event::Resize(_, _) =>
      {
        app.force_full_redraw = true;
      }
      _ =>
      {}
    }
  }
}
