//! Input handling for keyboard events.

use crate::app::{
  App,
  ConfirmKind,
  Overlay,
  PromptKind,
};
use std::io;

use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyEventKind,
  KeyModifiers,
};

/// Accept a terminal key event and mutate the [`App`] accordingly.
///
/// Returns `Ok(true)` when the caller should exit. Overlays and search mode
/// capture input before the keymap; multi-key sequences are resolved via the
/// keymap; unrecognised keys fall back to built-in navigation behaviour.
pub fn handle_key(
  app: &mut App,
  key: KeyEvent,
) -> io::Result<bool>
{
  // Ignore key release/repeat events to avoid double-processing (esp. on
  // Windows)
  if key.kind != KeyEventKind::Press
  {
    return Ok(false);
  }

  // Overlays capture all input while open
  match &app.overlay
  {
    Overlay::Confirm(_) =>
    {
      handle_confirm_key(app, key);
      return Ok(false);
    }
    Overlay::Prompt(_) =>
    {
      handle_prompt_key(app, key);
      return Ok(false);
    }
    Overlay::Messages | Overlay::Stats { .. } | Overlay::Keys { .. } =>
    {
      // any key closes a passive overlay
      app.close_overlay();
      return Ok(false);
    }
    Overlay::None =>
    {}
  }

  // Search mode: printable keys edit the query, one keystroke per refilter
  if app.is_searching()
  {
    match (key.code, key.modifiers)
    {
      (KeyCode::Esc, _) =>
      {
        app.clear_search();
      }
      (KeyCode::Enter, _) =>
      {
        app.finish_search();
      }
      (KeyCode::Backspace, _) =>
      {
        app.pop_search_char();
      }
      (KeyCode::Char(ch), m)
        if !m.contains(KeyModifiers::CONTROL)
          && !m.contains(KeyModifiers::ALT) =>
      {
        app.push_search_char(ch);
      }
      (KeyCode::Up, _) =>
      {
        app.move_selection(-1);
      }
      (KeyCode::Down, _) =>
      {
        app.move_selection(1);
      }
      _ =>
      {}
    }
    return Ok(false);
  }

  // First, try dynamic key mappings with simple sequence support
  if let KeyCode::Char(ch) = key.code
  {
    // Allow plain or SHIFT-modified letters; ignore Ctrl/Alt/Super
    let disallowed = key.modifiers.contains(KeyModifiers::CONTROL)
      || key.modifiers.contains(KeyModifiers::ALT)
      || key.modifiers.contains(KeyModifiers::SUPER);
    if !disallowed
    {
      let now = std::time::Instant::now();
      // reset pending sequence on timeout
      if app.config.keys.sequence_timeout_ms > 0
      {
        if let Some(last) = app.keys.last_at
        {
          let timeout = std::time::Duration::from_millis(
            app.config.keys.sequence_timeout_ms,
          );
          if now.duration_since(last) > timeout
          {
            app.keys.pending.clear();
          }
        }
      }
      app.keys.last_at = Some(now);

      app.keys.pending.push(ch);
      let seq = app.keys.pending.clone();

      if let Some(action) = app.get_keymap_action(&seq)
      {
        // exact match
        app.keys.pending.clear();
        if crate::actions::dispatch_action(app, &action).unwrap_or(false)
        {
          if app.should_quit
          {
            return Ok(true);
          }
          return Ok(false);
        }
      }
      else if app.has_prefix(&seq)
      {
        // keep gathering keys
        return Ok(false);
      }
      else
      {
        // no sequence match, try single-key fallbacks (normalize case
        // variants)
        app.keys.pending.clear();
        let mut tried = std::collections::HashSet::new();
        for k in [
          ch.to_string(),
          ch.to_ascii_lowercase().to_string(),
          ch.to_ascii_uppercase().to_string(),
        ]
        {
          if !tried.insert(k.clone())
          {
            continue;
          }
          if let Some(action) = app.get_keymap_action(&k)
          {
            if crate::actions::dispatch_action(app, &action).unwrap_or(false)
            {
              if app.should_quit
              {
                return Ok(true);
              }
              return Ok(false);
            }
          }
        }
      }
    }
  }
  match (key.code, key.modifiers)
  {
    (KeyCode::Char('q'), _) => return Ok(true),
    (KeyCode::Esc, _) =>
    {
      // cancel pending sequences; a lingering query is also cleared here
      app.keys.pending.clear();
      if !app.query().is_empty()
      {
        app.clear_search();
      }
      return Ok(false);
    }
    (KeyCode::Tab, _) =>
    {
      let next = app.active_tab().next();
      app.switch_tab(next);
    }
    (KeyCode::Up, _) | (KeyCode::Char('k'), _) =>
    {
      app.move_selection(-1);
    }
    (KeyCode::Down, _) | (KeyCode::Char('j'), _) =>
    {
      app.move_selection(1);
    }
    _ =>
    {}
  }
  Ok(false)
}

fn handle_confirm_key(
  app: &mut App,
  key: KeyEvent,
)
{
  let state = match &app.overlay
  {
    Overlay::Confirm(s) => (**s).clone(),
    _ => return,
  };
  match key.code
  {
    KeyCode::Char('y') | KeyCode::Char('Y') =>
    {
      app.close_overlay();
      let ConfirmKind::DeleteItem(path) = state.kind;
      app.perform_delete_path(&path);
    }
    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc =>
    {
      app.close_overlay();
    }
    KeyCode::Enter =>
    {
      if state.default_yes
      {
        app.close_overlay();
        let ConfirmKind::DeleteItem(path) = state.kind;
        app.perform_delete_path(&path);
      }
      else
      {
        app.close_overlay();
      }
    }
    _ =>
    {}
  }
}

fn handle_prompt_key(
  app: &mut App,
  key: KeyEvent,
)
{
  // Edit the prompt buffer in place; submission copies it out first since
  // submit handlers may replace the overlay.
  let submitted = if let Overlay::Prompt(ref mut p) = app.overlay
  {
    match key.code
    {
      KeyCode::Esc =>
      {
        app.close_overlay();
        return;
      }
      KeyCode::Enter =>
      {
        Some((p.input.clone(), matches!(p.kind, PromptKind::ImportFile)))
      }
      KeyCode::Backspace =>
      {
        p.input.pop();
        None
      }
      KeyCode::Char(ch)
        if !key.modifiers.contains(KeyModifiers::CONTROL)
          && !key.modifiers.contains(KeyModifiers::ALT) =>
      {
        p.input.push(ch);
        None
      }
      _ => None,
    }
  }
  else
  {
    None
  };
  if let Some((input, is_import)) = submitted
  {
    if is_import
    {
      app.submit_import(&input);
    }
  }
}
