// Central action dispatcher.
//
// Accepts action strings, supports ';' separated sequences, and executes
// named internal actions parsed by `internal`.
use std::io;

use crate::app::App;

use super::internal::{
  execute_internal_action,
  parse_internal_action,
};
use crate::trace;

/// Parse and execute an action string.
/// Supports multiple actions separated by ';'.
pub fn dispatch_action(
  app: &mut App,
  action: &str,
) -> io::Result<bool>
{
  let parts: Vec<&str> =
    action.split(';').map(|s| s.trim()).filter(|s| !s.is_empty()).collect();
  if parts.len() > 1
  {
    let mut any = false;
    for p in parts
    {
      if dispatch_action(app, p)?
      {
        any = true;
      }
      if app.should_quit
      {
        break;
      }
    }
    return Ok(any);
  }

  if let Some(int) = parse_internal_action(action)
  {
    trace::log(format!("[dispatch] action='{}'", action));
    execute_internal_action(app, int);
    return Ok(true);
  }
  Ok(false)
}
