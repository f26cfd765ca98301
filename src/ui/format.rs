use std::time::SystemTime;

/// Render a byte count the way the detail pane and stats show sizes:
/// `0 B` for empty, otherwise two decimals in B/KB/MB/GB/TB.
pub fn human_size(bytes: u64) -> String
{
  const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
  if bytes == 0
  {
    return "0 B".to_string();
  }
  let mut val = bytes as f64;
  let mut idx = 0usize;
  while val >= 1024.0 && idx + 1 < UNITS.len()
  {
    val /= 1024.0;
    idx += 1;
  }
  format!("{:.2} {}", val, UNITS[idx])
}

pub fn format_time_abs(
  t: SystemTime,
  fmt: &str,
) -> String
{
  use chrono::{
    DateTime,
    Local,
  };
  let dt: DateTime<Local> = DateTime::from(t);
  dt.format(fmt).to_string()
}

pub fn format_time_ago(t: SystemTime) -> String
{
  let now = SystemTime::now();
  match now.duration_since(t)
  {
    Ok(d) =>
    {
      let secs = d.as_secs();
      if secs < 60
      {
        format!("{}s ago", secs)
      }
      else if secs < 3600
      {
        format!("{}m ago", secs / 60)
      }
      else if secs < 86400
      {
        format!("{}h ago", secs / 3600)
      }
      else if secs < 86400 * 30
      {
        format!("{}d ago", secs / 86400)
      }
      else if secs < 86400 * 365
      {
        format!("{}mo ago", secs / (86400 * 30))
      }
      else
      {
        format!("{}y ago", secs / (86400 * 365))
      }
    }
    Err(_) => "just now".to_string(),
  }
}
