use std::{
  cell::RefCell,
  rc::Rc,
};

use mlua::{
  Lua,
  Table,
  Value,
};

use super::{
  Config,
  KeyMapping,
  KeysConfig,
  LimitsConfig,
};

/// Install the accumulating `vlt` API into a prepared Lua state.
///
/// `vlt.config(tbl)` merges provided fields over the accumulated config;
/// `vlt.map(seq, action, desc?)` appends a key mapping (later bindings for
/// the same sequence win when the lookup is rebuilt).
pub(crate) fn install_vlt_api(
  lua: &Lua,
  cfg: Rc<RefCell<Config>>,
  maps: Rc<RefCell<Vec<KeyMapping>>>,
) -> mlua::Result<()>
{
  let globals = lua.globals();
  let vlt: Table = match globals.get::<Value>("vlt")
  {
    Ok(Value::Table(t)) => t,
    _ => lua.create_table()?,
  };

  // vlt.config(table)
  let cfg_clone = Rc::clone(&cfg);
  let config_fn = lua.create_function(move |_, tbl: Table| {
    let mut cfg_mut = cfg_clone.borrow_mut();
    if let Ok(v) = tbl.get::<u32>("config_version")
    {
      cfg_mut.config_version = v;
    }
    if let Ok(keys_tbl) = tbl.get::<Table>("keys")
    {
      let mut keys = KeysConfig::default();
      if let Ok(ms) = keys_tbl.get::<u64>("sequence_timeout_ms")
      {
        keys.sequence_timeout_ms = ms;
      }
      cfg_mut.keys = keys;
    }
    if let Ok(limits_tbl) = tbl.get::<Table>("limits")
    {
      let mut limits = LimitsConfig::default();
      if let Ok(n) = limits_tbl.get::<u64>("max_upload_bytes")
      {
        limits.max_upload_bytes = n;
      }
      cfg_mut.limits = limits;
    }
    // ui (merge overlay: only provided fields overwrite existing)
    if let Ok(ui_tbl) = tbl.get::<Table>("ui")
    {
      if let Ok(b) = ui_tbl.get::<bool>("show_hidden")
      {
        cfg_mut.ui.show_hidden = b;
      }
      if let Ok(n) = ui_tbl.get::<u64>("max_list_items")
      {
        cfg_mut.ui.max_list_items = n as usize;
      }
      if let Ok(s) = ui_tbl.get::<String>("date_format")
      {
        cfg_mut.ui.date_format = Some(s);
      }
      if let Ok(s) = ui_tbl.get::<String>("display_mode")
      {
        cfg_mut.ui.display_mode = Some(s);
      }
      if let Ok(s) = ui_tbl.get::<String>("sort")
      {
        cfg_mut.ui.sort = Some(s);
      }
      if let Ok(b) = ui_tbl.get::<bool>("sort_reverse")
      {
        cfg_mut.ui.sort_reverse = Some(b);
      }
      if let Ok(b) = ui_tbl.get::<bool>("confirm_delete")
      {
        cfg_mut.ui.confirm_delete = b;
      }
      if let Ok(s) = ui_tbl.get::<String>("theme")
      {
        match s.to_ascii_lowercase().as_str()
        {
          "light" => cfg_mut.ui.theme = super::ThemeVariant::Light,
          "dark" => cfg_mut.ui.theme = super::ThemeVariant::Dark,
          other =>
          {
            return Err(mlua::Error::external(format!(
              "ui.theme must be 'dark' or 'light', got '{}'",
              other
            )));
          }
        }
      }
      if let Ok(theme_tbl) = ui_tbl.get::<Table>("theme_overrides")
      {
        let mut th = cfg_mut.ui.theme_overrides.clone().unwrap_or_default();
        super::theme::merge_theme_table(&theme_tbl, &mut th);
        cfg_mut.ui.theme_overrides = Some(th);
      }
    }
    Ok(true)
  })?;

  // vlt.map(seq, action, description?)
  let maps_clone = Rc::clone(&maps);
  let map_fn = lua.create_function(
    move |_, (seq, action, desc): (String, String, Option<String>)| {
      if seq.trim().is_empty() || action.trim().is_empty()
      {
        return Err(mlua::Error::external(
          "vlt.map requires a sequence and an action",
        ));
      }
      maps_clone.borrow_mut().push(KeyMapping {
        sequence: seq,
        action,
        description: desc,
      });
      Ok(true)
    },
  )?;

  vlt.set("config", config_fn)?;
  vlt.set("map", map_fn)?;
  globals.set("vlt", vlt)?;
  Ok(())
}
