use std::{
  cell::RefCell,
  fs,
  io,
  path::Path,
  rc::Rc,
};

use super::{
  Config,
  ConfigPaths,
  KeyMapping,
  LuaEngine,
};

pub type ConfigArtifacts = (Config, Vec<KeyMapping>);

/// Load configuration from the discovered `init.lua`, if present.
///
/// Built-in defaults (config values and keymaps) always apply first; a
/// missing entry file leaves them untouched. The Lua engine is dropped once
/// the artifacts are extracted since no callbacks outlive the load.
pub fn load_config(paths: &ConfigPaths) -> io::Result<ConfigArtifacts>
{
  let engine =
    LuaEngine::new().map_err(|e| io_err(format!("lua init failed: {e}")))?;
  let lua = engine.lua();

  let config_acc = Rc::new(RefCell::new(Config::default()));
  let keymaps_acc: Rc<RefCell<Vec<KeyMapping>>> =
    Rc::new(RefCell::new(super::defaults::default_keymaps()));

  super::install_vlt_api(lua, Rc::clone(&config_acc), Rc::clone(&keymaps_acc))
    .map_err(|e| io_err(format!("vlt api install failed: {e}")))?;
  super::install_require(lua, &paths.root.join("lua"))
    .map_err(|e| io_err(format!("require install failed: {e}")))?;

  if paths.exists
  {
    let code = fs::read_to_string(&paths.entry)
      .map_err(|e| io_err(format!("read init.lua failed: {e}")))?;
    crate::trace::log(format!(
      "[lua] exec user config: {}",
      paths.entry.to_string_lossy()
    ));
    let chunk = lua.load(&code).set_name(paths.entry.to_string_lossy());
    if let Err(e) = chunk.exec()
    {
      crate::trace::log(format!(
        "[lua] user config error ({}): {}",
        paths.entry.to_string_lossy(),
        e
      ));
      return Err(io_err(format!("init.lua execution failed: {e}")));
    }
  }

  let cfg = config_acc.borrow().clone();
  let maps = keymaps_acc.borrow().clone();
  Ok((cfg, maps))
}

/// Load configuration from an inline chunk. Used by integration tests to
/// fabricate configurations without touching the filesystem.
pub fn load_config_from_code(
  code: &str,
  root: Option<&Path>,
) -> io::Result<ConfigArtifacts>
{
  let engine =
    LuaEngine::new().map_err(|e| io_err(format!("lua init failed: {e}")))?;
  let lua = engine.lua();

  let config_acc = Rc::new(RefCell::new(Config::default()));
  let keymaps_acc: Rc<RefCell<Vec<KeyMapping>>> =
    Rc::new(RefCell::new(super::defaults::default_keymaps()));

  super::install_vlt_api(lua, Rc::clone(&config_acc), Rc::clone(&keymaps_acc))
    .map_err(|e| io_err(format!("vlt api install failed: {e}")))?;

  let base = match root
  {
    Some(p) => p.to_path_buf(),
    None =>
    {
      std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."))
    }
  };
  super::install_require(lua, &base.join("lua"))
    .map_err(|e| io_err(format!("require install failed: {e}")))?;

  crate::trace::log("[lua] exec inline init.lua");
  lua.load(code).set_name("inline init.lua").exec().map_err(|e| {
    crate::trace::log(format!("[lua] inline init.lua error: {}", e));
    io_err(format!("inline init.lua execution failed: {e}"))
  })?;

  let cfg = config_acc.borrow().clone();
  let maps = keymaps_acc.borrow().clone();
  Ok((cfg, maps))
}

fn io_err(msg: String) -> io::Error
{
  io::Error::other(msg)
}
