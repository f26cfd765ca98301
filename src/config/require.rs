use mlua::{
  Error as LuaError,
  Lua,
  Table,
  Value,
};
use std::path::{
  Path,
  PathBuf,
};

const LOADED_KEY: &str = "vlt.loaded";

/// Install a sandboxed `require` that resolves `a.b` to
/// `<config-root>/lua/a/b.lua`. Loaded modules are cached per engine so a
/// module body runs at most once, matching stock Lua semantics.
pub(crate) fn install_require(
  lua: &Lua,
  lua_root: &Path,
) -> mlua::Result<()>
{
  let root = lua_root.to_path_buf();
  lua.set_named_registry_value(LOADED_KEY, lua.create_table()?)?;
  let require_fn = lua.create_function(move |lua, name: String| {
    let cache: Table = lua.named_registry_value(LOADED_KEY)?;
    if let Some(hit) = cache.get::<Option<Value>>(name.as_str())?
    {
      return Ok(hit);
    }
    let file = resolve_module(&root, &name)?;
    let code = std::fs::read_to_string(&file)
      .map_err(|e| LuaError::external(format!("require '{name}': {e}")))?;
    let value = lua.load(&code).set_name(name.as_str()).eval::<Value>()?;
    // Modules that return nothing still count as loaded.
    let stored =
      if value.is_nil() { Value::Boolean(true) } else { value.clone() };
    cache.set(name.as_str(), stored)?;
    Ok(value)
  })?;
  lua.globals().set("require", require_fn)
}

/// Map a dotted module name onto the lua directory, refusing anything that
/// could escape it.
fn resolve_module(
  root: &Path,
  name: &str,
) -> mlua::Result<PathBuf>
{
  let clean = !name.is_empty()
    && !name.contains("..")
    && name
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
  if !clean
  {
    return Err(LuaError::external(format!("bad module name '{name}'")));
  }
  let candidate = root.join(name.replace('.', "/")).with_extension("lua");
  let file = std::fs::canonicalize(&candidate).map_err(|e| {
    LuaError::external(format!("module '{name}' not found: {e}"))
  })?;
  let base = std::fs::canonicalize(root)
    .map_err(|e| LuaError::external(format!("{e}")))?;
  if !file.starts_with(&base)
  {
    return Err(LuaError::external(format!(
      "module '{name}' escapes the config tree"
    )));
  }
  Ok(file)
}
