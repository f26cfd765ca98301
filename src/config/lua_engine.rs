use mlua::{
  Lua,
  LuaOptions,
  Result as LuaResult,
  StdLib,
  Table,
};

/// LuaEngine creates a sandboxed Lua runtime for vlt configuration.
/// Safety model:
/// - Load only BASE | STRING | TABLE | MATH stdlibs (no io/os/debug/package).
/// - Provide a `vlt` table with stub functions (`config`, `map`).
/// - A restricted `require()` is installed by the loader.
pub struct LuaEngine
{
  lua: Lua,
}

impl LuaEngine
{
  /// Initialize a new sandboxed Lua state.
  pub fn new() -> LuaResult<Self>
  {
    let lua = Lua::new_with(
      StdLib::STRING | StdLib::TABLE | StdLib::MATH,
      LuaOptions::default(),
    )?;

    // Inject `vlt` namespace with stub APIs that accept calls from user
    // config. The loader replaces these with accumulating versions.
    {
      let globals = lua.globals();
      let vlt: Table = lua.create_table()?;

      let config_fn = lua.create_function(|_, _tbl: mlua::Value| Ok(true))?;
      let map_fn = lua.create_function(
        |_, (_seq, _action, _desc): (String, String, Option<String>)| Ok(true),
      )?;

      vlt.set("config", config_fn)?;
      vlt.set("map", map_fn)?;

      globals.set("vlt", vlt)?;
    }

    Ok(Self { lua })
  }

  pub fn lua(&self) -> &Lua
  {
    &self.lua
  }
}
