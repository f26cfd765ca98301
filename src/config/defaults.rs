use super::KeyMapping;

/// Built-in default keymaps defined in Rust.
/// Applied before user config; `vlt.map` bindings with the same sequence win.
pub fn default_keymaps() -> Vec<KeyMapping>
{
  vec![
    KeyMapping {
      sequence:    "q".into(),
      action:      "quit".into(),
      description: Some("Quit vlt".into()),
    },
    // Search
    KeyMapping {
      sequence:    "/".into(),
      action:      "search:start".into(),
      description: Some("Search the active tab".into()),
    },
    // Tabs
    KeyMapping {
      sequence:    "1".into(),
      action:      "tab:notes".into(),
      description: Some("Notes tab".into()),
    },
    KeyMapping {
      sequence:    "2".into(),
      action:      "tab:images".into(),
      description: Some("Images tab".into()),
    },
    KeyMapping {
      sequence:    "3".into(),
      action:      "tab:videos".into(),
      description: Some("Videos tab".into()),
    },
    // Sorting
    KeyMapping {
      sequence:    "sn".into(),
      action:      "sort:name".into(),
      description: Some("Sort by name".into()),
    },
    KeyMapping {
      sequence:    "ss".into(),
      action:      "sort:size".into(),
      description: Some("Sort by size".into()),
    },
    KeyMapping {
      sequence:    "st".into(),
      action:      "sort:type".into(),
      description: Some("Sort by type".into()),
    },
    KeyMapping {
      sequence:    "sd".into(),
      action:      "sort:date".into(),
      description: Some("Sort by date".into()),
    },
    KeyMapping {
      sequence:    "sr".into(),
      action:      "sort:reverse:toggle".into(),
      description: Some("Toggle reverse sort".into()),
    },
    // Navigation
    KeyMapping {
      sequence:    "gg".into(),
      action:      "nav:top".into(),
      description: Some("Go to top".into()),
    },
    KeyMapping {
      sequence:    "G".into(),
      action:      "nav:bottom".into(),
      description: Some("Go to bottom".into()),
    },
    // Vault operations
    KeyMapping {
      sequence:    "d".into(),
      action:      "delete".into(),
      description: Some("Delete selected item".into()),
    },
    KeyMapping {
      sequence:    "a".into(),
      action:      "import".into(),
      description: Some("Import a file into the active tab".into()),
    },
    // Overlays and display
    KeyMapping {
      sequence:    "S".into(),
      action:      "stats".into(),
      description: Some("Vault statistics".into()),
    },
    KeyMapping {
      sequence:    "?".into(),
      action:      "keys".into(),
      description: Some("Key bindings".into()),
    },
    KeyMapping {
      sequence:    "m".into(),
      action:      "messages".into(),
      description: Some("Recent messages".into()),
    },
    KeyMapping {
      sequence:    "t".into(),
      action:      "theme:toggle".into(),
      description: Some("Toggle dark/light theme".into()),
    },
    KeyMapping {
      sequence:    "vf".into(),
      action:      "display:friendly".into(),
      description: Some("Friendly dates and sizes".into()),
    },
    KeyMapping {
      sequence:    "va".into(),
      action:      "display:absolute".into(),
      description: Some("Absolute dates and sizes".into()),
    },
  ]
}
