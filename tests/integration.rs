use std::fs;
use std::path::Path;

use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyModifiers,
};
use vlt::{
  App,
  config,
  input::handle_key,
};

mod config_tests
{
  #[test]
  fn config_overlay_and_keymaps()
  {
    let code = r##"
vlt.config({
  config_version = 1,
  keys = { sequence_timeout_ms = 600 },
  limits = { max_upload_bytes = 10485760 },
  ui = {
    show_hidden = true,
    max_list_items = 1234,
    date_format = "%Y",
    display_mode = "friendly",
    sort = "size",
    sort_reverse = true,
    confirm_delete = false,
    theme = "light",
    theme_overrides = { selected_item_fg = "magenta", pane_bg = "#202020" },
  },
})

vlt.map("x", "stats", "Stats shortcut")
"##;

    let (cfg, maps) =
      vlt::config::load_config_from_code(code, Some(std::path::Path::new(".")))
        .expect("load config");

    assert_eq!(cfg.config_version, 1);
    assert_eq!(cfg.keys.sequence_timeout_ms, 600);
    assert_eq!(cfg.limits.max_upload_bytes, 10 * 1024 * 1024);
    assert!(cfg.ui.show_hidden);
    assert_eq!(cfg.ui.max_list_items, 1234);
    assert_eq!(cfg.ui.date_format.as_deref(), Some("%Y"));
    assert_eq!(cfg.ui.display_mode.as_deref(), Some("friendly"));
    assert_eq!(cfg.ui.sort.as_deref(), Some("size"));
    assert_eq!(cfg.ui.sort_reverse, Some(true));
    assert!(!cfg.ui.confirm_delete);
    assert_eq!(cfg.ui.theme, vlt::config::ThemeVariant::Light);
    let overrides = cfg.ui.theme_overrides.as_ref().expect("overrides");
    assert_eq!(overrides.selected_item_fg.as_deref(), Some("magenta"));
    assert_eq!(overrides.pane_bg.as_deref(), Some("#202020"));

    // defaults stay in place, user mapping is appended
    assert!(maps.iter().any(|m| m.sequence == "q" && m.action == "quit"));
    let last = maps.last().expect("maps");
    assert_eq!(last.sequence, "x");
    assert_eq!(last.action, "stats");
    assert_eq!(last.description.as_deref(), Some("Stats shortcut"));
  }

  #[test]
  fn invalid_theme_value_is_an_error()
  {
    let code = r#"vlt.config({ ui = { theme = "solarized" } })"#;
    let err = vlt::config::load_config_from_code(code, None).unwrap_err();
    assert!(err.to_string().contains("theme"), "{}", err);
  }

  #[test]
  fn defaults_survive_an_empty_config()
  {
    let (cfg, maps) =
      vlt::config::load_config_from_code("-- nothing here\n", None)
        .expect("load config");
    assert_eq!(cfg.ui.max_list_items, 5000);
    assert!(cfg.ui.confirm_delete);
    assert_eq!(cfg.ui.theme, vlt::config::ThemeVariant::Dark);
    assert_eq!(cfg.limits.max_upload_bytes, 100 * 1024 * 1024);
    assert!(!maps.is_empty());
  }

  #[test]
  fn require_loads_modules_from_the_lua_dir()
  {
    let tmp = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(tmp.path().join("lua")).expect("mkdir");
    std::fs::write(tmp.path().join("lua/limits.lua"), "return { cap = 4096 }")
      .expect("write module");
    let code = r#"
local limits = require("limits")
vlt.config({ limits = { max_upload_bytes = limits.cap } })
"#;
    let (cfg, _maps) =
      vlt::config::load_config_from_code(code, Some(tmp.path()))
        .expect("load config");
    assert_eq!(cfg.limits.max_upload_bytes, 4096);
  }

  #[test]
  fn require_runs_a_module_body_only_once()
  {
    let tmp = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(tmp.path().join("lua")).expect("mkdir");
    std::fs::write(
      tmp.path().join("lua/counter.lua"),
      "bumps = (bumps or 0) + 1\nreturn { n = bumps }",
    )
    .expect("write module");
    let code = r#"
local a = require("counter")
local b = require("counter")
vlt.config({ limits = { max_upload_bytes = a.n + b.n } })
"#;
    let (cfg, _maps) =
      vlt::config::load_config_from_code(code, Some(tmp.path()))
        .expect("load config");
    // the cached table is handed back, so both requires see n == 1
    assert_eq!(cfg.limits.max_upload_bytes, 2);
  }

  #[test]
  fn require_refuses_names_that_leave_the_config_tree()
  {
    let tmp = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(tmp.path().join("lua")).expect("mkdir");
    let err =
      vlt::config::load_config_from_code("require('../init')", Some(tmp.path()))
        .unwrap_err();
    assert!(err.to_string().contains("bad module name"), "{}", err);
  }

  #[test]
  fn effective_theme_merges_overrides_over_palette()
  {
    use vlt::config::{
      ThemeVariant,
      UiTheme,
      theme::effective_theme,
    };
    let over = UiTheme {
      selected_item_fg: Some("red".to_string()),
      ..UiTheme::default()
    };
    let th = effective_theme(ThemeVariant::Dark, Some(&over));
    assert_eq!(th.selected_item_fg.as_deref(), Some("red"));
    // untouched fields come from the palette
    assert_eq!(th.title_fg.as_deref(), Some("yellow"));

    let light = effective_theme(ThemeVariant::Light, None);
    assert_eq!(light.pane_bg.as_deref(), Some("white"));
  }

  #[test]
  fn list_rows_pick_up_item_colors_from_the_theme()
  {
    use ratatui::style::Color;
    use vlt::{
      config::{
        ThemeVariant,
        UiTheme,
        theme::effective_theme,
      },
      ui::panes::list_style,
    };
    let over = UiTheme {
      item_fg: Some("gray".to_string()),
      item_bg: Some("#101010".to_string()),
      ..UiTheme::default()
    };
    let th = effective_theme(ThemeVariant::Dark, Some(&over));
    let style = list_style(&th);
    assert_eq!(style.fg, Some(Color::Gray));
    assert_eq!(style.bg, Some(Color::Rgb(0x10, 0x10, 0x10)));
  }
}

fn key(c: char) -> KeyEvent
{
  KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn code(k: KeyCode) -> KeyEvent
{
  KeyEvent::new(k, KeyModifiers::NONE)
}

fn type_str(
  app: &mut App,
  s: &str,
)
{
  for c in s.chars()
  {
    handle_key(app, key(c)).expect("key");
  }
}

/// Vault fixture with a few notes and images, sorted by name for
/// deterministic ordering.
fn test_app(root: &Path) -> App
{
  let notes = root.join("notes");
  let images = root.join("images");
  fs::create_dir_all(&notes).unwrap();
  fs::create_dir_all(&images).unwrap();
  fs::write(notes.join("Invoice_2024.pdf"), b"a").unwrap();
  fs::write(notes.join("Report_Q1.docx"), b"bb").unwrap();
  fs::write(notes.join("invoice_summary.txt"), b"ccc").unwrap();
  fs::write(images.join("invoice_scan.png"), b"d").unwrap();
  fs::write(images.join("holiday.jpg"), b"e").unwrap();

  let mut cfg = config::Config::default();
  cfg.ui.sort = Some("name".to_string());
  cfg.ui.sort_reverse = Some(false);
  App::with_config(root, cfg, config::default_keymaps())
}

#[test]
fn typing_a_search_filters_per_keystroke()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let mut app = test_app(tmp.path());
  assert_eq!(app.visible_len(), 3);

  handle_key(&mut app, key('/')).unwrap();
  assert!(app.is_searching());

  type_str(&mut app, "inv");
  assert_eq!(app.query(), "inv");
  assert_eq!(
    app.visible_names(),
    vec!["Invoice_2024.pdf", "invoice_summary.txt"]
  );

  type_str(&mut app, "oice_2");
  assert_eq!(app.visible_names(), vec!["Invoice_2024.pdf"]);

  // backspace widens the match again
  handle_key(&mut app, code(KeyCode::Backspace)).unwrap();
  handle_key(&mut app, code(KeyCode::Backspace)).unwrap();
  assert_eq!(app.query(), "invoice");
  assert_eq!(app.visible_names().len(), 2);
}

#[test]
fn set_query_applies_without_input_events()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let mut app = test_app(tmp.path());
  app.set_query("summary");
  assert_eq!(app.visible_names(), vec!["invoice_summary.txt"]);
  app.set_query("");
  assert_eq!(app.visible_len(), 3);
}

#[test]
fn esc_clears_the_query_and_restores_rows()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let mut app = test_app(tmp.path());

  handle_key(&mut app, key('/')).unwrap();
  type_str(&mut app, "zzz");
  assert_eq!(app.visible_len(), 0);

  handle_key(&mut app, code(KeyCode::Esc)).unwrap();
  assert!(!app.is_searching());
  assert_eq!(app.query(), "");
  assert_eq!(app.visible_len(), 3);
}

#[test]
fn enter_keeps_the_query_active_after_leaving_search()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let mut app = test_app(tmp.path());

  handle_key(&mut app, key('/')).unwrap();
  type_str(&mut app, "report");
  handle_key(&mut app, code(KeyCode::Enter)).unwrap();
  assert!(!app.is_searching());
  assert_eq!(app.visible_names(), vec!["Report_Q1.docx"]);

  // Esc outside search mode drops the lingering filter
  handle_key(&mut app, code(KeyCode::Esc)).unwrap();
  assert_eq!(app.visible_len(), 3);
}

#[test]
fn one_query_spans_every_tab()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let mut app = test_app(tmp.path());

  handle_key(&mut app, key('/')).unwrap();
  type_str(&mut app, "invoice");
  handle_key(&mut app, code(KeyCode::Enter)).unwrap();

  handle_key(&mut app, key('2')).unwrap();
  assert_eq!(app.active_tab(), vlt::core::catalog::Category::Images);
  assert_eq!(app.visible_names(), vec!["invoice_scan.png"]);

  handle_key(&mut app, key('3')).unwrap();
  assert_eq!(app.visible_len(), 0);

  handle_key(&mut app, key('1')).unwrap();
  assert_eq!(app.visible_names().len(), 2);
}

#[test]
fn delete_asks_for_confirmation_first()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let mut app = test_app(tmp.path());
  let victim = tmp.path().join("notes").join("Invoice_2024.pdf");

  app.select_visible_position(0);
  assert_eq!(app.selected_name().as_deref(), Some("Invoice_2024.pdf"));

  handle_key(&mut app, key('d')).unwrap();
  assert!(app.get_show_confirm());

  // n cancels
  handle_key(&mut app, key('n')).unwrap();
  assert!(!app.get_show_confirm());
  assert!(victim.exists());
  assert_eq!(app.visible_len(), 3);

  // y deletes and the catalog reloads
  handle_key(&mut app, key('d')).unwrap();
  handle_key(&mut app, key('y')).unwrap();
  assert!(!victim.exists());
  assert_eq!(app.last_message(), Some("Deleted"));
  assert_eq!(app.visible_len(), 2);
}

#[test]
fn import_prompt_copies_the_file_in()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let mut app = test_app(tmp.path());
  let src = tmp.path().join("fresh.txt");
  fs::write(&src, b"NEW").unwrap();

  handle_key(&mut app, key('a')).unwrap();
  assert!(app.get_show_prompt());

  type_str(&mut app, src.to_str().unwrap());
  handle_key(&mut app, code(KeyCode::Enter)).unwrap();

  assert!(!app.get_show_prompt());
  assert!(tmp.path().join("notes").join("fresh.txt").exists());
  assert_eq!(app.last_message(), Some("Imported 'fresh.txt'"));
  assert_eq!(app.visible_len(), 4);
}

#[test]
fn failed_import_keeps_the_prompt_open_with_a_message()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let mut app = test_app(tmp.path());

  handle_key(&mut app, key('a')).unwrap();
  type_str(&mut app, "/definitely/not/a/file.txt");
  handle_key(&mut app, code(KeyCode::Enter)).unwrap();

  assert!(app.get_show_prompt());
  assert!(app.last_message().unwrap_or("").starts_with("Import error"));

  handle_key(&mut app, code(KeyCode::Esc)).unwrap();
  assert!(!app.get_show_prompt());
}

#[test]
fn stats_overlay_opens_and_any_key_closes_it()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let mut app = test_app(tmp.path());

  handle_key(&mut app, key('S')).unwrap();
  assert!(app.get_show_stats());
  handle_key(&mut app, key('x')).unwrap();
  assert!(!app.get_show_stats());
}

#[test]
fn keys_overlay_lists_bindings_with_descriptions()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let mut app = test_app(tmp.path());

  handle_key(&mut app, key('?')).unwrap();
  assert!(app.get_show_keys());
  let lines = app.overlay_lines().expect("keys overlay lines");
  assert!(lines.iter().any(|l| l.contains("q") && l.contains("Quit vlt")));
  assert!(lines.iter().any(|l| l.contains("Delete selected item")));

  handle_key(&mut app, key('x')).unwrap();
  assert!(!app.get_show_keys());
}

#[test]
fn theme_toggle_flips_between_dark_and_light()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let mut app = test_app(tmp.path());
  assert_eq!(app.theme_variant(), config::ThemeVariant::Dark);
  handle_key(&mut app, key('t')).unwrap();
  assert_eq!(app.theme_variant(), config::ThemeVariant::Light);
  assert_eq!(app.last_message(), Some("Theme: light"));
  handle_key(&mut app, key('t')).unwrap();
  assert_eq!(app.theme_variant(), config::ThemeVariant::Dark);
  assert_eq!(app.recent_messages_len(), 2);
}

#[test]
fn sort_sequences_reorder_the_listing()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let mut app = test_app(tmp.path());
  assert_eq!(app.get_sort_key(), vlt::actions::SortKey::Name);

  type_str(&mut app, "ss");
  assert_eq!(app.get_sort_key(), vlt::actions::SortKey::Size);
  assert_eq!(
    app.visible_names(),
    vec!["Invoice_2024.pdf", "Report_Q1.docx", "invoice_summary.txt"]
  );

  type_str(&mut app, "sr");
  assert!(app.get_sort_reverse());
  assert_eq!(
    app.visible_names(),
    vec!["invoice_summary.txt", "Report_Q1.docx", "Invoice_2024.pdf"]
  );
}

#[test]
fn quit_key_sets_the_flag()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let mut app = test_app(tmp.path());
  let exit = handle_key(&mut app, key('q')).unwrap();
  assert!(exit);
  assert!(app.get_quit());
}

#[test]
fn later_keymap_bindings_win()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let mut app = test_app(tmp.path());
  let mut maps = config::default_keymaps();
  maps.push(config::KeyMapping {
    sequence:    "m".to_string(),
    action:      "stats".to_string(),
    description: None,
  });
  app.set_keymaps(maps);
  handle_key(&mut app, key('m')).unwrap();
  assert!(app.get_show_stats());
  assert!(!app.get_show_messages());
}
