use vlt::{
  App,
  runtime,
  trace,
};

fn print_version()
{
  println!("vlt {}", env!("CARGO_PKG_VERSION"));
}

fn print_help()
{
  println!(
    "Usage: vlt [OPTIONS] [VAULT]\n\n\
     Options:\n\
       -h, --help            Show this help and exit\n\
       -V, --version         Show version and exit\n\
           --config-dir DIR  Use DIR as the config root (sets VLT_CONFIG_DIR)\n\
           --trace[=FILE]    Enable tracing to FILE (default $TMPDIR/vlt-trace.log)\n\
     Arguments:\n\
       VAULT                 Vault directory to browse (default: current dir)\n"
  );
}

fn main() -> Result<(), Box<dyn std::error::Error>>
{
  use std::env;
  trace::install_panic_hook();

  // Minimal argument parsing (avoid external deps)
  let mut args = env::args().skip(1);
  let mut vault_arg: Option<String> = None;
  while let Some(a) = args.next()
  {
    match a.as_str()
    {
      "-h" | "--help" =>
      {
        print_help();
        return Ok(());
      }
      "-V" | "--version" =>
      {
        print_version();
        return Ok(());
      }
      s if s == "--trace" || s.starts_with("--trace=") =>
      {
        let file = if let Some(eq) = s.split_once('=')
        {
          eq.1.to_string()
        }
        else
        {
          String::new()
        };
        unsafe { env::set_var("VLT_TRACE", "1") };
        if !file.is_empty()
        {
          unsafe { env::set_var("VLT_TRACE_FILE", file) };
        }
      }
      "--config-dir" =>
      {
        if let Some(dir) = args.next()
        {
          unsafe { env::set_var("VLT_CONFIG_DIR", &dir) };
        }
        else
        {
          eprintln!("vlt: --config-dir requires a DIR argument");
          print_help();
          std::process::exit(2);
        }
      }
      s if s.starts_with("--config-dir=") =>
      {
        if let Some((_, dir)) = s.split_once('=')
        {
          unsafe { env::set_var("VLT_CONFIG_DIR", dir) };
        }
      }
      "--" =>
      {
        // Remaining is the positional vault dir (optional)
        vault_arg = args.next();
        break;
      }
      s if s.starts_with('-') =>
      {
        eprintln!("vlt: unknown option: {}", s);
        print_help();
        std::process::exit(2);
      }
      // Positional vault directory
      other =>
      {
        if vault_arg.is_none()
        {
          vault_arg = Some(other.to_string());
        }
      }
    }
  }

  let vault_root = match vault_arg
  {
    Some(dir) => std::path::PathBuf::from(dir),
    None => env::current_dir()?,
  };

  trace::log("[main] starting vlt");
  let mut app = App::new(&vault_root)?;
  if let Err(e) = runtime::run_app(&mut app)
  {
    trace::log(format!("[error] runtime::run_app: {e}"));
    return Err(e);
  }
  Ok(())
}
