use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

fn enabled() -> bool {
    matches!(std::env::var("VLT_TRACE"), Ok(v) if !v.is_empty() && v != "0")
}

fn trace_file() -> PathBuf {
    if let Ok(fp) = std::env::var("VLT_TRACE_FILE") {
        return PathBuf::from(fp);
    }
    let tmp = std::env::var("TMPDIR").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(tmp).join("vlt-trace.log")
}

fn now_millis() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Append one line to the trace log when `VLT_TRACE` is set.
pub fn log<S: AsRef<str>>(s: S) {
    if !enabled() {
        return;
    }
    let line = format!("{} {}\n", now_millis(), s.as_ref());
    let _ = OpenOptions::new()
        .create(true)
        .append(true)
        .open(trace_file())
        .and_then(|mut f| f.write_all(line.as_bytes()));
}

/// Install a panic hook that logs the panic (message, location, backtrace)
/// and restores the terminal so the panic is visible after the alt screen.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let msg = if let Some(s) = info.payload().downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            String::from("<non-string panic payload>")
        };
        let loc = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "<unknown>".to_string());
        log(format!("[panic] {msg} @ {loc}"));
        log(format!(
            "[panic] backtrace:\n{}",
            std::backtrace::Backtrace::force_capture()
        ));
        let _ = crossterm::terminal::disable_raw_mode();
        let mut out = std::io::stdout();
        let _ = crossterm::execute!(out, crossterm::terminal::LeaveAlternateScreen);
    }));
}
