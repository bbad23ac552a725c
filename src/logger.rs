// Process logger behind the `log` facade: mirrors records to stderr, appends warn+
// lines to log.txt and installs a panic hook that records panics with a backtrace.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::backtrace::Backtrace;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

const LOG_FILE_NAME: &str = "log.txt";

lazy_static! {
    static ref MIRROR_STDERR: bool = {
        let v = std::env::var("CARD_LOG_STDERR").unwrap_or_else(|_| "1".to_string());
        is_truthy(&v)
    };
}
lazy_static! {
    static ref LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);
}

struct CardLogger;

impl Log for CardLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if let Some(max) = log::max_level().to_level() {
            metadata.level() <= max
        } else {
            false
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(
            &timestamp_millis(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );

        if *MIRROR_STDERR {
            eprintln!("{}", line);
        }

        if matches!(record.level(), Level::Warn | Level::Error) {
            write_file_line(&line);
        }
    }

    fn flush(&self) {
        if let Ok(mut lf) = LOG_FILE.lock() {
            if let Some(f) = lf.as_mut() {
                let _ = f.flush();
            }
        }
    }
}

fn is_truthy(v: &str) -> bool {
    matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn format_line(ts: &str, level: Level, target: &str, msg: &str) -> String {
    format!("[{}] [{:>5}] {}: {}", ts, level, target, msg)
}

/// Level from a `RUST_LOG`-style value. Only the most verbose level word counts;
/// per-module directives are not supported.
fn parse_level(value: &str) -> Option<LevelFilter> {
    let v = value.to_lowercase();
    if v.contains("trace") {
        Some(LevelFilter::Trace)
    } else if v.contains("debug") {
        Some(LevelFilter::Debug)
    } else if v.contains("info") {
        Some(LevelFilter::Info)
    } else if v.contains("warn") {
        Some(LevelFilter::Warn)
    } else if v.contains("error") {
        Some(LevelFilter::Error)
    } else if v.contains("off") {
        Some(LevelFilter::Off)
    } else {
        None
    }
}

pub fn init() {
    let _ = log::set_boxed_logger(Box::new(CardLogger));

    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Info);
    log::set_max_level(level);

    {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE_NAME)
            .ok();
        if let Ok(mut lf) = LOG_FILE.lock() {
            *lf = file;
        }
    }

    install_panic_hook();

    log::info!("logger initialized at level {level} (warn+ persisted to {LOG_FILE_NAME})");
}

fn timestamp_millis() -> String {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn write_file_line(line: &str) {
    if let Ok(mut lf) = LOG_FILE.lock() {
        if let Some(f) = lf.as_mut() {
            let _ = writeln!(f, "{}", line);
            let _ = f.flush();
        }
    }
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            *s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else {
            "Box<Any>"
        };

        let loc = if let Some(l) = panic_info.location() {
            format!("{}:{}:{}", l.file(), l.line(), l.column())
        } else {
            "unknown".to_string()
        };

        let bt = Backtrace::force_capture();
        write_file_line(&format!(
            "[{}] [ERROR] panic at {loc}: {msg}",
            timestamp_millis()
        ));
        for line in format!("{bt:?}").lines() {
            write_file_line(line);
        }

        log::error!("panic at {loc}: {msg}");
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_values() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("product_card=TRACE"), Some(LevelFilter::Trace));
        assert_eq!(parse_level("warn"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn stderr_switch_values() {
        assert!(is_truthy("ON"));
        assert!(is_truthy("1"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("nope"));
    }

    #[test]
    fn line_format() {
        let line = format_line("12.345", Level::Warn, "product_card::app", "image missing");
        assert_eq!(line, "[12.345] [ WARN] product_card::app: image missing");
    }
}
