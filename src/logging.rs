use std::cell::RefCell;
use log::{Level, LevelFilter};
use crate::game_tick::game_tick;

thread_local! {
    static LOG_BUFFER: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Takes all log lines buffered since the last call.
pub fn take_log() -> Vec<String> {
    LOG_BUFFER.with(|buffer| buffer.take())
}

/// Writes records to the buffer drained by `take_log`, or straight to the console with
/// `separate_messages`.
struct ConsoleLog;

/// Sends records as in-game notifications.
struct NotifyLog;

impl log::Log for ConsoleLog {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let line = record.args().to_string();
        #[cfg(test)]
        println!("{}", line);
        #[cfg(all(not(test), feature = "separate_messages"))]
        web_sys::console::log_1(&js_sys::JsString::from(line));
        #[cfg(all(not(test), not(feature = "separate_messages")))]
        LOG_BUFFER.with(|buffer| buffer.borrow_mut().push(line));
    }

    fn flush(&self) {}
}

impl log::Log for NotifyLog {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    #[allow(unused_variables)]
    fn log(&self, record: &log::Record<'_>) {
        #[cfg(not(test))]
        screeps::game::notify(&record.args().to_string(), None);
    }

    fn flush(&self) {}
}

/// Console markup around a line of given level. Tests get plain text tags instead.
fn decoration(level: Level) -> (&'static str, &'static str) {
    if cfg!(test) {
        match level {
            Level::Trace => ("[TRACE] ", ""),
            Level::Debug => ("[DEBUG] ", ""),
            _ => ("", ""),
        }
    } else {
        match level {
            Level::Trace => ("<span style=\"color: #666\">", "</span>"),
            Level::Debug => ("<span style=\"color: #66b\">", "</span>"),
            Level::Info => ("", ""),
            Level::Warn | Level::Error => ("<span style=\"color: #f99\">", "</span>"),
        }
    }
}

#[cfg(test)]
static LOGGING_INITIALIZED: parking_lot::Mutex<bool> = parking_lot::Mutex::new(false);

/// Sets up logging of records up to given level. Warnings and errors are also sent as
/// notifications, prefixed by the game tick.
pub fn init_logging(verbosity: LevelFilter) {
    #[cfg(test)]
    {
        let mut initialized = LOGGING_INITIALIZED.lock();
        if *initialized {
            return;
        }
        *initialized = true;
    }

    let result = fern::Dispatch::new()
        .level(verbosity)
        .format(|out, message, record| {
            let (prefix, postfix) = decoration(record.level());
            match record.level() {
                Level::Info => out.finish(format_args!("{}", message)),
                Level::Warn | Level::Error => out.finish(format_args!(
                    "{}[{}] {}: {}{}",
                    prefix,
                    record.level(),
                    record.target(),
                    message,
                    postfix
                )),
                Level::Debug | Level::Trace => {
                    out.finish(format_args!("{}{}: {}{}", prefix, record.target(), message, postfix))
                }
            }
        })
        .chain(Box::new(ConsoleLog) as Box<dyn log::Log>)
        .chain(
            fern::Dispatch::new()
                .level(LevelFilter::Warn)
                .format(|out, message, _| out.finish(format_args!("[{}] {}", game_tick(), message)))
                .chain(Box::new(NotifyLog) as Box<dyn log::Log>),
        )
        .apply();

    // The logger may only be set once per VM. The first one stays.
    if let Err(e) = result {
        log::warn!("Logging was already set up: {}.", e);
    }
}

#[cfg(test)]
mod tests {
    use log::Level;
    use crate::logging::{decoration, init_logging, take_log};

    #[test]
    fn test_init_logging_twice() {
        init_logging(log::LevelFilter::Trace);
        init_logging(log::LevelFilter::Debug);
        log::info!("Logging works.");
        // Tests print to stdout instead of buffering.
        assert!(take_log().is_empty());
    }

    #[test]
    fn test_decoration() {
        assert_eq!(decoration(Level::Debug), ("[DEBUG] ", ""));
        assert_eq!(decoration(Level::Warn), ("", ""));
    }
}
