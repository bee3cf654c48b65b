#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Set up the `log` backend for the word-search front ends.
///
/// The CLI logs to stderr through `env_logger` (`RUST_LOG` overrides the
/// level picked from `debug_enabled`); the browser build logs to the
/// devtools console through `console_log`. Build and completion events are
/// logged at `info`, each validation step at `debug`.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled { log::Level::Debug } else { log::Level::Info };

        if let Err(e) = console_log::init_with_level(level) {
            let msg = format!("wordsearch: console logging disabled ({e})");
            web_sys::console::error_1(&msg.into());
            return;
        }
        log::debug!("console logging at {level}");
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled { LevelFilter::Debug } else { LevelFilter::Info };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }

        // tests may call this more than once
        if builder.try_init().is_ok() {
            log::debug!("stderr logging at {level}, RUST_LOG overrides");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::init_logger;

    #[test]
    fn test_init_logger_twice_keeps_first() {
        init_logger(true);
        init_logger(false);
        log::debug!("still logging");
    }
}
