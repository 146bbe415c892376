//! Browser console logging.
//!
//! `tracing` events are forwarded to the `log` facade (no subscriber runs in
//! the page), and `console_log` prints them to the developer console.

use std::str::FromStr;

use log::Level;

/// Install the panic hook and console logger at `level`.
///
/// Safe to call more than once: later calls only adjust the level. An
/// unrecognised level falls back to `info`.
pub fn init(level: &str) {
    console_error_panic_hook::set_once();
    let level = parse_level(level);
    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
    }
}

fn parse_level(level: &str) -> Level {
    Level::from_str(level).unwrap_or(Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_levels_case_insensitively() {
        assert_eq!(parse_level("debug"), Level::Debug);
        assert_eq!(parse_level("WARN"), Level::Warn);
    }

    #[test]
    fn should_fall_back_to_info() {
        assert_eq!(parse_level("verbose"), Level::Info);
        assert_eq!(parse_level(""), Level::Info);
    }
}
