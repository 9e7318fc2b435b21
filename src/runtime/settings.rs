use crate::config;
use crate::tags::FilenameParser;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("retag: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("retag: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

/// Build the auto-parse matcher; `validate` has already vetted the pattern.
pub fn filename_parser(settings: &config::Settings) -> FilenameParser {
    FilenameParser::new(&settings.tags.filename_pattern).unwrap_or_default()
}
