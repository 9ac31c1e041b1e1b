//! setparam key1=val1 [key2=val2 ...]
//!
//! Rewrites the matching settings of prifi_simul.toml in the working
//! directory.

use std::path::Path;

use setparam::{args, config::SETTINGS_FILE, init_tracing, run, SetParamError, Settings, TARGET};

fn main() {
    let settings = Settings::load(SETTINGS_FILE).unwrap_or_else(|e| {
        eprintln!("Warning: {}", e);
        Settings::default()
    });

    init_tracing(&settings.logging.level);

    match run(Path::new(TARGET), std::env::args().skip(1)) {
        Ok(_) => {}
        Err(SetParamError::Usage(e)) => {
            args::print_usage(&e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
