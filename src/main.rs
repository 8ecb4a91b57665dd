//! Skyward demo launcher
//!
//! Usage: `skyward [walk|glide|throttle]`. Without an argument the demo named
//! in `config/default.toml` (section `demo`, key `kind`) runs.

use std::process::ExitCode;

use skyward::app;
use skyward::demos::DemoKind;

fn main() -> ExitCode {
    let kind = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<DemoKind>() {
            Ok(kind) => Some(kind),
            Err(e) => {
                eprintln!("{}", e);
                eprintln!("Usage: skyward [walk|glide|throttle]");
                return ExitCode::from(2);
            }
        },
        None => None,
    };

    app::launch(kind)
}
