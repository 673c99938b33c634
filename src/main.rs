// SPDX-License-Identifier: MPL-2.0
use preview_lens::app::{self, Flags};
use preview_lens::infrastructure::TerminalHost;
use preview_lens::logging;
use std::process::ExitCode;
use std::rc::Rc;

const HELP: &str = "\
preview_lens - check files against the image preview rules

USAGE:
  preview_lens [OPTIONS] <FILE>...

Each FILE is delivered as a selection; `-` clears the selection.
Page teardown fires after the last one.

OPTIONS:
  --lang <LOCALE>      Message language (zh-TW, en-US)
  --config <PATH>      Settings file instead of the user's settings.toml
  --max-size <SIZE>    Largest accepted file, e.g. 5242880, 512KB, 5MB
  -v, --verbose        Debug logging
  -h, --help           Print this help
";

fn main() -> ExitCode {
    let flags = match Flags::from_args(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) if !flags.selections.is_empty() => flags,
        Ok(_) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(flags.verbose);

    let result = app::load_config(&flags).and_then(|config| {
        let host = Rc::new(TerminalHost::stderr());
        app::run(&flags, &config, host, &mut std::io::stdout().lock())
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "preview session failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
