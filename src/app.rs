// SPDX-License-Identifier: MPL-2.0
//! Command-line host wiring.
//!
//! Turns each path on the command line into a selection-changed event on a
//! [`PreviewController`] backed by the terminal host, then fires page
//! teardown and reports what happened.

use crate::application::preview::{Event, Outcome, PreviewController};
use crate::config::{self, Config};
use crate::domain::media::SelectedFile;
use crate::domain::preview::MaxFileSize;
use crate::error::{Error, Result};
use crate::i18n::I18n;
use crate::infrastructure::{fs, HeadlessSurface, TerminalHost};
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

/// Command-line argument that delivers an empty selection.
pub const CLEAR_ARG: &str = "-";

/// Options collected from the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    pub lang: Option<String>,
    pub config_path: Option<PathBuf>,
    pub max_size: Option<u64>,
    pub verbose: bool,
    /// Paths to select, in order; [`CLEAR_ARG`] clears the selection.
    pub selections: Vec<OsString>,
}

impl Flags {
    /// Reads flags from parsed arguments.
    ///
    /// Returns `None` when help was requested. File arguments are kept as
    /// raw OS strings so that paths which are not valid UTF-8 still reach
    /// the file loader.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing or malformed option value.
    pub fn from_args(
        mut args: pico_args::Arguments,
    ) -> std::result::Result<Option<Self>, pico_args::Error> {
        if args.contains(["-h", "--help"]) {
            return Ok(None);
        }

        Ok(Some(Self {
            lang: args.opt_value_from_str("--lang")?,
            config_path: args.opt_value_from_str("--config")?,
            max_size: args.opt_value_from_fn("--max-size", parse_size)?,
            verbose: args.contains(["-v", "--verbose"]),
            selections: args.finish(),
        }))
    }
}

/// Totals reported after teardown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub previewed: usize,
    pub rejected: usize,
    pub cleared: usize,
    /// References still live after teardown; always zero unless a host bug leaks one.
    pub leaked: usize,
    /// Payload bytes still pinned by those references.
    pub pinned_bytes: usize,
}

type Controller = PreviewController<Vec<SelectedFile>, HeadlessSurface, TerminalHost>;

/// Loads the configuration named by `flags`, or the user's default one.
///
/// # Errors
///
/// Returns an error if an explicitly named config file cannot be read.
pub fn load_config(flags: &Flags) -> Result<Config> {
    let mut config = match &flags.config_path {
        Some(path) => config::load_from_path(path)?,
        None => config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to read settings, using defaults");
            Config::default()
        }),
    };
    if let Some(bytes) = flags.max_size {
        config.max_file_size_bytes = Some(bytes);
    }
    Ok(config)
}

/// Runs every selection in `flags` against a terminal-hosted controller.
///
/// Alerts go to `host`'s stream; one report line per event goes to `report`.
///
/// # Errors
///
/// Returns an error if a selected file cannot be read or the report cannot
/// be written. Rejected selections are not errors.
pub fn run(
    flags: &Flags,
    config: &Config,
    host: Rc<TerminalHost>,
    report: &mut dyn Write,
) -> Result<Summary> {
    let i18n = I18n::new(flags.lang.as_deref(), config);
    let options = config.preview_options();
    tracing::debug!(
        locale = %i18n.current_locale(),
        max_bytes = options.max_file_size().bytes(),
        "starting preview session"
    );

    let mut controller: Controller = PreviewController::attach(
        Some(Vec::new()),
        Some(HeadlessSurface::default()),
        Rc::clone(&host),
        i18n,
        options,
    )
    .ok_or_else(|| Error::Config("preview surface unavailable".into()))?;

    let mut summary = Summary::default();
    for arg in &flags.selections {
        let selection = if arg.as_os_str() == OsStr::new(CLEAR_ARG) {
            Vec::new()
        } else {
            vec![fs::load_selected_file(arg)?]
        };
        *controller.selection_mut() = selection;

        let outcome = controller.handle(Event::SelectionChanged);
        match &outcome {
            Outcome::Previewed { .. } => summary.previewed += 1,
            Outcome::Rejected(_) => summary.rejected += 1,
            Outcome::Cleared => summary.cleared += 1,
            Outcome::TornDown | Outcome::Detached => {}
        }
        writeln!(
            report,
            "{}: {}",
            arg.to_string_lossy(),
            describe(&outcome, &controller, &host)
        )?;
    }

    controller.handle(Event::PageTeardown);
    summary.leaked = host.registry().live_count();
    summary.pinned_bytes = host.registry().pinned_bytes();
    writeln!(
        report,
        "teardown: {} previewed, {} rejected, {} cleared, {} live references ({} bytes pinned)",
        summary.previewed, summary.rejected, summary.cleared, summary.leaked, summary.pinned_bytes
    )?;
    Ok(summary)
}

fn describe(outcome: &Outcome, controller: &Controller, host: &TerminalHost) -> String {
    match outcome {
        Outcome::Previewed { reference } => {
            let classes: Vec<&str> = controller.surface().classes().collect();
            let bytes = host
                .registry()
                .resolve(reference)
                .map_or(0, |payload| payload.len());
            format!("previewed as {reference} ({bytes} bytes) [{}]", classes.join(" "))
        }
        Outcome::Rejected(err) => format!("rejected ({err})"),
        Outcome::Cleared => "cleared".to_string(),
        Outcome::TornDown => "torn down".to_string(),
        Outcome::Detached => "ignored".to_string(),
    }
}

/// Parses a byte count such as `5242880`, `512KB` or `5MB` (binary units).
///
/// # Errors
///
/// Returns a config error for anything else.
pub fn parse_size(text: &str) -> Result<u64> {
    let text = text.trim();
    let upper = text.to_ascii_uppercase();
    let (digits, unit) = if let Some(n) = upper.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = upper.strip_suffix('B') {
        (n, 1)
    } else {
        (upper.as_str(), 1)
    };
    digits
        .trim()
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_mul(unit))
        .map(|bytes| MaxFileSize::new(bytes).bytes())
        .ok_or_else(|| Error::Config(format!("invalid size: {text}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::tempdir;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn flags(selections: Vec<OsString>) -> Flags {
        Flags {
            lang: Some("zh-TW".to_string()),
            selections,
            ..Flags::default()
        }
    }

    #[test]
    fn run_reports_each_event_and_releases_everything() {
        let dir = tempdir().expect("failed to create temp dir");
        let png = dir.path().join("leaf.png");
        let txt = dir.path().join("notes.txt");
        std_fs::write(&png, PNG_SIGNATURE).expect("write png");
        std_fs::write(&txt, b"hello").expect("write txt");

        let selections = vec![
            png.clone().into_os_string(),
            txt.into_os_string(),
            png.into_os_string(),
            OsString::from(CLEAR_ARG),
        ];
        let host = Rc::new(TerminalHost::with_writer(std::io::sink()));
        let mut report = Vec::new();
        let summary = run(&flags(selections), &Config::default(), host, &mut report)
            .expect("run should succeed");

        assert_eq!(
            summary,
            Summary {
                previewed: 2,
                rejected: 1,
                cleared: 1,
                leaked: 0,
                pinned_bytes: 0
            }
        );
        let report = String::from_utf8(report).expect("utf-8 report");
        assert_eq!(report.lines().count(), 5);
        assert!(report.contains("previewed as blob:preview-lens/1 (8 bytes) [preview--has-img]"));
        assert!(report.contains("rejected (Not an image: application/octet-stream)"));
        assert!(report.ends_with("0 live references (0 bytes pinned)\n"));
    }

    #[test]
    fn run_fails_on_unreadable_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("missing.png").into_os_string();
        let host = Rc::new(TerminalHost::with_writer(std::io::sink()));
        let result = run(&flags(vec![missing]), &Config::default(), host, &mut Vec::<u8>::new());
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn max_size_flag_overrides_config() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        config::save_to_path(&Config::default(), &path).expect("save config");

        let flags = Flags {
            config_path: Some(path),
            max_size: Some(2048),
            ..Flags::default()
        };
        let config = load_config(&flags).expect("config should load");
        assert_eq!(config.max_file_size_bytes, Some(2048));
    }

    #[test]
    fn flags_from_args_keeps_order_and_clear_marker() {
        let args = pico_args::Arguments::from_vec(vec![
            OsString::from("--lang"),
            OsString::from("en-US"),
            OsString::from("--max-size"),
            OsString::from("2MB"),
            OsString::from("a.png"),
            OsString::from(CLEAR_ARG),
            OsString::from("b.png"),
        ]);
        let flags = Flags::from_args(args)
            .expect("arguments should parse")
            .expect("help not requested");

        assert_eq!(flags.lang.as_deref(), Some("en-US"));
        assert_eq!(flags.max_size, Some(2 * 1024 * 1024));
        assert_eq!(
            flags.selections,
            ["a.png", CLEAR_ARG, "b.png"].map(OsString::from).to_vec()
        );
    }

    #[test]
    fn flags_from_args_help() {
        let args = pico_args::Arguments::from_vec(vec![OsString::from("--help")]);
        assert_eq!(Flags::from_args(args).expect("arguments should parse"), None);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_paths_are_selected() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().expect("failed to create temp dir");
        let odd = dir.path().join(OsStr::from_bytes(b"\xff.png"));
        let png = dir.path().join("leaf.png");
        std_fs::write(&odd, PNG_SIGNATURE).expect("write non-utf8 png");
        std_fs::write(&png, PNG_SIGNATURE).expect("write png");

        let args = pico_args::Arguments::from_vec(vec![
            odd.clone().into_os_string(),
            png.into_os_string(),
        ]);
        let parsed = Flags::from_args(args)
            .expect("arguments should parse")
            .expect("help not requested");
        assert_eq!(parsed.selections.len(), 2);
        assert_eq!(parsed.selections[0].as_os_str(), odd.as_os_str());

        let host = Rc::new(TerminalHost::with_writer(std::io::sink()));
        let mut report = Vec::new();
        let summary = run(
            &Flags {
                lang: Some("zh-TW".to_string()),
                ..parsed
            },
            &Config::default(),
            host,
            &mut report,
        )
        .expect("run should succeed");

        assert_eq!(summary.previewed, 2);
        let report = String::from_utf8(report).expect("utf-8 report");
        assert!(report.contains("\u{fffd}.png: previewed"));
    }

    #[test]
    fn parse_size_units() {
        assert_eq!(parse_size("5242880").unwrap(), 5_242_880);
        assert_eq!(parse_size("5MB").unwrap(), 5_242_880);
        assert_eq!(parse_size("512kb").unwrap(), 524_288);
        assert_eq!(parse_size("2048B").unwrap(), 2048);
    }

    #[test]
    fn parse_size_clamps_and_rejects() {
        assert_eq!(parse_size("1").unwrap(), 1024);
        assert!(parse_size("five").is_err());
        assert!(parse_size("").is_err());
    }
}
