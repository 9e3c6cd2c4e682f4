//! File discovery and the line-by-line scan.

use std::fs::File;
use std::io::{BufRead, BufReader};

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, trace};

use crate::coerce;
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::error::ConfigError;
use crate::registry::Registry;
use crate::scan::{self, Line};

/// Select the first existing candidate, scan it, and write converted values
/// through the registry's slots. Problem lines go to `sink` and are skipped.
pub(crate) fn run(
    registry: &Registry,
    candidates: &[Utf8PathBuf],
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ConfigError> {
    let path = match candidates.iter().find(|path| path.is_file()) {
        Some(path) => path,
        None => {
            return Err(ConfigError::NoFileFound {
                tried: candidates.to_vec(),
            });
        }
    };
    debug!(%path, "reading configuration file");

    let file = File::open(path).map_err(|source| open_error(path, source))?;
    scan_file(registry, path, file, sink)
}

fn scan_file(
    registry: &Registry,
    path: &Utf8Path,
    file: File,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ConfigError> {
    let reader = BufReader::new(file);
    for (index, line) in reader.lines().enumerate() {
        let text = line.map_err(|source| open_error(path, source))?;
        let number = index + 1;

        match scan::classify(&text) {
            Line::Comment | Line::Blank => {}
            Line::Malformed => {
                sink.report(Diagnostic::new(
                    DiagnosticKind::MalformedLine,
                    number,
                    format!("unparsable line \"{text}\""),
                ));
            }
            Line::Entry { key, value } => match registry.lookup(key) {
                None => {
                    sink.report(Diagnostic::new(
                        DiagnosticKind::UnrecognizedOption,
                        number,
                        format!("unrecognized option \"{key}\""),
                    ));
                }
                Some(decl) => match coerce::apply(&decl.target, decl.flags, value) {
                    Ok(()) => trace!(key, value, "option set"),
                    Err(err) => {
                        sink.report(Diagnostic::new(
                            DiagnosticKind::CoercionFailure,
                            number,
                            format!("option \"{key}\": {err}"),
                        ));
                    }
                },
            },
        }
    }
    Ok(())
}

fn open_error(path: &Utf8Path, source: std::io::Error) -> ConfigError {
    ConfigError::FileOpen {
        path: path.to_owned(),
        source,
    }
}
