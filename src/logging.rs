/// Log setup for the command line.
///
/// Library code only emits `tracing` events. Resolution records are printed
/// on stdout, so every log line goes to stderr.
use anyhow::{anyhow, Result};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

/// Full filter directive (e.g. `link_resolver::engine=trace`) overriding the
/// verbosity flags.
pub const LOG_ENV: &str = "LINK_RESOLVER_LOG";

const TARGET: &str = "link_resolver";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    /// Collaborator failures only
    Normal,
    /// Catalog loading
    Verbose,
    /// Cache hits and each resolution
    Debug,
    /// Individual lookups and `resolve` span timings
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    fn to_filter(self) -> String {
        format!("{TARGET}={}", self.to_level())
    }

    fn span_events(self) -> FmtSpan {
        if self == Self::Trace {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

pub fn init(verbosity: Verbosity) -> Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(verbosity >= Verbosity::Debug)
        .with_span_events(verbosity.span_events())
        .with_file(verbosity == Verbosity::Trace)
        .with_line_number(verbosity == Verbosity::Trace)
        .compact();

    let installed = match verbosity {
        Verbosity::Quiet => builder.with_writer(std::io::sink).try_init(),
        Verbosity::Normal => builder.with_writer(std::io::stderr).without_time().try_init(),
        _ => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| anyhow!("cannot install log subscriber: {e}"))
}
