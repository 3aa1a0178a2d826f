use clap::{Parser, ValueEnum};

/// Render application errors the way each transport adapter would
#[derive(Debug, Parser)]
#[command(name = "errs", about = "Show how an application error crosses each transport")]
pub struct Args {
    /// Transport adapter to render with
    #[arg(short, long, value_enum, default_value_t = Transport::Http, env = "ERRS_TRANSPORT")]
    pub transport: Transport,

    /// Error code slug; unknown slugs are treated as `internal`
    #[arg(short, long, default_value = "internal")]
    pub code: String,

    /// Error message
    #[arg(short, long, default_value = "")]
    pub message: String,

    /// Wrap the error in a context layer; repeat to nest deeper
    #[arg(long = "wrap", value_name = "CONTEXT")]
    pub wrap: Vec<String>,

    /// Render an uncategorized error carrying the message instead
    #[arg(long)]
    pub plain_error: bool,

    /// Attach the application error as context on an I/O failure
    #[arg(long, conflicts_with = "plain_error")]
    pub as_context: bool,

    /// Log filter directive
    #[arg(long, default_value = "warn", env = "ERRS_LOG")]
    pub log_filter: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Transport adapter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    Http,
    Grpc,
    Connect,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["errs"]).unwrap();
        assert_eq!(args.transport, Transport::Http);
        assert_eq!(args.code, "internal");
        assert!(args.wrap.is_empty());
        assert!(!args.plain_error);
        assert_eq!(args.log_format, LogFormat::Pretty);
    }

    #[test]
    fn repeated_wraps() {
        let args = Args::try_parse_from([
            "errs",
            "--transport",
            "connect",
            "--code",
            "conflict",
            "--wrap",
            "saving thing",
            "--wrap",
            "handling call",
        ])
        .unwrap();

        assert_eq!(args.transport, Transport::Connect);
        assert_eq!(args.wrap, ["saving thing", "handling call"]);
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
