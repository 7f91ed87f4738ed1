use super::util::*;

/// The well-known SSH port
pub const DEFAULT_SSH_PORT: u16 = 22;

/// Options that decide what is copied where, and in which role
#[derive(Debug, Args, Clone, PartialEq, Eq)]
pub struct TransferArgs {
    /// Port to connect on, anything that is not a number in 1-65535 counts as 0
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SSH_PORT,
        allow_hyphen_values = true,
        value_parser = StringValueParser::new().map(port_or_zero)
    )]
    pub port: u16,

    /// Operate as the source of the copy
    #[arg(short('f'), long("from"), action = ArgAction::SetTrue)]
    pub from: bool,

    /// Operate as the sink of the copy, writing to <PATH>
    #[arg(short('t'), long("to"), value_name("PATH"))]
    pub to: Option<String>,

    /// File source, "[[user@]addr:]file"
    #[arg(short, long, value_name("FILEPATH"))]
    pub source: Option<String>,

    /// File destination, "[[user@]addr:]file"
    #[arg(short, long, visible_alias("dest"), value_name("FILEPATH"))]
    pub destination: Option<String>,

    /// Accept port 0 instead of rejecting it
    #[arg(long, action = ArgAction::SetTrue, env = "SCP_DEMO_ALLOW_ZERO_PORT")]
    pub allow_zero_port: bool,
}

/// Non-numeric and out of range ports become 0 and are left to the resolver's port check
pub fn port_or_zero(raw: String) -> u16 {
    raw.trim().parse().unwrap_or(0)
}

impl Default for TransferArgs {
    fn default() -> Self {
        Self {
            port: DEFAULT_SSH_PORT,
            from: false,
            to: None,
            source: None,
            destination: None,
            allow_zero_port: false,
        }
    }
}

impl TransferArgs {
    pub fn port(&self) -> u16 {
        self.port
    }
    pub fn is_source(&self) -> bool {
        self.from
    }
    pub fn is_sink(&self) -> bool {
        self.to.is_some()
    }
    pub fn sink_target(&self) -> Option<&str> {
        self.to.as_deref()
    }
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }
}
