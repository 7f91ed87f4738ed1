pub use {
    clap::{
        builder::{
            styling::{AnsiColor, Effects, Styles},
            StringValueParser, TypedValueParser,
        },
        ArgAction, Args, CommandFactory, Parser,
    },
    clap_complete::Shell,
};

/// Styling for the `help` terminal output
pub fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Header line of the help output, e.g. `scp-demo 0.1.0`, followed by the usual sections
pub const HELP_TEMPLATE: &str = "\
{name} {version}
{about}

{usage-heading} {usage}

{all-args}{after-help}";
