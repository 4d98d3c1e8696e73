use clap::{Command, arg, value_parser};

pub const SERVE_CMD: &str = "serve";

pub fn create_serve_cli() -> Command {
    Command::new(SERVE_CMD)
        .about("Run the variant scoring HTTP service.")
        .arg(arg!(--config <CONFIG> "TOML service configuration (defaults apply when omitted)").required(false))
        .arg(arg!(--host <HOST> "Override the configured host").required(false))
        .arg(
            arg!(--port <PORT> "Override the configured port")
                .required(false)
                .value_parser(value_parser!(u16)),
        )
}
