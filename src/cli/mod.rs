mod handlers;
pub mod parse;

use clap::Parser;
pub use handlers::{parse_span, style_config};
pub use parse::Cli;
use tracing_subscriber::EnvFilter;

use crate::core::error::GanttError;

/// Log to stderr; `RUST_LOG` wins over `--debug`.
fn init_logging(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run() -> Result<(), GanttError> {
    let cli = parse::Cli::parse();
    init_logging(cli.debug);
    match cli.cmd {
        parse::Command::Demo(a) => handlers::demo(&a),
        parse::Command::Draw(a) => handlers::draw(&a),
        parse::Command::Colors => handlers::colors(),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
