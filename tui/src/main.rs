use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();
    atmention_tui::app::run()
}

/// Logs go to a file, and only when `RUST_LOG` asks for them; the
/// alternate screen must stay clean.
fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        return;
    }
    let appender = tracing_appender::rolling::never(".", "atmention-tui.log");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(appender)
        .with_ansi(false)
        .init();
}
