use scope_core::telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    let matches = scope_cli::command().get_matches();
    init_tracing(matches.get_flag("log-json"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    scope_cli::execute(&matches, &mut out)
}
