use env_logger::Env;
use std::io::Write;

/// Installs the stderr logger. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{:<5}] {}", record.level(), record.args()))
        .target(env_logger::Target::Stderr)
        .try_init();
}
