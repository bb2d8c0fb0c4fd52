use std::io::Write;
use env_logger::{Env, Target, WriteStyle};

/// Installs the stderr logger used by the `inverse-sample` binary.
///
/// Defaults to `warn`; `RUST_LOG` overrides.
pub fn try_init() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[SAMPLE | {}] {}",
                record.level(),
                record.args()
            )
        })
        .target(Target::Stderr)
        .write_style(WriteStyle::Auto)
        .try_init()
}
