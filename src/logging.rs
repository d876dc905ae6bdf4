use env_logger::{Builder, Env, Target};

/// Installs the stderr logger. `RUST_LOG` overrides the default `warn` filter.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .try_init();
}
