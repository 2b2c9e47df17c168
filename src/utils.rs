use anyhow::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter of the `kmap` binary. `RUST_LOG` is the fallback.
pub const LOG_ENV: &str = "KMAP_LOG";

fn log_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Log to stderr so solutions on stdout stay pipeable.
pub fn init_tracing_subscriber(default_filter: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(default_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(Error::msg)
}

/// Size the global rayon pool used by [`crate::solve_batch`]. `None` keeps rayon's default.
pub fn setup_rayon(num_threads: Option<usize>) -> Result<usize> {
    if let Some(num_threads) = num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()?;
    }
    let threads = rayon::current_num_threads();
    debug!("solving batches on {} threads", threads);
    Ok(threads)
}
