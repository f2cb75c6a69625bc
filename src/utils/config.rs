//! Configuration and constants for the aggregation pipeline.

use std::time::Duration;

/// Default timeout for a single symbol resolution request, in seconds
pub const DEFAULT_SYMBOL_TIMEOUT_SECS: u64 = 30;

/// Default timeout for a single symbol resolution request
pub const DEFAULT_SYMBOL_TIMEOUT: Duration = Duration::from_secs(DEFAULT_SYMBOL_TIMEOUT_SECS);

/// Maximum number of addresses carried by one resolution request
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Number of resolution requests allowed in flight at once
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Extra attempts for a failed batch before the whole pass is aborted
pub const DEFAULT_MAX_RETRIES: usize = 2;

/// Path of the symbol endpoint exposed by the profiled process
pub const SYMBOL_ENDPOINT_PATH: &str = "/pprof/symbol";

/// Separator between the real frame and its inlined frames in a resolved name
pub const INLINE_DELIMITER: &str = "--";

/// Display prefix (and map key namespace) for inlined frames
pub const INLINE_PREFIX: &str = "[inline] ";

/// Name of the synthetic root frame
pub const ROOT_NAME: &str = "root";

/// Directory outputs land in when only a file name is given
pub const ARTIFACTS_DIR: &str = "artifacts";
