//! Batched symbol resolution.
//!
//! Unique addresses are split into fixed-size batches, each sent to a
//! [`SymbolResolver`] as one request. Batches are independent, so a small pool
//! of scoped worker threads resolves them concurrently and merges every
//! response into one [`SymbolTable`].
//!
//! A batch that still fails after its retries aborts the whole pass: a table
//! missing some batches would show raw addresses that look exactly like
//! legitimately unresolved ones.

use super::table::SymbolTable;
use crate::utils::config::{DEFAULT_BATCH_SIZE, DEFAULT_CONCURRENCY, DEFAULT_MAX_RETRIES};
use crate::utils::error::SymbolError;
use log::{debug, info, warn};
use std::sync::{Mutex, PoisonError};

/// One side of the resolution contract: addresses in, response body out
///
/// The response holds one `<address> <resolved-name>` line per resolved address.
pub trait SymbolResolver: Sync {
    fn resolve_batch(&self, addresses: &[String]) -> Result<String, SymbolError>;
}

/// Batching and retry policy
///
/// Request timeouts belong to the transport, see
/// [`HttpSymbolResolver::with_timeout`](super::HttpSymbolResolver::with_timeout).
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub batch_size: usize,
    pub concurrency: usize,
    pub max_retries: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            concurrency: DEFAULT_CONCURRENCY,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// Resolve every address through `resolver`
///
/// **Public** - main entry point for symbolization
///
/// # Arguments
/// * `addresses` - Unique address tokens (order only affects batching)
/// * `resolver` - Transport used for each batch
/// * `config` - Batch size, parallelism and retry policy
///
/// # Errors
/// * `SymbolError::BatchFailed` - a batch kept failing; no table is returned
pub fn resolve_symbols(
    addresses: &[String],
    resolver: &dyn SymbolResolver,
    config: &ResolverConfig,
) -> Result<SymbolTable, SymbolError> {
    if addresses.is_empty() {
        return Ok(SymbolTable::new());
    }

    let batches: Vec<&[String]> = addresses.chunks(config.batch_size.max(1)).collect();
    let worker_count = config.concurrency.clamp(1, batches.len());

    info!(
        "Resolving {} addresses in {} batches ({} workers)",
        addresses.len(),
        batches.len(),
        worker_count
    );

    let table = Mutex::new(SymbolTable::new());
    let first_error: Mutex<Option<SymbolError>> = Mutex::new(None);

    std::thread::scope(|scope| {
        for start in 0..worker_count {
            let batches = &batches;
            let table = &table;
            let first_error = &first_error;
            scope.spawn(move || {
                let mut index = start;
                while index < batches.len() {
                    if has_failed(first_error) {
                        return;
                    }
                    match resolve_with_retry(index, batches[index], resolver, config) {
                        Ok(body) => {
                            let mut batch_table = SymbolTable::new();
                            let added = batch_table.extend_from_response(&body);
                            debug!("Batch {} resolved {} symbols", index, added);
                            table
                                .lock()
                                .unwrap_or_else(PoisonError::into_inner)
                                .merge(batch_table);
                        }
                        Err(err) => {
                            let mut slot =
                                first_error.lock().unwrap_or_else(PoisonError::into_inner);
                            if slot.is_none() {
                                *slot = Some(err);
                            }
                            return;
                        }
                    }
                    index += worker_count;
                }
            });
        }
    });

    if let Some(err) = first_error
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
    {
        return Err(err);
    }

    let table = table.into_inner().unwrap_or_else(PoisonError::into_inner);
    info!(
        "Resolved {} of {} addresses",
        table.len(),
        addresses.len()
    );
    Ok(table)
}

fn has_failed(first_error: &Mutex<Option<SymbolError>>) -> bool {
    first_error
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

fn resolve_with_retry(
    index: usize,
    batch: &[String],
    resolver: &dyn SymbolResolver,
    config: &ResolverConfig,
) -> Result<String, SymbolError> {
    let attempts = config.max_retries + 1;
    let mut attempt = 1;
    loop {
        match resolver.resolve_batch(batch) {
            Ok(body) => return Ok(body),
            Err(err) if attempt < attempts => {
                warn!(
                    "Symbol batch {} failed (attempt {}/{}): {}",
                    index, attempt, attempts, err
                );
                attempt += 1;
            }
            Err(err) => {
                return Err(SymbolError::BatchFailed {
                    batch: index,
                    attempts,
                    source: Box::new(err),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builders_clamp_to_one() {
        let config = ResolverConfig::new()
            .with_batch_size(0)
            .with_concurrency(0)
            .with_max_retries(5);

        assert_eq!(config.batch_size, 1);
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.max_retries, 5);
    }

    #[test]
    fn test_config_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.batch_size, 100);
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.max_retries, 2);
    }
}
