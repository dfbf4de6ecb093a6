//! Rendering a whole catalog to disk.
//!
//! Entries are independent, so they can be spread over worker threads. The
//! only shared state is the catalog itself (read-only) and a channel that
//! carries each entry's outcome back to the calling thread, which reports
//! progress in completion order.

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use crate::error::Result;
use crate::registry::{Catalog, CatalogEntry};

use super::png::persist;

/// Render every catalog entry under `output`.
///
/// `on_generated` is called with each written path (relative to `output`).
/// Stops at the first failure and returns it; with `jobs > 1` entries
/// already in flight still finish. Returns the number of files written.
pub fn render_catalog(
    catalog: &Catalog,
    output: &Path,
    jobs: usize,
    mut on_generated: impl FnMut(&Path),
) -> Result<usize> {
    let jobs = jobs.clamp(1, catalog.len().max(1));
    if jobs == 1 {
        for entry in catalog {
            render_entry(entry, output)?;
            on_generated(entry.path());
        }
        return Ok(catalog.len());
    }

    let next = AtomicUsize::new(0);
    let failed = AtomicBool::new(false);
    let (tx, rx) = mpsc::channel();

    thread::scope(|scope| {
        for _ in 0..jobs {
            let tx = tx.clone();
            let (next, failed) = (&next, &failed);
            scope.spawn(move || {
                while !failed.load(Ordering::Relaxed) {
                    let index = next.fetch_add(1, Ordering::Relaxed);
                    let Some(entry) = catalog.entry(index) else {
                        break;
                    };
                    let result = render_entry(entry, output);
                    if result.is_err() {
                        failed.store(true, Ordering::Relaxed);
                    }
                    if tx.send((index, result)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx);

        let mut written = 0;
        let mut first_error = None;
        for (index, result) in rx {
            match result {
                Ok(()) => {
                    written += 1;
                    if let Some(entry) = catalog.entry(index) {
                        on_generated(entry.path());
                    }
                }
                Err(e) => {
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(written),
        }
    })
}

fn render_entry(entry: &CatalogEntry, output: &Path) -> Result<()> {
    let canvas = entry.render()?;
    persist(&canvas, &output.join(entry.path()))
}
