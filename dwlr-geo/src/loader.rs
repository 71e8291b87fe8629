//! One-shot loading of the maps script, shared by every caller.

use crate::error::{GeoError, Result};
use futures::future::{self, Either, FutureExt, LocalBoxFuture, Shared};
use std::cell::RefCell;
use std::future::Future;

type LoadFuture = Shared<LocalBoxFuture<'static, Result<()>>>;

enum LoadState {
    Idle,
    Loading(LoadFuture),
    Loaded,
}

/// Deduplicates script loads.
///
/// Concurrent callers await the same load, a finished load is reused, and a
/// failed or timed-out load resets so the next caller tries again.
pub struct ScriptLoader {
    state: RefCell<LoadState>,
}

impl Default for ScriptLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptLoader {
    pub const fn new() -> Self {
        Self {
            state: RefCell::new(LoadState::Idle),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(*self.state.borrow(), LoadState::Loaded)
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.state.borrow(), LoadState::Loading(_))
    }

    /// Load via `start` unless a load is done or in flight. `timeout`
    /// resolving first fails the load with [`GeoError::LoadTimeout`].
    pub async fn load<F, L, T>(&self, start: F, timeout: T) -> Result<()>
    where
        F: FnOnce() -> L,
        L: Future<Output = Result<()>> + 'static,
        T: Future<Output = ()> + 'static,
    {
        let shared = {
            let mut state = self.state.borrow_mut();
            let in_flight = match &*state {
                LoadState::Loaded => return Ok(()),
                LoadState::Loading(shared) => Some(shared.clone()),
                LoadState::Idle => None,
            };
            match in_flight {
                Some(shared) => shared,
                None => {
                    log::info!("[DWLR] loader: loading maps script");
                    let load = start();
                    let shared = async move {
                        match future::select(Box::pin(load), Box::pin(timeout)).await {
                            Either::Left((result, _)) => result,
                            Either::Right(((), _)) => Err(GeoError::LoadTimeout),
                        }
                    }
                    .boxed_local()
                    .shared();
                    *state = LoadState::Loading(shared.clone());
                    shared
                }
            }
        };

        let result = shared.clone().await;
        let mut state = self.state.borrow_mut();
        let still_current =
            matches!(&*state, LoadState::Loading(current) if current.ptr_eq(&shared));
        if still_current {
            match &result {
                Ok(()) => *state = LoadState::Loaded,
                Err(e) => {
                    log::error!("[DWLR] loader: {}", e);
                    *state = LoadState::Idle;
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn concurrent_loads_share_one_script() {
        let loader = ScriptLoader::new();
        let starts = Rc::new(Cell::new(0));
        let (tx, rx) = oneshot::channel::<()>();

        let first = loader.load(
            {
                let starts = Rc::clone(&starts);
                move || {
                    starts.set(starts.get() + 1);
                    async move { rx.await.map_err(|_| GeoError::LoadFailed("dropped".into())) }
                }
            },
            future::pending(),
        );
        let second = loader.load(
            || {
                starts.set(starts.get() + 1);
                future::ready(Ok(()))
            },
            future::pending(),
        );
        let release = async {
            let _ = tx.send(());
        };

        let (a, b, ()) = block_on(async { futures::join!(first, second, release) });
        assert_eq!(a, Ok(()));
        assert_eq!(b, Ok(()));
        assert_eq!(starts.get(), 1);
        assert!(loader.is_loaded());
    }

    #[test]
    fn loaded_script_is_reused() {
        let loader = ScriptLoader::new();
        block_on(loader.load(|| future::ready(Ok(())), future::pending())).unwrap();
        let result = block_on(loader.load(
            || future::ready(Err(GeoError::LoadFailed("should not run".into()))),
            future::pending(),
        ));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn failure_resets_for_retry() {
        let loader = ScriptLoader::new();
        let failed = block_on(loader.load(
            || future::ready(Err(GeoError::LoadFailed("network".into()))),
            future::pending(),
        ));
        assert_eq!(failed, Err(GeoError::LoadFailed("network".into())));
        assert!(!loader.is_loading());
        assert!(!loader.is_loaded());

        block_on(loader.load(|| future::ready(Ok(())), future::pending())).unwrap();
        assert!(loader.is_loaded());
    }

    #[test]
    fn timeout_fails_the_load() {
        let loader = ScriptLoader::new();
        let result = block_on(loader.load(|| future::pending(), future::ready(())));
        assert_eq!(result, Err(GeoError::LoadTimeout));
        assert!(!loader.is_loaded());
    }
}
