use crate::repository::VillaRepository;

/// Shared application state, cloned per request. The pool inside the
/// repository is the only shared resource; there is no in-process cache.
#[derive(Clone)]
pub struct AppState {
    pub villas: VillaRepository,
}
