use crate::actions::Action;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use stock_store::{LoggingMiddleware, Store};

/// The application store: root reducer over [`AppState`]
pub type AppStore = Store<AppState, Action>;

/// Build the store with the root reducer and the default middleware
pub fn configure_store(initial_state: AppState) -> AppStore {
    let mut store = Store::new(initial_state, reduce);

    // Middleware runs in the order it is added
    store.add_middleware(LoggingMiddleware::new());

    store
}
