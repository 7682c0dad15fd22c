use super::Middleware;
use crate::dispatcher::Dispatcher;
use crate::ActionKind;

/// LoggingMiddleware - logs the kind of every action passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A: ActionKind> Middleware<S, A> for LoggingMiddleware {
    fn handle(&mut self, action: &A, _state: &S, _dispatcher: &Dispatcher<A>) -> bool {
        log::debug!("Action: {}", action.kind());
        true // Always pass action through
    }
}
