//! User-facing error notifications
//!
//! Effects report failed API calls here. Notification is fire-and-forget:
//! nothing is returned and nothing is retried.

use stock_client::ApiError;

pub trait Notifier: Send + Sync {
    fn notify(&self, error: &ApiError);
}

/// Notifier writing the alert text to the error log
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, error: &ApiError) {
        log::error!("{}", toast_text(error));
        log::debug!("Underlying error: {}", error);
    }
}

/// Short alert text for a failed API call
pub fn toast_text(error: &ApiError) -> String {
    match error {
        ApiError::Status { status, message, .. } => match status {
            401 | 403 => "You are not allowed to do that".to_string(),
            404 => "The requested item does not exist".to_string(),
            500..=599 => format!("Server error: {}", message),
            _ => message.clone(),
        },
        ApiError::Transport { .. } => "Could not reach the stock server".to_string(),
        ApiError::Decode { .. } => "The stock server sent an unexpected response".to_string(),
        ApiError::Client(_) | ApiError::Encode(_) => error.to_string(),
    }
}
