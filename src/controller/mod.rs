//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and coordinates between the model, the view and the search API.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `search`: Search dispatch and pagination
//! - `health`: Backend health check

mod input;
mod search;
mod health;

use std::sync::Arc;

use crate::error::ApiError;
use crate::model::{AppModel, MusicApi};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<AppModel>,
    pub(crate) api: Arc<dyn MusicApi>,
}

impl AppController {
    pub fn new(model: Arc<AppModel>, api: Arc<dyn MusicApi>) -> Self {
        Self { model, api }
    }

    pub(crate) fn format_error(error: &ApiError) -> String {
        match error {
            ApiError::Network(_) if error.is_timeout() => {
                "Network error: The music service did not respond in time".to_string()
            }
            ApiError::Upstream { status: 429, .. } => {
                "Rate limited. Please wait a moment and search again.".to_string()
            }
            ApiError::Upstream { status, body } if body.trim().is_empty() => {
                format!("API Error: {}", status)
            }
            _ => error.to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_user_facing() {
        let upstream = ApiError::Upstream {
            status: 500,
            body: "Spotify token expired".to_string(),
        };
        assert_eq!(AppController::format_error(&upstream), "API Error: 500 - Spotify token expired");

        let empty_body = ApiError::Upstream {
            status: 404,
            body: "  ".to_string(),
        };
        assert_eq!(AppController::format_error(&empty_body), "API Error: 404");

        let limited = ApiError::Upstream {
            status: 429,
            body: String::new(),
        };
        assert!(AppController::format_error(&limited).starts_with("Rate limited"));
    }
}
