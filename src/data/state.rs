//! Data service state

use std::sync::Arc;

use crate::store::MessageStore;

/// Data service state
#[derive(Clone)]
pub struct DataState {
    /// Message store backing `/api/message`
    pub store: Arc<dyn MessageStore>,
}

impl DataState {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }
}
