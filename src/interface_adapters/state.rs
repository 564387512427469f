use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{Clock, ReviewTemplateSet, UpstreamProvider};

// Application state holding the startup-loaded immutable dependencies.
#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub upstream: Arc<dyn UpstreamProvider>,
    pub templates: Arc<ReviewTemplateSet>,
}

// System clock adapter used by the generation use case.
#[derive(Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
