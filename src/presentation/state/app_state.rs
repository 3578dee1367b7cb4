use std::sync::Arc;

use crate::application::ports::{ContentAnalyzer, FileLoader};
use crate::application::services::IntakeService;
use crate::presentation::config::Settings;

pub struct AppState<F, A>
where
    F: FileLoader + ?Sized,
    A: ContentAnalyzer + ?Sized,
{
    pub intake_service: Arc<IntakeService<F, A>>,
    pub settings: Settings,
}

impl<F, A> Clone for AppState<F, A>
where
    F: FileLoader + ?Sized,
    A: ContentAnalyzer + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            intake_service: Arc::clone(&self.intake_service),
            settings: self.settings.clone(),
        }
    }
}
