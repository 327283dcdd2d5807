//! Presentation layer interface

use crate::api::types::{StatusView, VibrationPattern};

/// Screen and haptics owned by the host platform
pub trait Presenter {
    /// Redraw the status card and markers
    fn render(&mut self, view: &StatusView);

    /// Vibrate and pulse the card. Called exactly once per arrival.
    fn alert(&mut self, pattern: &VibrationPattern);
}

/// Presenter that records every call, for tests and headless runs
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    views: Vec<StatusView>,
    alerts: Vec<VibrationPattern>,
}

impl RecordingPresenter {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Every view rendered so far, oldest first
    pub fn views(&self) -> &[StatusView] {
        &self.views
    }

    /// Most recently rendered view
    pub fn last_view(&self) -> Option<&StatusView> {
        self.views.last()
    }

    /// Patterns passed to every alert so far
    pub fn alerts(&self) -> &[VibrationPattern] {
        &self.alerts
    }

    /// Number of alerts fired
    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, view: &StatusView) {
        self.views.push(view.clone());
    }

    fn alert(&mut self, pattern: &VibrationPattern) {
        self.alerts.push(pattern.clone());
    }
}
