//! Session controller for event-driven hosts
//!
//! A [`ProximitySession`] owns the tracker, the location source and the
//! presenter for one run of the app. The host forwards destination picks and
//! calls [`process`](ProximitySession::process) whenever the source may have
//! new samples; the session turns each tracker result into a [`StatusView`]
//! and invokes the haptic alert exactly when the tracker reports an arrival.

use crate::api::formatting::{
    distance_text, format_accuracy, CHOOSE_DESTINATION_TEXT, DESTINATION_CLEARED_TEXT,
    DESTINATION_NEARBY_TEXT, DESTINATION_SET_TEXT, GPS_STOPPED_TEXT, INITIALIZING_TEXT,
    STARTING_GPS_TEXT, WAITING_FOR_LOCATION_TEXT,
};
use crate::api::presenter::Presenter;
use crate::api::types::{
    MapView, SessionError, SessionResult, SessionStats, StatusView, VibrationPattern,
};
use crate::core::{GeoPoint, PositionSample};
use crate::hardware::LocationSource;
use crate::processing::{ProximityTracker, TrackerSnapshot};
use crate::utils::ProximityConfig;
use log::{debug, info, warn};

/// Upper bound on events drained by a single `process` call
pub const MAX_EVENTS_PER_PROCESS: u32 = 256;

/// One user session: tracker, location source and presenter
pub struct ProximitySession<S: LocationSource, P: Presenter> {
    tracker: ProximityTracker,
    source: S,
    presenter: P,
    vibration: VibrationPattern,
    map_zoom: u8,
    view: StatusView,
    has_fix: bool,
    started: bool,
    stats: SessionStats,
}

impl<S: LocationSource, P: Presenter> ProximitySession<S, P> {
    /// Create a session. The configuration is validated first.
    pub fn new(config: &ProximityConfig, source: S, presenter: P) -> SessionResult<Self> {
        config.validate()?;
        let tracker = ProximityTracker::new(config.alert_distance_km)?;

        let view = StatusView {
            distance_text: INITIALIZING_TEXT.to_string(),
            status_text: WAITING_FOR_LOCATION_TEXT.to_string(),
            alert_active: false,
            user_position: None,
            destination: None,
            recenter: Some(MapView {
                center: config.map_default_center,
                zoom: config.map_default_zoom,
            }),
        };

        Ok(Self {
            tracker,
            source,
            presenter,
            vibration: config.vibration_pattern(),
            map_zoom: config.map_default_zoom,
            view,
            has_fix: false,
            started: false,
            stats: SessionStats::default(),
        })
    }

    /// Render the initial screen and start watching the position
    pub fn start(&mut self) -> SessionResult<()> {
        self.presenter.render(&self.view);
        self.view.recenter = None;

        if let Err(error) = self.source.start() {
            warn!("Location source failed to start: {}", error);
            self.stats.source_errors += 1;
            self.view.status_text = error.status_message().to_string();
            self.presenter.render(&self.view);
            return Err(SessionError::Location(error));
        }

        info!("Session started");
        self.started = true;
        self.view.status_text = STARTING_GPS_TEXT.to_string();
        self.presenter.render(&self.view);
        Ok(())
    }

    /// Stop watching the position. Tracker state is kept.
    pub fn stop(&mut self) {
        if !self.started {
            return;
        }
        self.source.stop();
        self.started = false;
        info!("Session stopped");

        self.view.status_text = GPS_STOPPED_TEXT.to_string();
        self.presenter.render(&self.view);
    }

    /// Drain pending samples from the source into the tracker.
    ///
    /// Returns the number of samples applied. Source errors are shown to the
    /// user and draining continues with the next event, except for errors
    /// that need user action, which stop the session.
    pub fn process(&mut self) -> SessionResult<u32> {
        if !self.started {
            return Err(SessionError::NotStarted);
        }

        let mut applied = 0;
        for _ in 0..MAX_EVENTS_PER_PROCESS {
            match self.source.poll() {
                Ok(Some(sample)) => {
                    if self.apply_sample(&sample) {
                        applied += 1;
                    }
                }
                Ok(None) => break,
                Err(error) => {
                    warn!("Location source error: {}", error);
                    self.stats.source_errors += 1;
                    self.view.status_text = error.status_message().to_string();
                    self.presenter.render(&self.view);
                    if !error.is_recoverable() {
                        self.source.stop();
                        self.started = false;
                        info!("Session stopped until location access is granted");
                        break;
                    }
                }
            }
        }

        Ok(applied)
    }

    /// Handle a destination pick from the map
    pub fn set_destination(&mut self, point: GeoPoint) -> SessionResult<()> {
        self.tracker.set_destination(point)?;

        self.view.destination = Some(point);
        self.view.alert_active = false;
        self.view.status_text = DESTINATION_SET_TEXT.to_string();
        self.presenter.render(&self.view);
        Ok(())
    }

    /// Remove the destination marker and disarm the alert
    pub fn clear_destination(&mut self) {
        self.tracker.reset();

        self.view.destination = None;
        self.view.alert_active = false;
        if self.has_fix {
            self.view.distance_text = CHOOSE_DESTINATION_TEXT.to_string();
        }
        self.view.status_text = DESTINATION_CLEARED_TEXT.to_string();
        self.presenter.render(&self.view);
    }

    fn apply_sample(&mut self, sample: &PositionSample) -> bool {
        let result = match self.tracker.update_position(sample) {
            Ok(result) => result,
            Err(error) => {
                warn!("Rejected position sample: {}", error);
                self.stats.samples_rejected += 1;
                return false;
            }
        };
        self.stats.samples_processed += 1;
        debug!(
            "Fix ({:.5}, {:.5}) ±{:.0} m",
            sample.point.latitude, sample.point.longitude, sample.accuracy_m
        );

        self.view.recenter = if self.has_fix {
            None
        } else {
            Some(MapView {
                center: sample.point,
                zoom: self.map_zoom,
            })
        };
        self.has_fix = true;

        self.view.user_position = Some(sample.point);
        self.view.distance_text = distance_text(result.distance_km);
        self.view.status_text = format_accuracy(sample.accuracy_m);

        if result.alert_triggered {
            self.stats.alerts_fired += 1;
            self.view.alert_active = true;
            self.view.status_text = DESTINATION_NEARBY_TEXT.to_string();
        }

        self.presenter.render(&self.view);
        self.view.recenter = None;
        if result.alert_triggered {
            self.presenter.alert(&self.vibration);
        }
        true
    }

    /// Current screen state
    pub fn view(&self) -> &StatusView {
        &self.view
    }

    /// Copy of the tracker state
    pub fn snapshot(&self) -> TrackerSnapshot {
        self.tracker.snapshot()
    }

    /// Tracker owned by this session
    pub fn tracker(&self) -> &ProximityTracker {
        &self.tracker
    }

    /// Counters since the session was created
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Whether the location source is being drained
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Presenter owned by this session
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Location source owned by this session
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the location source, e.g. to feed a mock
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
