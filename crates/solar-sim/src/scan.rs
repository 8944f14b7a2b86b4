//! Debounced description lookups for the proximity scanner.
//!
//! Every change of target bumps a generation counter. The host performs the
//! lookup asynchronously and answers with the generation it was given;
//! answers for anything but the latest generation are discarded.

use log::warn;

use solar_core::constants::SCAN_DEBOUNCE_MS;
use solar_core::events::ScanRequest;

#[derive(Debug, Clone)]
struct PendingScan {
    body: String,
    due_ms: f64,
    deep: bool,
}

#[derive(Debug, Default)]
pub struct ScanScheduler {
    generation: u64,
    body: Option<String>,
    pending: Option<PendingScan>,
    description: Option<String>,
    scanning: bool,
}

impl ScanScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The scanner target changed. Schedules a lookup after the debounce
    /// delay, or cancels any outstanding one when the target is lost.
    pub fn target_changed(&mut self, body: Option<&str>, now_ms: f64) {
        self.generation += 1;
        self.description = None;
        self.body = body.map(str::to_owned);
        match body {
            Some(name) => {
                self.pending = Some(PendingScan {
                    body: name.to_owned(),
                    due_ms: now_ms + SCAN_DEBOUNCE_MS,
                    deep: false,
                });
                self.scanning = true;
            }
            None => {
                self.pending = None;
                self.scanning = false;
            }
        }
    }

    /// Drop the target and any outstanding lookup. Results already handed
    /// out become stale.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.body = None;
        self.pending = None;
        self.description = None;
        self.scanning = false;
    }

    /// Player asked for a detailed scan. Returns false with no target.
    pub fn request_deep(&mut self, now_ms: f64) -> bool {
        let Some(body) = self.body.clone() else {
            return false;
        };
        self.generation += 1;
        self.description = None;
        self.pending = Some(PendingScan {
            body,
            due_ms: now_ms,
            deep: true,
        });
        self.scanning = true;
        true
    }

    /// Hand out the pending request once it is due.
    pub fn poll(&mut self, now_ms: f64) -> Option<ScanRequest> {
        if self.pending.as_ref().is_some_and(|p| now_ms >= p.due_ms) {
            let pending = self.pending.take()?;
            return Some(ScanRequest {
                generation: self.generation,
                body: pending.body,
                deep: pending.deep,
            });
        }
        None
    }

    /// Accept a lookup result. Stale generations are rejected.
    pub fn apply(&mut self, generation: u64, text: String) -> bool {
        if generation != self.generation || self.pending.is_some() || self.body.is_none() {
            warn!(
                "discarding stale scan result (generation {generation}, current {})",
                self.generation
            );
            return false;
        }
        self.description = Some(text);
        self.scanning = false;
        true
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_waits_for_debounce() {
        let mut scan = ScanScheduler::new();
        scan.target_changed(Some("Mars"), 1000.0);
        assert!(scan.is_scanning());
        assert!(scan.poll(2000.0).is_none());

        let req = scan.poll(2500.0).expect("due after debounce");
        assert_eq!(req.body, "Mars");
        assert!(!req.deep);
        // Handed out only once.
        assert!(scan.poll(3000.0).is_none());
    }

    #[test]
    fn test_cancel_drops_pending_and_in_flight() {
        let mut scan = ScanScheduler::new();
        scan.target_changed(Some("Mars"), 0.0);
        let in_flight = scan.poll(1500.0).expect("due");
        scan.target_changed(Some("Venus"), 1600.0);
        scan.cancel();
        assert!(!scan.is_scanning());
        assert!(scan.poll(5000.0).is_none());
        assert!(!scan.apply(in_flight.generation, "red".into()));
        assert!(!scan.apply(scan.generation(), "cloudy".into()));
        assert!(!scan.request_deep(5000.0));
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut scan = ScanScheduler::new();
        scan.target_changed(Some("Mars"), 0.0);
        let old = scan.poll(SCAN_DEBOUNCE_MS).unwrap();

        scan.target_changed(Some("Earth"), 2000.0);
        assert!(!scan.apply(old.generation, "red".into()));
        assert_eq!(scan.description(), None);

        let new = scan.poll(2000.0 + SCAN_DEBOUNCE_MS).unwrap();
        assert_eq!(new.body, "Earth");
        assert!(scan.apply(new.generation, "blue".into()));
        assert_eq!(scan.description(), Some("blue"));
        assert!(!scan.is_scanning());
    }

    #[test]
    fn test_losing_target_cancels_pending() {
        let mut scan = ScanScheduler::new();
        scan.target_changed(Some("Ceres"), 0.0);
        scan.target_changed(None, 100.0);
        assert!(!scan.is_scanning());
        assert!(scan.poll(10_000.0).is_none());
    }

    #[test]
    fn test_deep_scan_is_immediate() {
        let mut scan = ScanScheduler::new();
        assert!(!scan.request_deep(0.0), "no target, nothing to scan");

        scan.target_changed(Some("Jupiter"), 0.0);
        let first = scan.poll(SCAN_DEBOUNCE_MS).unwrap();
        assert!(scan.apply(first.generation, "gas giant".into()));

        assert!(scan.request_deep(5000.0));
        let deep = scan.poll(5000.0).unwrap();
        assert!(deep.deep);
        assert!(deep.generation > first.generation);
    }
}
