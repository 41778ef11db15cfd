//! Event plumbing between the host page and a `RefreshLoop`.
//!
//! Timer ticks, body mutations and unload all arrive on one channel and are
//! handled by a single consumer, so passes never overlap.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use wordcount_logging::{wc_debug, wc_info};

use crate::dom::HostDom;
use crate::refresh::{RefreshLoop, TickOutcome};

/// Refresh cadence.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Timer fired; run a pass.
    Tick,
    /// The host body mutated.
    Mutation,
    /// The script context is unloading.
    Unload,
}

/// Counters describing a finished `run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub ticks: u64,
    pub renders: u64,
    pub navigations: u64,
}

/// Sends `HostEvent::Tick` every `interval` until the receiving side is gone.
pub fn spawn_ticker(events: Sender<HostEvent>, interval: Duration) -> JoinHandle<()> {
    thread::spawn(move || {
        while events.send(HostEvent::Tick).is_ok() {
            thread::sleep(interval);
        }
        wc_debug!("ticker stopped, event channel closed");
    })
}

/// Feeds events to `refresh` until `Unload` arrives or every sender is dropped.
pub fn run<D: HostDom>(
    refresh: &mut RefreshLoop<D::Node>,
    dom: &mut D,
    events: Receiver<HostEvent>,
) -> RunSummary {
    let mut summary = RunSummary::default();

    for event in events {
        match event {
            HostEvent::Tick => {
                summary.ticks += 1;
                if let TickOutcome::Rendered(_) = refresh.tick(dom) {
                    summary.renders += 1;
                }
            }
            HostEvent::Mutation => {
                if refresh.observe_mutations(dom) {
                    summary.navigations += 1;
                }
            }
            HostEvent::Unload => {
                refresh.unload(dom);
                break;
            }
        }
    }

    wc_info!(
        "Word count loop finished after {} ticks ({} renders, {} navigations)",
        summary.ticks,
        summary.renders,
        summary.navigations
    );
    summary
}
