//! Mission clock - progress is a pure function of elapsed time

use log::debug;

use crate::config::SimConfig;
use crate::lifecycle::{resolve_mission, MissionResolution};
use crate::notify::NotificationSink;
use crate::random::RandomSource;
use crate::stores::FleetState;

/// Percent complete of a mission started at `start_time`, observed at `now`.
///
/// Clamped to `0..=100`, so it never decreases as `now` grows and can be
/// recomputed at any time from `start_time` alone.
pub fn mission_progress(start_time: f64, now: f64, duration_secs: f64) -> f64 {
    if duration_secs <= 0.0 {
        return 100.0;
    }
    ((now - start_time) / duration_secs * 100.0).clamp(0.0, 100.0)
}

/// Refresh progress of every in-progress mission and resolve the ones that
/// reached 100%, in creation order.
pub fn advance_missions(
    state: &mut FleetState,
    now: f64,
    config: &SimConfig,
    random: &mut impl RandomSource,
    sink: &mut impl NotificationSink,
) -> Vec<MissionResolution> {
    let mut resolutions = Vec::new();

    for id in state.missions.active_ids() {
        let Some(mission) = state.missions.get_mut(id) else {
            continue;
        };
        let progress = mission_progress(mission.start_time(), now, config.mission_duration_secs);
        mission.record_progress(progress);
        debug!("mission '{}' at {:.1}%", mission.name(), progress);

        if progress >= 100.0 {
            if let Some(resolution) = resolve_mission(state, id, config, random, sink) {
                resolutions.push(resolution);
            }
        }
    }

    resolutions
}
