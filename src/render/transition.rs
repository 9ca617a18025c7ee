//! Entrance animations: panels fade in while rising into place, the nav
//! rail slides in from the right once the app has loaded.

use std::time::Duration;

pub const ENTRANCE_DURATION: Duration = Duration::from_millis(800);
/// Starting offset below the resting position, in points.
pub const ENTRANCE_RISE: f32 = 20.0;

/// Opacity and vertical offset at one instant of the entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub opacity: f32,
    pub offset_y: f32,
}

impl Entrance {
    pub const DONE: Entrance = Entrance {
        opacity: 1.0,
        offset_y: 0.0,
    };

    pub fn is_done(&self) -> bool {
        *self == Self::DONE
    }
}

/// Cubic ease-out, `t` clamped to `[0, 1]`.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// "Fade in up" after `elapsed` of an [`ENTRANCE_DURATION`] run.
pub fn fade_in_up(elapsed: Duration) -> Entrance {
    if elapsed >= ENTRANCE_DURATION {
        return Entrance::DONE;
    }
    let t = ease_out(elapsed.as_secs_f32() / ENTRANCE_DURATION.as_secs_f32());
    Entrance {
        opacity: t,
        offset_y: ENTRANCE_RISE * (1.0 - t),
    }
}

pub const RAIL_SLIDE_DURATION: Duration = Duration::from_millis(600);
/// Starting offset right of the resting position, in points.
pub const RAIL_SLIDE_DISTANCE: f32 = 50.0;
pub const RAIL_BUTTON_FADE: Duration = Duration::from_millis(500);
/// Delay between consecutive rail buttons.
pub const RAIL_BUTTON_STAGGER: Duration = Duration::from_millis(100);
/// Rail buttons grow from this scale to full size while fading in.
pub const RAIL_BUTTON_START_SCALE: f32 = 0.8;

/// Whole-rail slide-in, `since_open` after the load gate opened.
///
/// `None` (gate still closed) keeps the rail hidden and off to the right.
pub fn slide_in_right(since_open: Option<Duration>) -> RailEntrance {
    let Some(elapsed) = since_open else {
        return RailEntrance {
            opacity: 0.0,
            offset_x: RAIL_SLIDE_DISTANCE,
        };
    };
    let t = ease_out(elapsed.as_secs_f32() / RAIL_SLIDE_DURATION.as_secs_f32());
    RailEntrance {
        opacity: t,
        offset_x: RAIL_SLIDE_DISTANCE * (1.0 - t),
    }
}

/// Rail slide state at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailEntrance {
    pub opacity: f32,
    pub offset_x: f32,
}

/// Opacity and scale of the `index`-th rail button.
///
/// Each button waits `index * RAIL_BUTTON_STAGGER` after the gate opens, then
/// fades in over [`RAIL_BUTTON_FADE`]. Buttons stay invisible while the gate
/// is closed.
pub fn button_fade_in(since_open: Option<Duration>, index: usize) -> (f32, f32) {
    let Some(elapsed) = since_open else {
        return (0.0, RAIL_BUTTON_START_SCALE);
    };
    let delay = RAIL_BUTTON_STAGGER * index as u32;
    let local = elapsed.saturating_sub(delay);
    let t = ease_out(local.as_secs_f32() / RAIL_BUTTON_FADE.as_secs_f32());
    (t, RAIL_BUTTON_START_SCALE + (1.0 - RAIL_BUTTON_START_SCALE) * t)
}
