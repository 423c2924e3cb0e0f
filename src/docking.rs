use eframe::egui::{pos2, Rect, Vec2};
use std::time::{Duration, Instant};

/// How often the window position is evaluated against the screen edges.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);
/// Duration of every collapse/expand animation.
pub const ANIM_DURATION: Duration = Duration::from_millis(300);
/// Distance from a screen edge that triggers auto-collapse.
pub const EDGE_THRESHOLD: f32 = 20.0;
/// Side length of the collapsed ball.
pub const BALL_SIZE: f32 = 48.0;
/// Minimum sliver of the window that must stay visible before the corrective
/// reposition kicks in.
pub const SNAP_MARGIN: f32 = 40.0;
/// How far the restored window is pushed in from the docked edge so it does
/// not immediately re-trigger a collapse.
pub const EXPAND_INSET: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockState {
    Expanded,
    Collapsed(Edge),
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    from: Rect,
    to: Rect,
    started: Instant,
}

fn ease_out_quad(t: f32) -> f32 {
    t * (2.0 - t)
}

fn lerp_rect(from: Rect, to: Rect, t: f32) -> Rect {
    let min = from.min + (to.min - from.min) * t;
    let size = from.size() + (to.size() - from.size()) * t;
    Rect::from_min_size(min, size)
}

/// Expanded/collapsed state of the floating window.
///
/// Geometry and time are passed in as plain values so the machine runs the
/// same under tests as under a live window system. The state flips at the
/// start of a transition; while the animation is in flight `poll` ignores
/// the window position and new transition requests are dropped.
#[derive(Debug)]
pub struct DockController {
    state: DockState,
    anim: Option<Animation>,
    saved: Option<Rect>,
}

impl Default for DockController {
    fn default() -> Self {
        Self::new()
    }
}

impl DockController {
    pub fn new() -> Self {
        Self {
            state: DockState::Expanded,
            anim: None,
            saved: None,
        }
    }

    pub fn state(&self) -> DockState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    /// The list/search content is shown only once the expand animation has
    /// finished, never mid-transition.
    pub fn content_visible(&self) -> bool {
        self.state == DockState::Expanded && !self.is_animating()
    }

    /// Geometry captured at the most recent collapse, if any.
    pub fn saved_geometry(&self) -> Option<Rect> {
        self.saved
    }

    /// The expanded geometry worth persisting: the saved rectangle while
    /// docked, the animation target while expanding, the live window rect
    /// otherwise.
    pub fn persisted_geometry(&self, window: Rect) -> Rect {
        match self.state {
            DockState::Collapsed(_) => self.saved.unwrap_or(window),
            DockState::Expanded => match &self.anim {
                Some(anim) => anim.to,
                None => window,
            },
        }
    }

    /// Evaluate the window position against the screen edges. Returns a
    /// corrective rectangle when the window has drifted nearly off-screen and
    /// must be snapped back; edge proximity instead starts a collapse
    /// animation. Does nothing while a transition is in flight.
    pub fn poll(&mut self, now: Instant, window: Rect, screen: Rect) -> Option<Rect> {
        if self.is_animating() {
            return None;
        }
        if self.state != DockState::Expanded {
            return None;
        }

        if screen.max.x - window.max.x <= EDGE_THRESHOLD {
            self.collapse(now, window, screen, Edge::Right);
            return None;
        }
        if window.min.x - screen.min.x <= EDGE_THRESHOLD {
            self.collapse(now, window, screen, Edge::Left);
            return None;
        }

        let visible = window.intersect(screen);
        if visible.width() < SNAP_MARGIN || visible.height() < SNAP_MARGIN {
            tracing::debug!(?window, "window drifted off-screen, snapping back");
            return Some(clamp_on_screen(window, screen));
        }
        None
    }

    /// Advance the in-flight animation. Returns the geometry to apply this
    /// frame; the final rectangle is returned exactly once, after which the
    /// `animating` flag clears.
    pub fn animate(&mut self, now: Instant) -> Option<Rect> {
        let anim = self.anim.as_ref()?;
        let elapsed = now.saturating_duration_since(anim.started);
        if elapsed >= ANIM_DURATION {
            let end = anim.to;
            self.anim = None;
            return Some(end);
        }
        let t = elapsed.as_secs_f32() / ANIM_DURATION.as_secs_f32();
        Some(lerp_rect(anim.from, anim.to, ease_out_quad(t)))
    }

    /// Left-button press on the collapsed ball: animate back to the geometry
    /// captured at collapse, inset from the docked edge.
    pub fn pointer_pressed(&mut self, now: Instant, window: Rect, screen: Rect) {
        let DockState::Collapsed(edge) = self.state else {
            return;
        };
        if self.is_animating() {
            return;
        }
        let target = self.expand_target(edge, screen);
        tracing::debug!(?edge, ?target, "expanding from ball");
        self.state = DockState::Expanded;
        self.start(now, window, target);
    }

    /// User-initiated minimize: collapse to the right edge regardless of the
    /// current position.
    pub fn minimize(&mut self, now: Instant, window: Rect, screen: Rect) {
        if self.state != DockState::Expanded || self.is_animating() {
            return;
        }
        self.collapse(now, window, screen, Edge::Right);
    }

    /// Show request from outside the window (tray or similar): expand first
    /// when docked, then ask the caller to bring the window to the front.
    pub fn show_from_tray(&mut self, now: Instant, window: Rect, screen: Rect) -> bool {
        if let DockState::Collapsed(_) = self.state {
            self.pointer_pressed(now, window, screen);
        }
        true
    }

    fn collapse(&mut self, now: Instant, window: Rect, screen: Rect, edge: Edge) {
        tracing::debug!(?edge, "collapsing to edge");
        self.saved = Some(window);
        self.state = DockState::Collapsed(edge);
        let ball = ball_rect(window, screen, edge);
        self.start(now, window, ball);
    }

    fn expand_target(&self, edge: Edge, screen: Rect) -> Rect {
        let saved = self.saved.unwrap_or_else(|| {
            Rect::from_center_size(screen.center(), Vec2::new(380.0, 600.0))
        });
        let x = match edge {
            Edge::Right => saved
                .min
                .x
                .min(screen.max.x - saved.width() - EXPAND_INSET),
            Edge::Left => saved.min.x.max(screen.min.x + EXPAND_INSET),
        };
        let y = saved
            .min
            .y
            .clamp(screen.min.y, (screen.max.y - saved.height()).max(screen.min.y));
        Rect::from_min_size(pos2(x, y), saved.size())
    }

    fn start(&mut self, now: Instant, from: Rect, to: Rect) {
        self.anim = Some(Animation {
            from,
            to,
            started: now,
        });
    }
}

/// Where the ball rests for a given edge. Left and right placement are
/// symmetric: the ball stays fully visible at either edge.
fn ball_rect(window: Rect, screen: Rect, edge: Edge) -> Rect {
    let x = match edge {
        Edge::Right => screen.max.x - BALL_SIZE,
        Edge::Left => screen.min.x,
    };
    let y = (window.center().y - BALL_SIZE / 2.0)
        .clamp(screen.min.y, (screen.max.y - BALL_SIZE).max(screen.min.y));
    Rect::from_min_size(pos2(x, y), Vec2::splat(BALL_SIZE))
}

fn clamp_on_screen(window: Rect, screen: Rect) -> Rect {
    let x = window
        .min
        .x
        .clamp(screen.min.x, (screen.max.x - window.width()).max(screen.min.x));
    let y = window
        .min
        .y
        .clamp(screen.min.y, (screen.max.y - window.height()).max(screen.min.y));
    Rect::from_min_size(pos2(x, y), window.size())
}
