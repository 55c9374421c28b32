//! Scroll and pointer telemetry mapped to render parameters.
//!
//! Every function here is pure: feed it a telemetry sample, get back numbers
//! the view turns into inline styles. The spring integrator replaces the
//! smoothing a JS animation library would do and is advanced by the view's
//! animation loop.

use super::config::CURSOR_SIZE_PX;
use super::state::{DeviceClass, Pointer, UiState};

/// Linear map of `value` from `input` onto `output`, clamped to the input range.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in0, in1) = input;
    let (out0, out1) = output;
    if (in1 - in0).abs() < f64::EPSILON || value.is_nan() {
        return out0;
    }
    let t = ((value - in0) / (in1 - in0)).clamp(0.0, 1.0);
    out0 + (out1 - out0) * t
}

/// Render parameters derived from the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxFrame {
    /// Vertical offset of the grid backdrop, px.
    pub backdrop_y: f64,
    /// Vertical offset of the hero block (and the vision illustration), px.
    pub hero_y: f64,
    pub hero_opacity: f64,
    pub hero_scale: f64,
}

impl ParallaxFrame {
    pub const REST: ParallaxFrame = ParallaxFrame {
        backdrop_y: 0.0,
        hero_y: 0.0,
        hero_opacity: 1.0,
        hero_scale: 1.0,
    };

    pub fn from_scroll(scroll_y: f64, device: DeviceClass) -> Self {
        let (backdrop_range, hero_range) = if device.is_mobile() {
            ((0.0, 0.0), (0.0, 0.0))
        } else {
            ((0.0, 200.0), (0.0, -150.0))
        };
        Self {
            backdrop_y: map_range(scroll_y, (0.0, 1000.0), backdrop_range),
            hero_y: map_range(scroll_y, (0.0, 1000.0), hero_range),
            hero_opacity: map_range(scroll_y, (0.0, 400.0), (1.0, 0.0)),
            hero_scale: map_range(scroll_y, (0.0, 400.0), (1.0, 0.95)),
        }
    }

    pub fn backdrop_style(&self) -> String {
        format!("transform: translate3d(0, {:.2}px, 0);", self.backdrop_y)
    }

    pub fn hero_style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate3d(0, {:.2}px, 0) scale({:.4});",
            self.hero_opacity, self.hero_y, self.hero_scale
        )
    }

    pub fn float_style(&self) -> String {
        format!("transform: translate3d(0, {:.2}px, 0);", self.hero_y)
    }
}

impl Default for ParallaxFrame {
    fn default() -> Self {
        Self::REST
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Snappier spring for the cursor follower.
    pub const CURSOR: SpringConfig = SpringConfig {
        damping: 25.0,
        stiffness: 250.0,
        mass: 0.5,
    };

    /// Heavier, slower spring on touch devices.
    pub fn for_device(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Mobile => Self {
                damping: 40.0,
                stiffness: 80.0,
                mass: 1.0,
            },
            DeviceClass::Desktop => Self {
                damping: 30.0,
                stiffness: 100.0,
                mass: 0.5,
            },
        }
    }
}

/// One damped spring. `step` never mutates, it returns the next state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spring {
    pub position: f64,
    pub velocity: f64,
}

const MAX_SUBSTEP_SECS: f64 = 1.0 / 120.0;
const REST_DELTA: f64 = 1e-3;
const REST_SPEED: f64 = 1e-3;

impl Spring {
    pub fn at(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }

    pub fn is_settled(&self, target: f64) -> bool {
        (self.position - target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    pub fn step(self, target: f64, dt_secs: f64, config: SpringConfig) -> Self {
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return self;
        }
        let mut spring = self;
        let mut remaining = dt_secs;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_SECS);
            let force = -config.stiffness * (spring.position - target) - config.damping * spring.velocity;
            spring.velocity += force / config.mass * h;
            spring.position += spring.velocity * h;
            remaining -= h;
        }
        if spring.is_settled(target) {
            Spring::at(target)
        } else {
            spring
        }
    }
}

/// Four springs chasing a [`ParallaxFrame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedFrame {
    backdrop_y: Spring,
    hero_y: Spring,
    hero_opacity: Spring,
    hero_scale: Spring,
}

impl SmoothedFrame {
    pub fn new(start: ParallaxFrame) -> Self {
        Self {
            backdrop_y: Spring::at(start.backdrop_y),
            hero_y: Spring::at(start.hero_y),
            hero_opacity: Spring::at(start.hero_opacity),
            hero_scale: Spring::at(start.hero_scale),
        }
    }

    pub fn step(self, target: ParallaxFrame, dt_secs: f64, config: SpringConfig) -> Self {
        Self {
            backdrop_y: self.backdrop_y.step(target.backdrop_y, dt_secs, config),
            hero_y: self.hero_y.step(target.hero_y, dt_secs, config),
            hero_opacity: self.hero_opacity.step(target.hero_opacity, dt_secs, config),
            hero_scale: self.hero_scale.step(target.hero_scale, dt_secs, config),
        }
    }

    pub fn is_settled(&self, target: ParallaxFrame) -> bool {
        self.backdrop_y.is_settled(target.backdrop_y)
            && self.hero_y.is_settled(target.hero_y)
            && self.hero_opacity.is_settled(target.hero_opacity)
            && self.hero_scale.is_settled(target.hero_scale)
    }

    /// Current values, with opacity and scale kept inside their valid ranges.
    pub fn frame(&self) -> ParallaxFrame {
        ParallaxFrame {
            backdrop_y: self.backdrop_y.position,
            hero_y: self.hero_y.position,
            hero_opacity: self.hero_opacity.position.clamp(0.0, 1.0),
            hero_scale: self.hero_scale.position.max(0.0),
        }
    }
}

impl Default for SmoothedFrame {
    fn default() -> Self {
        Self::new(ParallaxFrame::REST)
    }
}

/// Cursor follower position: two springs chasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SmoothedPointer {
    x: Spring,
    y: Spring,
}

impl SmoothedPointer {
    pub fn new(start: Pointer) -> Self {
        Self {
            x: Spring::at(start.x),
            y: Spring::at(start.y),
        }
    }

    pub fn step(self, target: Pointer, dt_secs: f64) -> Self {
        Self {
            x: self.x.step(target.x, dt_secs, SpringConfig::CURSOR),
            y: self.y.step(target.y, dt_secs, SpringConfig::CURSOR),
        }
    }

    pub fn is_settled(&self, target: Pointer) -> bool {
        self.x.is_settled(target.x) && self.y.is_settled(target.y)
    }

    pub fn pointer(&self) -> Pointer {
        Pointer {
            x: self.x.position,
            y: self.y.position,
        }
    }
}

/// Everything the animation loop advances between frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageMotion {
    frame: SmoothedFrame,
    cursor: SmoothedPointer,
}

impl PageMotion {
    /// Targets come straight from the state: the scroll-derived frame and the
    /// raw pointer.
    pub fn is_settled(&self, state: &UiState) -> bool {
        self.frame
            .is_settled(ParallaxFrame::from_scroll(state.scroll_y, state.device))
            && self.cursor.is_settled(state.pointer)
    }

    pub fn step(self, state: &UiState, dt_secs: f64) -> Self {
        let target = ParallaxFrame::from_scroll(state.scroll_y, state.device);
        Self {
            frame: self
                .frame
                .step(target, dt_secs, SpringConfig::for_device(state.device)),
            cursor: self.cursor.step(state.pointer, dt_secs),
        }
    }

    pub fn frame(&self) -> ParallaxFrame {
        self.frame.frame()
    }

    pub fn cursor(&self) -> Pointer {
        self.cursor.pointer()
    }
}

/// Longest step the loop will integrate after a stall (tab in background,
/// debugger pause).
pub const MAX_FRAME_SECS: f64 = 0.1;

/// Seconds between two clock readings in milliseconds, clamped to
/// `0..=MAX_FRAME_SECS`.
pub fn frame_dt_secs(last_ms: f64, now_ms: f64) -> f64 {
    let dt = (now_ms - last_ms) / 1000.0;
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_SECS)
    } else {
        0.0
    }
}

/// Top-left corner of the cursor follower so that it centres on the pointer.
pub fn cursor_offset(pointer: Pointer) -> (f64, f64) {
    let half = CURSOR_SIZE_PX / 2.0;
    (pointer.x - half, pointer.y - half)
}

pub fn cursor_style(pointer: Pointer) -> String {
    let (x, y) = cursor_offset(pointer);
    format!("transform: translate3d({x:.1}px, {y:.1}px, 0);")
}

/// Staggered entrance delay in seconds. Mobile layouts reveal everything at once.
pub fn reveal_delay(index: usize, device: DeviceClass, step_secs: f64) -> f64 {
    if device.is_mobile() {
        0.0
    } else {
        index as f64 * step_secs
    }
}

pub fn reveal_style(index: usize, device: DeviceClass, step_secs: f64) -> String {
    format!("animation-delay: {:.2}s;", reveal_delay(index, device, step_secs))
}

/// The navbar is solid once the page scrolled, and always on mobile.
pub fn nav_is_solid(state: &UiState) -> bool {
    state.scrolled || state.device.is_mobile()
}
