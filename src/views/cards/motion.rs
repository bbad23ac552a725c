//! Card animation as data: named style snapshots plus the transitions between them.
//!
//! Two independent channels drive a card. The entry channel runs once per card id,
//! from `initial` to `visible`, starting on the first frame the card is drawn. The
//! hover channel follows the pointer and moves both the panel scale and the inner
//! colors (`light` to `highlight`). The button has its own press channel.

use eframe::egui::{self, Color32};

/// Timing curve of a transition. Named curves use the usual CSS control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Control points `(x1, y1, x2, y2)` of a cubic bezier from (0,0) to (1,1).
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    fn control_points(self) -> Option<(f32, f32, f32, f32)> {
        match self {
            Easing::Linear => None,
            Easing::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Easing::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
        }
    }

    /// Maps linear progress `t` in 0..=1 onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let Some((x1, y1, x2, y2)) = self.control_points() else {
            return t;
        };
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let s = solve_curve_x(x1, x2, t);
        bezier(y1, y2, s)
    }
}

fn bezier(a1: f32, a2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * s * a1 + 3.0 * u * s * s * a2 + s * s * s
}

fn bezier_slope(a1: f32, a2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * a1 + 6.0 * u * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
}

// Curve parameter whose x equals `x`. Newton first, bisection if the slope flattens.
fn solve_curve_x(x1: f32, x2: f32, x: f32) -> f32 {
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < 1e-5 {
            return s;
        }
        let d = bezier_slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = x;
    for _ in 0..32 {
        let v = bezier(x1, x2, s);
        if (v - x).abs() < 1e-5 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    s
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Seconds
    pub duration: f32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: f32, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Eased progress after `elapsed` seconds.
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.easing.apply(elapsed / self.duration)
    }
}

/// Geometry snapshot of the outer panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPose {
    pub opacity: f32,
    /// Vertical offset in logical pixels, positive is down.
    pub offset_y: f32,
    pub scale: f32,
}

/// Color snapshot of the inner background layer.
/// A solid fill has `top == bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPreset {
    pub top: Color32,
    pub bottom: Color32,
    pub text: Color32,
    pub muted_text: Color32,
}

impl ColorPreset {
    pub fn lerp(&self, other: &ColorPreset, t: f32) -> ColorPreset {
        ColorPreset {
            top: lerp_color(self.top, other.top, t),
            bottom: lerp_color(self.bottom, other.bottom, t),
            text: lerp_color(self.text, other.text, t),
            muted_text: lerp_color(self.muted_text, other.muted_text, t),
        }
    }

    pub fn with_opacity(&self, opacity: f32) -> ColorPreset {
        ColorPreset {
            top: self.top.gamma_multiply(opacity),
            bottom: self.bottom.gamma_multiply(opacity),
            text: self.text.gamma_multiply(opacity),
            muted_text: self.muted_text.gamma_multiply(opacity),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardMotion {
    pub initial: PanelPose,
    pub visible: PanelPose,
    pub entry: Transition,
    /// Panel scale at full hover
    pub hover_scale: f32,
    pub hover: Transition,
    pub light: ColorPreset,
    pub highlight: ColorPreset,
    pub color: Transition,
    /// Button scale while the pointer is held down on it
    pub pressed_scale: f32,
    pub press: Transition,
}

impl Default for CardMotion {
    fn default() -> Self {
        Self {
            initial: PanelPose {
                opacity: 0.0,
                offset_y: 24.0,
                scale: 1.0,
            },
            visible: PanelPose {
                opacity: 1.0,
                offset_y: 0.0,
                scale: 1.0,
            },
            entry: Transition::new(0.5, Easing::CubicBezier(0.16, 1.0, 0.3, 1.0)),
            hover_scale: 1.02,
            hover: Transition::new(0.2, Easing::EaseOut),
            light: ColorPreset {
                top: Color32::WHITE,
                bottom: Color32::WHITE,
                text: Color32::from_rgb(17, 24, 39),
                // description runs at 90% of the text color
                muted_text: Color32::from_rgb(17, 24, 39).gamma_multiply(0.9),
            },
            highlight: ColorPreset {
                top: Color32::from_rgb(250, 204, 21),
                bottom: Color32::from_rgb(202, 138, 4),
                text: Color32::WHITE,
                muted_text: Color32::WHITE.gamma_multiply(0.9),
            },
            color: Transition::new(0.4, Easing::CubicBezier(0.4, 0.0, 0.2, 1.0)),
            pressed_scale: 0.97,
            press: Transition::new(0.1, Easing::EaseOut),
        }
    }
}

impl CardMotion {
    /// Panel pose for already eased entry and hover progress.
    pub fn pose(&self, entry: f32, hover: f32) -> PanelPose {
        PanelPose {
            opacity: lerp_f32(self.initial.opacity, self.visible.opacity, entry),
            offset_y: lerp_f32(self.initial.offset_y, self.visible.offset_y, entry),
            scale: lerp_f32(1.0, self.hover_scale, hover),
        }
    }

    pub fn colors(&self, highlight: f32) -> ColorPreset {
        self.light.lerp(&self.highlight, highlight)
    }

    pub fn button_scale(&self, pressed: f32) -> f32 {
        lerp_f32(1.0, self.pressed_scale, pressed)
    }
}

pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let ch = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        ch(a.r(), b.r()),
        ch(a.g(), b.g()),
        ch(a.b(), b.b()),
        ch(a.a(), b.a()),
    )
}

/// Eased entry progress for the card `id`. The clock starts the first frame this id
/// is seen and keeps a repaint scheduled until the transition completes.
pub fn entry_progress(ui: &egui::Ui, id: egui::Id, transition: &Transition) -> f32 {
    let now = ui.input(|i| i.time);
    let started = ui
        .ctx()
        .memory_mut(|m| *m.data.get_temp_mut_or_insert_with(id, || now));
    let elapsed = (now - started) as f32;
    if elapsed < transition.duration {
        ui.ctx().request_repaint();
    }
    transition.progress(elapsed)
}

/// Eased progress towards `active`, reversing when it turns off.
pub fn toggle_progress(
    ctx: &egui::Context,
    id: egui::Id,
    active: bool,
    transition: &Transition,
) -> f32 {
    let t = ctx.animate_bool_with_time(id, active, transition.duration);
    transition.easing.apply(t)
}
