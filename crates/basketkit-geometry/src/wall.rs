//! Perforated, tapered walls.
//!
//! A wall is described in its own profile plane: x runs along the wall
//! centred on 0, y runs up the slanted face starting at the floor. The
//! [`Wall`] placement carries the translation, yaw and tilt that put the
//! profile into basket space.

use crate::shapes::Rect2;
use basketkit_core::{BasketSpec, TrackSpec, VerticalSpec};
use glam::{DMat4, DQuat, DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Baskets taller than this get a third, stretched middle row.
const THREE_ROW_MIN_HEIGHT: f64 = 120.0;
const ROW_PADDING: f64 = 0.5;

/// One horizontal band of holes, in unslanted (vertical) millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoleRow {
    pub y: f64,
    pub height: f64,
}

/// Hole rows for a basket of the given height.
///
/// Rows are separated by the rail height. Tall baskets get a bottom row,
/// a middle row filling the remaining space and a top row.
pub fn hole_rows(height: f64, vertical: &VerticalSpec) -> Vec<HoleRow> {
    let rail = vertical.rail_height;
    let bottom = HoleRow {
        y: ROW_PADDING,
        height: vertical.bottom_hole_height,
    };
    let above_bottom = ROW_PADDING + vertical.bottom_hole_height + rail;

    if height > THREE_ROW_MIN_HEIGHT {
        let fixed = vertical.bottom_hole_height + vertical.top_hole_height + rail * 2.0;
        let middle_height = (height - 2.0 * ROW_PADDING) - fixed;
        let middle = HoleRow {
            y: above_bottom,
            height: middle_height,
        };
        let top = HoleRow {
            y: middle.y + middle_height + rail,
            height: vertical.top_hole_height,
        };
        vec![bottom, middle, top]
    } else {
        vec![
            bottom,
            HoleRow {
                y: above_bottom,
                height: vertical.top_hole_height,
            },
        ]
    }
}

/// Flat outline of one wall with its hole cut-outs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallProfile {
    pub bottom_width: f64,
    pub top_width: f64,
    /// Height measured along the slanted face
    pub slant_height: f64,
    /// Factor turning vertical millimetres into slanted ones
    pub slant_scale: f64,
    /// Inward lean of the wall, radians
    pub taper_angle: f64,
    /// Trapezoid corners: bottom-left, bottom-right, top-right, top-left
    pub outline: [DVec2; 4],
    pub holes: Vec<Rect2>,
}

impl WallProfile {
    pub fn new(
        bottom_width: f64,
        top_width: f64,
        height: f64,
        track: &TrackSpec,
        rows: &[HoleRow],
    ) -> Self {
        let taper_angle = (((top_width - bottom_width) / 2.0) / height).atan();
        let slant_scale = 1.0 / taper_angle.cos();
        let slant_height = height * slant_scale;

        let half_bottom = bottom_width / 2.0;
        let half_top = top_width / 2.0;
        let outline = [
            DVec2::new(-half_bottom, 0.0),
            DVec2::new(half_bottom, 0.0),
            DVec2::new(half_top, slant_height),
            DVec2::new(-half_top, slant_height),
        ];

        let pitch = track.pitch();
        let mut holes = Vec::with_capacity(rows.len() * track.cols as usize);
        for row in rows {
            let start_y = row.y * slant_scale;
            let hole_height = row.height * slant_scale;
            let ratio = row.y / height;
            let current_half = (bottom_width + (top_width - bottom_width) * ratio) / 2.0;
            let margin = track.margin_bottom + (track.margin_top - track.margin_bottom) * ratio;
            let start_x = -current_half + margin;

            for i in 0..track.cols {
                let x = start_x + i as f64 * pitch;
                holes.push(Rect2::new(
                    DVec2::new(x, start_y),
                    DVec2::new(x + track.gap, start_y + hole_height),
                ));
            }
        }

        Self {
            bottom_width,
            top_width,
            slant_height,
            slant_scale,
            taper_angle,
            outline,
            holes,
        }
    }

    /// Width of the wall at a slanted height `y`.
    pub fn width_at(&self, y: f64) -> f64 {
        let ratio = (y / self.slant_height).clamp(0.0, 1.0);
        self.bottom_width + (self.top_width - self.bottom_width) * ratio
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    North,
    South,
    East,
    West,
}

impl WallSide {
    pub const ALL: [WallSide; 4] = [
        WallSide::North,
        WallSide::South,
        WallSide::East,
        WallSide::West,
    ];

    pub fn is_long(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    /// Rotation about the vertical axis that turns the profile to face
    /// inward from this side.
    pub fn yaw(self) -> f64 {
        match self {
            Self::North => 0.0,
            Self::South => PI,
            Self::East => FRAC_PI_2,
            Self::West => -FRAC_PI_2,
        }
    }
}

/// A wall profile placed in basket space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub side: WallSide,
    pub profile: WallProfile,
    pub translation: DVec3,
    pub yaw: f64,
}

impl Wall {
    pub fn build(side: WallSide, spec: &BasketSpec, height: f64, rows: &[HoleRow]) -> Self {
        let dims = &spec.dimensions;
        let (bottom, top, track) = if side.is_long() {
            (
                dims.internal_bottom.length,
                dims.internal_top.length,
                &spec.holes.long_side,
            )
        } else {
            (
                dims.internal_bottom.width,
                dims.internal_top.width,
                &spec.holes.short_side,
            )
        };

        let half_length = dims.internal_bottom.length / 2.0;
        let half_width = dims.internal_bottom.width / 2.0;
        let translation = match side {
            WallSide::North => DVec3::new(0.0, 0.0, half_width),
            WallSide::South => DVec3::new(0.0, 0.0, -half_width),
            WallSide::East => DVec3::new(half_length, 0.0, 0.0),
            WallSide::West => DVec3::new(-half_length, 0.0, 0.0),
        };

        Self {
            side,
            profile: WallProfile::new(bottom, top, height, track, rows),
            translation,
            yaw: side.yaw(),
        }
    }

    /// Profile-to-basket transform: translate, yaw, then tilt by the taper.
    pub fn transform(&self) -> DMat4 {
        let rotation =
            DQuat::from_rotation_y(self.yaw) * DQuat::from_rotation_x(self.profile.taper_angle);
        DMat4::from_rotation_translation(rotation, self.translation)
    }
}
