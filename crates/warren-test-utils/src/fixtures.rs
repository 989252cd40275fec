//! Reusable payload fixtures.

use bytemuck::{Pod, Zeroable};
use warren_core::{Handle, Kinded};

/// Discriminator values for [`Critter::kind`].
///
/// Plain `u8` constants rather than an enum: payloads must be `Pod`, and
/// `Pod` requires every bit pattern to be valid.
pub mod kind {
    pub const NONE: u8 = 0;
    pub const PLAYER: u8 = 1;
    pub const ENEMY: u8 = 2;
    pub const PROJECTILE: u8 = 3;
    pub const PICKUP: u8 = 4;
}

/// A game-entity payload exercising everything a pool payload can carry:
/// a kind tag, motion state, health, and an embedded target [`Handle`].
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Critter {
    pub kind: u8,
    /// Explicit padding so the `repr(C)` layout has no implicit holes.
    pub _pad: [u8; 3],
    pub px: f32,
    pub py: f32,
    pub vx: f32,
    pub vy: f32,
    pub health: i32,
    pub target: Handle,
}

impl Critter {
    /// A zeroed critter of the given kind.
    pub fn of_kind(kind: u8) -> Self {
        Self {
            kind,
            ..Zeroable::zeroed()
        }
    }

    /// A critter of the given kind with starting health.
    pub fn with_health(kind: u8, health: i32) -> Self {
        Self {
            kind,
            health,
            ..Zeroable::zeroed()
        }
    }

    /// A projectile homing on `target`.
    pub fn projectile_at(target: Handle) -> Self {
        Self {
            kind: kind::PROJECTILE,
            target,
            ..Zeroable::zeroed()
        }
    }
}

impl Kinded for Critter {
    type Kind = u8;

    fn kind(&self) -> u8 {
        self.kind
    }
}
