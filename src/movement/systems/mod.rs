//! Movement domain: system modules for the simulation step.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod kinematics;

pub(crate) use collisions::resolve_collisions;
pub(crate) use input::sample_input;
pub(crate) use kinematics::{apply_jump_and_gravity, steer};
