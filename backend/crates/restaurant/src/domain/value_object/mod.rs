//! Value Object Module

pub mod email;
pub mod restaurant_id;
