pub mod entities;
pub mod nav_target;
pub mod policies;
