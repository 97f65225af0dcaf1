pub mod aerodynamics;
pub mod atmosphere;
pub mod forces;

pub use aerodynamics::{DragProfile, BODY_DRAG_COEFFICIENT};
pub use forces::ForceSet;
