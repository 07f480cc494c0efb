pub mod controller;
pub mod render;
pub mod state;
pub mod surface;

pub use controller::OverlayController;
pub use render::{PanelView, Section};
pub use state::OverlayState;
pub use surface::{HeadlessSurface, InputEvent, Key, Listener, PanelId, Point, Rect, Surface};
