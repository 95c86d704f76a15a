#[macro_use]
extern crate log;

pub mod entity;
pub mod error;
mod framecounter;
pub mod graphics;
pub mod scene;
pub mod surface;

pub use entity::{Element, GameElement, ImageSource, Rect, Velocity};
pub use error::{Error, Result};
pub use framecounter::FrameClock;
pub use graphics::{Graphics, Settings};
pub use scene::{CollisionDetector, NoCollisions, Scene};
pub use surface::Surface;

/// Input events handed to `GameElement::update`.
pub type Event = winit::event::WindowEvent;
