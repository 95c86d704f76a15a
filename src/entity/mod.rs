use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::graphics::Graphics;
use crate::surface::Surface;
use crate::Event;

/// Pixels per millisecond. Positive x points right, positive y points down.
pub type Velocity = glam::Vec2;

/// Position and size of an element on the screen. The position is the top
/// left corner relative to the top left of the screen. The size never
/// changes once the rect exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    width: u32,
    height: u32,
}

impl Rect {
    pub(crate) fn new(x: f32, y: f32, width: u32, height: u32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn topleft(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn set_topleft(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn right(&self) -> f32 {
        self.x + self.width as f32
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height as f32
    }

    pub fn center(&self) -> (f32, f32) {
        (
            self.x + self.width as f32 / 2.0,
            self.y + self.height as f32 / 2.0,
        )
    }

    /// Moves the rect in place.
    pub fn move_ip(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}

/// Where an element's image comes from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// An image file, loaded through `Graphics::load_image`.
    Path(PathBuf),
    /// A surface the caller already has. The element shares it.
    Surface(Arc<Surface>),
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        ImageSource::Path(PathBuf::from(path))
    }
}

impl From<String> for ImageSource {
    fn from(path: String) -> Self {
        ImageSource::Path(PathBuf::from(path))
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        ImageSource::Path(path.to_owned())
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<Surface> for ImageSource {
    fn from(surface: Surface) -> Self {
        ImageSource::Surface(Arc::new(surface))
    }
}

impl From<Arc<Surface>> for ImageSource {
    fn from(surface: Arc<Surface>) -> Self {
        ImageSource::Surface(surface)
    }
}

/// Something that is updated, checked for collisions and drawn once per
/// frame, normally in that order.
///
/// `update` and `draw` have no default body. A type that wraps an `Element`
/// must write the whole behaviour itself rather than calling the wrapped
/// element's `update` or `draw` on top of its own, or the movement ends up
/// applied twice.
pub trait GameElement {
    fn element(&self) -> &Element;
    fn element_mut(&mut self) -> &mut Element;

    /// `dt` is the number of milliseconds since the previous call. `events`
    /// and `screen` may be absent.
    fn update(&mut self, dt: f32, events: Option<&[Event]>, screen: Option<&Surface>);

    /// React to colliding with `other`. Only `self` may change; `other` gets
    /// its own call.
    fn collided_with(&mut self, _other: &dyn GameElement) {}

    fn draw(&self, screen: &mut Surface);

    fn rect(&self) -> &Rect {
        &self.element().rect
    }

    fn collidable(&self) -> bool {
        self.element().collidable
    }
}

/// The plain game element: an image moving at a constant velocity.
#[derive(Debug, Clone)]
pub struct Element {
    image: Arc<Surface>,
    rect: Rect,
    pub velocity: Velocity,
    /// Whether collision detection should consider this element at all.
    /// Backgrounds and the like turn it off.
    pub collidable: bool,
}

impl Element {
    pub fn new<S: Into<ImageSource>>(
        graphics: &Graphics,
        source: S,
        x: f32,
        y: f32,
        velocity: Velocity,
        collidable: bool,
    ) -> Result<Self> {
        Self::new_for::<Self, S>(graphics, source, x, y, velocity, collidable)
    }

    /// Like `new`, but a failed graphics check reports `T` as the type being
    /// built. Meant for types that wrap an `Element`.
    pub fn new_for<T: ?Sized, S: Into<ImageSource>>(
        graphics: &Graphics,
        source: S,
        x: f32,
        y: f32,
        velocity: Velocity,
        collidable: bool,
    ) -> Result<Self> {
        if !graphics.is_initialized() {
            return Err(Error::UninitializedSubsystem {
                type_name: short_type_name::<T>(),
            });
        }

        let image = match source.into() {
            ImageSource::Path(path) => Arc::new(graphics.load_image(path)?),
            ImageSource::Surface(surface) => {
                if surface.width() == 0 || surface.height() == 0 {
                    return Err(Error::InvalidArgument(format!(
                        "surface of size {}x{} has nothing to draw",
                        surface.width(),
                        surface.height()
                    )));
                }
                surface
            }
        };

        let rect = image.rect_at(x, y);
        debug!(
            "new {} at ({}, {}) size {:?}",
            short_type_name::<T>(),
            x,
            y,
            rect.size()
        );

        Ok(Element {
            image,
            rect,
            velocity,
            collidable,
        })
    }

    /// At (0, 0), standing still and collidable.
    pub fn from_source<S: Into<ImageSource>>(graphics: &Graphics, source: S) -> Result<Self> {
        Self::new(graphics, source, 0.0, 0.0, Velocity::ZERO, true)
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.rect.set_topleft(x, y);
        self
    }

    pub fn with_velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_collidable(mut self, collidable: bool) -> Self {
        self.collidable = collidable;
        self
    }

    pub fn image(&self) -> &Arc<Surface> {
        &self.image
    }

    /// Always the size of the image. Only the position can change.
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn set_topleft(&mut self, x: f32, y: f32) {
        self.rect.set_topleft(x, y);
    }

    pub fn move_ip(&mut self, dx: f32, dy: f32) {
        self.rect.move_ip(dx, dy);
    }

    /// The top-left corner rounded down to the pixel the image is drawn at.
    pub fn pixel_topleft(&self) -> (i64, i64) {
        (self.rect.x.floor() as i64, self.rect.y.floor() as i64)
    }

    /// How far the element travels in `dt` milliseconds.
    pub fn displacement(&self, dt: f32) -> Velocity {
        self.velocity * dt
    }
}

impl GameElement for Element {
    fn element(&self) -> &Element {
        self
    }

    fn element_mut(&mut self) -> &mut Element {
        self
    }

    fn update(&mut self, dt: f32, _events: Option<&[Event]>, _screen: Option<&Surface>) {
        let step = self.displacement(dt);
        self.rect.move_ip(step.x, step.y);
    }

    fn draw(&self, screen: &mut Surface) {
        let (x, y) = self.pixel_topleft();
        screen.blit(&self.image, x, y);
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
