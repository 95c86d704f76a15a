use crate::entity::{GameElement, Rect};
use crate::surface::Surface;
use crate::Event;

/// Decides whether two collidable elements touch. The geometry is up to the
/// game; the scene only asks.
pub trait CollisionDetector {
    fn collides(&self, a: &Rect, b: &Rect) -> bool;
}

impl<F> CollisionDetector for F
where
    F: Fn(&Rect, &Rect) -> bool,
{
    fn collides(&self, a: &Rect, b: &Rect) -> bool {
        self(a, b)
    }
}

/// Never reports a collision.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCollisions;

impl CollisionDetector for NoCollisions {
    fn collides(&self, _a: &Rect, _b: &Rect) -> bool {
        false
    }
}

/// The elements in play, driven one frame at a time.
#[derive(Default)]
pub struct Scene {
    elements: Vec<Box<dyn GameElement>>,
}

impl Scene {
    pub fn new() -> Self {
        Scene {
            elements: Vec::new(),
        }
    }

    /// Adds an element and returns its index. Indices shift when `retain`
    /// drops elements in front of it.
    pub fn add(&mut self, element: Box<dyn GameElement>) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn GameElement> {
        self.elements.get(index).map(|e| &**e)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn GameElement + 'static)> {
        self.elements.get_mut(index).map(|e| &mut **e)
    }

    pub fn elements(&self) -> impl Iterator<Item = &dyn GameElement> {
        self.elements.iter().map(|e| &**e)
    }

    /// Drops the elements that have left play.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&dyn GameElement) -> bool,
    {
        self.elements.retain(|e| keep(&**e));
    }

    /// Runs one frame: every element is updated, colliding pairs are told
    /// about each other, then everything is drawn in insertion order.
    pub fn frame<D: CollisionDetector + ?Sized>(
        &mut self,
        dt: f32,
        events: Option<&[Event]>,
        screen: &mut Surface,
        detector: &D,
    ) {
        for element in &mut self.elements {
            element.update(dt, events, Some(&*screen));
        }

        let collisions = self.dispatch_collisions(detector);
        trace!(
            "frame dt={}ms, {} elements, {} collisions",
            dt,
            self.elements.len(),
            collisions
        );

        for element in &self.elements {
            element.draw(screen);
        }
    }

    /// Calls `collided_with` on both members of every colliding pair of
    /// collidable elements. Returns the number of pairs.
    ///
    /// Pairs are all detected first, from the positions after `update`. Within
    /// a pair the earlier element reacts first, so the later one sees it as
    /// it is after that reaction. Elements are not cloned to give both sides
    /// the same snapshot.
    pub fn dispatch_collisions<D: CollisionDetector + ?Sized>(&mut self, detector: &D) -> usize {
        let mut pairs = Vec::new();
        for i in 0..self.elements.len() {
            if !self.elements[i].collidable() {
                continue;
            }
            for j in i + 1..self.elements.len() {
                if !self.elements[j].collidable() {
                    continue;
                }
                if detector.collides(self.elements[i].rect(), self.elements[j].rect()) {
                    pairs.push((i, j));
                }
            }
        }

        // Every pair is found before anyone reacts
        for &(i, j) in &pairs {
            let (front, back) = self.elements.split_at_mut(j);
            let (a, b) = (&mut front[i], &mut back[0]);
            a.collided_with(&**b);
            b.collided_with(&**a);
        }
        pairs.len()
    }
}
