use std::cell::RefCell;
use std::rc::Rc;

use super::capability::{Attractor, Drawable, Informative, Movable, StaticPose, Updatable};

/// Shared handle to a scene entity viewed through one capability.
///
/// The scene is single-threaded by contract, so shared ownership is
/// `Rc<RefCell<_>>`; one concrete entity is typically registered under
/// several capability views of the same allocation.
pub type Shared<T> = Rc<RefCell<T>>;

/// Stable identifier assigned to an entity at registration.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct EntityId(pub(crate) u64);

/// Explicit capability declaration for one entity.
///
/// The caller states exactly which capability groups the entity joins; the
/// scene never inspects an entity's concrete type. Membership is fixed once
/// the registration is added — runtime behavior flags (e.g. the movable
/// attractor flag) change force computation, never grouping.
///
/// ```rust,ignore
/// let ball = Rc::new(RefCell::new(Ball::new(...)));
/// scene.add_entity(
///     Registration::new()
///         .movable(ball.clone())
///         .updatable(ball.clone())
///         .drawable(ball.clone()),
/// );
/// ```
///
/// The `overlay` slot is the distinguished render layer for translucent
/// bodies that composite after the actors, independent of the other layers.
#[derive(Default)]
pub struct Registration {
    pub(crate) movable: Option<Shared<dyn Movable>>,
    pub(crate) updatable: Option<Shared<dyn Updatable>>,
    pub(crate) drawable: Option<Shared<dyn Drawable>>,
    pub(crate) attractor: Option<Shared<dyn Attractor>>,
    pub(crate) informative: Option<Shared<dyn Informative>>,
    pub(crate) static_pose: Option<Shared<dyn StaticPose>>,
    pub(crate) overlay: Option<Shared<dyn Drawable>>,
}

impl Registration {
    /// Starts an empty declaration. An entity registered without any
    /// capability is tracked in the master list but joins no per-frame pass.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movable<T: Movable + 'static>(mut self, handle: Shared<T>) -> Self {
        let handle: Shared<dyn Movable> = handle;
        self.movable = Some(handle);
        self
    }

    pub fn updatable<T: Updatable + 'static>(mut self, handle: Shared<T>) -> Self {
        let handle: Shared<dyn Updatable> = handle;
        self.updatable = Some(handle);
        self
    }

    pub fn drawable<T: Drawable + 'static>(mut self, handle: Shared<T>) -> Self {
        let handle: Shared<dyn Drawable> = handle;
        self.drawable = Some(handle);
        self
    }

    pub fn attractor<T: Attractor + 'static>(mut self, handle: Shared<T>) -> Self {
        let handle: Shared<dyn Attractor> = handle;
        self.attractor = Some(handle);
        self
    }

    pub fn informative<T: Informative + 'static>(mut self, handle: Shared<T>) -> Self {
        let handle: Shared<dyn Informative> = handle;
        self.informative = Some(handle);
        self
    }

    pub fn static_pose<T: StaticPose + 'static>(mut self, handle: Shared<T>) -> Self {
        let handle: Shared<dyn StaticPose> = handle;
        self.static_pose = Some(handle);
        self
    }

    /// Declares membership in the distinguished overlay render layer.
    pub fn overlay<T: Drawable + 'static>(mut self, handle: Shared<T>) -> Self {
        let handle: Shared<dyn Drawable> = handle;
        self.overlay = Some(handle);
        self
    }

    // ── declared-capability views ─────────────────────────────────────────

    pub fn as_movable(&self) -> Option<&Shared<dyn Movable>> {
        self.movable.as_ref()
    }

    pub fn as_updatable(&self) -> Option<&Shared<dyn Updatable>> {
        self.updatable.as_ref()
    }

    pub fn as_drawable(&self) -> Option<&Shared<dyn Drawable>> {
        self.drawable.as_ref()
    }

    pub fn as_attractor(&self) -> Option<&Shared<dyn Attractor>> {
        self.attractor.as_ref()
    }

    pub fn as_informative(&self) -> Option<&Shared<dyn Informative>> {
        self.informative.as_ref()
    }

    pub fn as_static_pose(&self) -> Option<&Shared<dyn StaticPose>> {
        self.static_pose.as_ref()
    }

    pub fn as_overlay(&self) -> Option<&Shared<dyn Drawable>> {
        self.overlay.as_ref()
    }

    /// Short capability listing for log records, e.g. `"movable+drawable"`.
    pub(crate) fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.movable.is_some() {
            parts.push("movable");
        }
        if self.updatable.is_some() {
            parts.push("updatable");
        }
        if self.drawable.is_some() {
            parts.push("drawable");
        }
        if self.attractor.is_some() {
            parts.push("attractor");
        }
        if self.informative.is_some() {
            parts.push("informative");
        }
        if self.static_pose.is_some() {
            parts.push("static");
        }
        if self.overlay.is_some() {
            parts.push("overlay");
        }
        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join("+")
        }
    }
}
