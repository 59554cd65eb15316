use std::mem;

use log::debug;

use crate::math::{MathError, Vector};
use crate::render::{Canvas, Color};

use super::capability::{Attractor, Drawable, Informative, Movable, Updatable};
use super::config::{Extent, SceneConfig};
use super::registration::{EntityId, Registration, Shared};

/// Entry in a derived capability list: the owning entity plus the capability
/// view of it.
pub struct CapabilityRef<T: ?Sized> {
    pub id: EntityId,
    pub handle: Shared<T>,
}

/// Master-list record for one registered entity.
pub struct EntityRecord {
    id: EntityId,
    registration: Registration,
}

impl EntityRecord {
    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// The capability declaration the entity was registered with.
    #[inline]
    pub fn registration(&self) -> &Registration {
        &self.registration
    }
}

/// Scene-wide per-tick hook, run inside the attraction stage after the
/// attractor pass and before any entity advances its own state.
///
/// Effects see the whole scene read-only and reach entities through their
/// shared handles (e.g. to feed gravity into every movable).
pub type GlobalEffect = Box<dyn FnMut(f32, &SceneModel) -> Result<(), MathError>>;

/// Central state holder and per-frame orchestrator.
///
/// Entities are classified into capability groups exactly once, at
/// [`add_entity`](SceneModel::add_entity); the per-frame passes iterate the
/// precomputed groups and never re-inspect an entity. The drawable group is
/// materialized directly as the three render layers.
///
/// Tick ordering is fixed: attraction and global effects, then every
/// updatable's state advance in registration order, then bookkeeping
/// (deferred removals). The first error aborts the tick.
pub struct SceneModel {
    extent: Extent,
    background: Color,
    origin: Vector,
    debug_overlay: bool,
    pointer: Vector,
    next_id: u64,

    records: Vec<EntityRecord>,
    movables: Vec<CapabilityRef<dyn Movable>>,
    updatables: Vec<CapabilityRef<dyn Updatable>>,
    attractors: Vec<CapabilityRef<dyn Attractor>>,
    informatives: Vec<CapabilityRef<dyn Informative>>,
    background_layer: Vec<CapabilityRef<dyn Drawable>>,
    actor_layer: Vec<CapabilityRef<dyn Drawable>>,
    overlay_layer: Vec<CapabilityRef<dyn Drawable>>,

    global_effects: Vec<GlobalEffect>,
    pending_removals: Vec<EntityId>,
}

impl SceneModel {
    pub fn new(config: SceneConfig) -> Self {
        let origin = config.extent.center();
        Self {
            extent: config.extent,
            background: config.background,
            pointer: origin.clone(),
            origin,
            debug_overlay: config.debug_overlay,
            next_id: 0,
            records: Vec::new(),
            movables: Vec::new(),
            updatables: Vec::new(),
            attractors: Vec::new(),
            informatives: Vec::new(),
            background_layer: Vec::new(),
            actor_layer: Vec::new(),
            overlay_layer: Vec::new(),
            global_effects: Vec::new(),
            pending_removals: Vec::new(),
        }
    }

    // ── registration ──────────────────────────────────────────────────────

    /// Registers an entity and indexes it by its declared capabilities.
    ///
    /// Render-layer membership is derived here as well: background for
    /// drawables with a static pose, actors for drawables that are movable,
    /// and the overlay slot verbatim. A drawable declaring none of the three
    /// never renders, and a zero-capability entity joins no per-frame pass;
    /// both stay in the master list for lookup.
    ///
    /// Adding the same entity twice registers it twice, with a fresh id and
    /// duplicate membership in every matching group. Current behavior, not
    /// necessarily desired.
    pub fn add_entity(&mut self, registration: Registration) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;

        if let Some(h) = registration.as_movable() {
            self.movables.push(CapabilityRef { id, handle: h.clone() });
        }
        if let Some(h) = registration.as_updatable() {
            self.updatables.push(CapabilityRef { id, handle: h.clone() });
        }
        if let Some(h) = registration.as_attractor() {
            self.attractors.push(CapabilityRef { id, handle: h.clone() });
        }
        if let Some(h) = registration.as_informative() {
            self.informatives.push(CapabilityRef { id, handle: h.clone() });
        }
        if let Some(h) = registration.as_drawable() {
            if registration.as_static_pose().is_some() {
                self.background_layer.push(CapabilityRef { id, handle: h.clone() });
            }
            if registration.as_movable().is_some() {
                self.actor_layer.push(CapabilityRef { id, handle: h.clone() });
            }
        }
        if let Some(h) = registration.as_overlay() {
            self.overlay_layer.push(CapabilityRef { id, handle: h.clone() });
        }

        debug!("entity {} registered: {}", id.0, registration.summary());
        self.records.push(EntityRecord { id, registration });
        id
    }

    /// Queues an entity for removal.
    ///
    /// The purge happens in the bookkeeping stage of the next
    /// [`update`](SceneModel::update), clearing the master list and every
    /// capability/layer group in one pass — deferred so that no in-flight
    /// iteration ever observes a half-removed entity.
    pub fn remove_entity(&mut self, id: EntityId) {
        self.pending_removals.push(id);
    }

    /// Registers a per-tick scene-wide effect.
    pub fn add_global_effect(&mut self, effect: GlobalEffect) {
        self.global_effects.push(effect);
    }

    // ── per-frame passes ──────────────────────────────────────────────────

    /// Advances the scene by one tick of `dt` seconds.
    ///
    /// Stage order is fixed: (1) attraction — every attractor applies its
    /// force to every movable except itself, then the registered global
    /// effects run; (2) every updatable advances, in registration order;
    /// (3) bookkeeping — queued removals are purged. Errors abort the tick.
    pub fn update(&mut self, dt: f32) -> Result<(), MathError> {
        self.apply_attraction()?;
        self.run_global_effects(dt)?;

        for updatable in &self.updatables {
            updatable.handle.borrow_mut().update(dt);
        }

        self.purge_removed();
        Ok(())
    }

    fn apply_attraction(&self) -> Result<(), MathError> {
        for attractor in &self.attractors {
            for movable in &self.movables {
                if attractor.id == movable.id {
                    continue;
                }
                let force = {
                    let a = attractor.handle.borrow();
                    let m = movable.handle.borrow();
                    a.attract(&*m)
                };
                movable.handle.borrow_mut().apply_force(&force)?;
            }
        }
        Ok(())
    }

    fn run_global_effects(&mut self, dt: f32) -> Result<(), MathError> {
        // Effects receive `&self`, so take them out of the model for the call.
        let mut effects = mem::take(&mut self.global_effects);
        let result = effects.iter_mut().try_for_each(|effect| effect(dt, &*self));
        self.global_effects = effects;
        result
    }

    fn purge_removed(&mut self) {
        if self.pending_removals.is_empty() {
            return;
        }
        let removals = mem::take(&mut self.pending_removals);
        let before = self.records.len();

        self.records.retain(|r| !removals.contains(&r.id));
        self.movables.retain(|c| !removals.contains(&c.id));
        self.updatables.retain(|c| !removals.contains(&c.id));
        self.attractors.retain(|c| !removals.contains(&c.id));
        self.informatives.retain(|c| !removals.contains(&c.id));
        self.background_layer.retain(|c| !removals.contains(&c.id));
        self.actor_layer.retain(|c| !removals.contains(&c.id));
        self.overlay_layer.retain(|c| !removals.contains(&c.id));

        debug!("purged {} removed entities", before - self.records.len());
    }

    /// Draws the visible drawables layer by layer: background, then actors,
    /// then the overlay. Within a layer, registration order. An entity in
    /// several layers draws once per layer.
    pub fn draw_layers(&self, canvas: &mut dyn Canvas) {
        for layer in [&self.background_layer, &self.actor_layer, &self.overlay_layer] {
            for drawable in layer.iter() {
                let d = drawable.handle.borrow();
                if d.is_visible() {
                    d.draw(canvas);
                }
            }
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    /// All registered entities, in registration order.
    #[inline]
    pub fn entities(&self) -> &[EntityRecord] {
        &self.records
    }

    #[inline]
    pub fn movables(&self) -> &[CapabilityRef<dyn Movable>] {
        &self.movables
    }

    #[inline]
    pub fn attractors(&self) -> &[CapabilityRef<dyn Attractor>] {
        &self.attractors
    }

    #[inline]
    pub fn informatives(&self) -> &[CapabilityRef<dyn Informative>] {
        &self.informatives
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// World origin: the scene center.
    #[inline]
    pub fn origin(&self) -> &Vector {
        &self.origin
    }

    #[inline]
    pub fn background_color(&self) -> Color {
        self.background
    }

    #[inline]
    pub fn is_debug_overlay(&self) -> bool {
        self.debug_overlay
    }

    pub fn set_debug_overlay(&mut self, enabled: bool) {
        self.debug_overlay = enabled;
    }

    pub fn toggle_debug_overlay(&mut self) {
        self.debug_overlay = !self.debug_overlay;
    }

    /// Last pointer position reported by the input collaborator. Starts at
    /// the world origin.
    #[inline]
    pub fn pointer_position(&self) -> &Vector {
        &self.pointer
    }

    /// Records the pointer position. Called by the input collaborator
    /// between ticks; the new value is visible to the next `update`.
    pub fn set_pointer_position(&mut self, position: Vector) {
        self.pointer = position;
    }
}
