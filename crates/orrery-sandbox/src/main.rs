//! Headless sandbox scene: a bouncing ball under gravity, a floor, a beacon
//! pulling the ball toward the scene center, and a translucent puddle in the
//! overlay layer.
//!
//! Stands in for a windowed driver: it owns the cadence, feeds simulated
//! pointer/keyboard input through the two scene entry points, and renders
//! every frame into a recording canvas.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use log::info;

use orrery_engine::logging::{LoggingConfig, init_logging};
use orrery_engine::math::Vector;
use orrery_engine::motion::Body;
use orrery_engine::render::{Canvas, Color, DrawList, SceneRenderer};
use orrery_engine::scene::{
    Attractor, Drawable, Extent, Informative, Movable, Registration, SceneConfig, SceneModel,
    StaticPose, Updatable,
};
use orrery_engine::time::FrameClock;

const FLOOR_HEIGHT: f32 = 40.0;
const FRAMES: u64 = 600;

// ── Ball ──────────────────────────────────────────────────────────────────

/// Dynamic actor with a minimal floor-contact resolver.
struct Ball {
    body: Body,
    radius: f32,
    visible: bool,
    color: Color,
    floor_y: f32,
}

impl Ball {
    fn new(x: f32, y: f32, floor_y: f32) -> Result<Self> {
        let mut body = Body::new(Vector::of2(x, y));
        body.set_mass(2.0)?;
        body.set_bouncy(true);
        body.set_restitution(0.7)?;
        body.set_friction(true);
        body.set_friction_coefficient(6.0)?;
        body.set_drag(true);
        body.set_drag_coefficient(0.002)?;
        body.set_velocity(Vector::of2(90.0, 0.0))?;
        Ok(Self {
            body,
            radius: 12.0,
            visible: true,
            color: Color::rgb(0.9, 0.4, 0.2),
            floor_y,
        })
    }
}

impl Movable for Ball {
    fn body(&self) -> &Body {
        &self.body
    }
    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

impl Updatable for Ball {
    fn update(&mut self, dt: f32) {
        self.body.step(dt);

        // Floor contact: clamp back above the floor, bounce, publish status.
        let overshoot = self.body.location().y() + self.radius - self.floor_y;
        if overshoot >= 0.0 {
            let mut location = self.body.location().clone();
            if let Some(y) = location.component_mut(1) {
                *y -= overshoot;
            }
            // Same dimension as the body; cannot fail.
            let _ = self.body.set_location(location);
            self.body.bounce(0);

            let sliding = self.body.velocity().x().abs() > 0.05;
            self.body.resolve_contact(true, sliding);
        } else {
            self.body.resolve_contact(false, false);
        }
    }
}

impl Drawable for Ball {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.set_color(self.color);
        canvas.fill_rect(
            self.body.location().x() - self.radius,
            self.body.location().y() - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        );
    }
    fn angle(&self) -> f32 {
        self.body.angle()
    }
    fn set_angle(&mut self, angle: f32) {
        self.body.set_angle(angle);
    }
    fn is_visible(&self) -> bool {
        self.visible
    }
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
    fn color(&self) -> Color {
        self.color
    }
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

// ── Floor ─────────────────────────────────────────────────────────────────

struct Floor {
    location: Vector,
    angle: f32,
    width: f32,
    visible: bool,
    color: Color,
}

impl Floor {
    fn new(extent: Extent) -> Self {
        Self {
            location: Vector::of2(0.0, extent.height - FLOOR_HEIGHT),
            angle: 0.0,
            width: extent.width,
            visible: true,
            color: Color::rgb(0.25, 0.2, 0.15),
        }
    }
}

impl StaticPose for Floor {
    fn location(&self) -> &Vector {
        &self.location
    }
    fn set_location(&mut self, location: Vector) {
        self.location = location;
    }
    fn angle(&self) -> f32 {
        self.angle
    }
    fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }
}

impl Drawable for Floor {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.set_color(self.color);
        canvas.fill_rect(self.location.x(), self.location.y(), self.width, FLOOR_HEIGHT);
    }
    fn angle(&self) -> f32 {
        self.angle
    }
    fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }
    fn is_visible(&self) -> bool {
        self.visible
    }
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
    fn color(&self) -> Color {
        self.color
    }
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

// ── Puddle ────────────────────────────────────────────────────────────────

/// Translucent liquid body; composites after the actors via the overlay slot.
struct Puddle {
    location: Vector,
    angle: f32,
    width: f32,
    depth: f32,
    visible: bool,
    color: Color,
}

impl Puddle {
    fn new(extent: Extent) -> Self {
        Self {
            location: Vector::of2(extent.width * 0.6, extent.height - FLOOR_HEIGHT - 18.0),
            angle: 0.0,
            width: extent.width * 0.25,
            depth: 18.0,
            visible: true,
            color: Color::new(0.2, 0.4, 0.9, 0.45),
        }
    }
}

impl Drawable for Puddle {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.set_color(self.color);
        canvas.fill_rect(self.location.x(), self.location.y(), self.width, self.depth);
    }
    fn angle(&self) -> f32 {
        self.angle
    }
    fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }
    fn is_visible(&self) -> bool {
        self.visible
    }
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
    fn color(&self) -> Color {
        self.color
    }
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

// ── Beacon ────────────────────────────────────────────────────────────────

/// Pulls movables toward a fixed point with constant magnitude.
struct Beacon {
    location: Vector,
    strength: f32,
}

impl Attractor for Beacon {
    fn attract(&self, target: &dyn Movable) -> Vector {
        match self.location.minus(target.location()) {
            Ok(delta) => {
                let distance = delta.magnitude();
                if distance < 1.0 {
                    return Vector::zeros(2);
                }
                delta.scale(self.strength / distance)
            }
            Err(_) => Vector::zeros(2),
        }
    }
}

// ── Pointer label ─────────────────────────────────────────────────────────

/// Passive overlay tracking the pointer; the driver moves it every frame.
struct PointerLabel {
    location: Vector,
}

impl Informative for PointerLabel {
    fn location(&self) -> &Vector {
        &self.location
    }
    fn set_location(&mut self, location: Vector) {
        self.location = location;
    }
}

// ── driver ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = SceneConfig {
        extent: Extent::new(800.0, 600.0),
        ..SceneConfig::default()
    };
    let extent = config.extent;
    let mut model = SceneModel::new(config);

    let floor = Rc::new(RefCell::new(Floor::new(extent)));
    model.add_entity(
        Registration::new()
            .static_pose(floor.clone())
            .drawable(floor.clone()),
    );

    let ball = Rc::new(RefCell::new(Ball::new(
        extent.width * 0.2,
        extent.height * 0.3,
        extent.height - FLOOR_HEIGHT,
    )?));
    model.add_entity(
        Registration::new()
            .movable(ball.clone())
            .updatable(ball.clone())
            .drawable(ball.clone()),
    );

    let puddle = Rc::new(RefCell::new(Puddle::new(extent)));
    model.add_entity(Registration::new().overlay(puddle.clone()));

    let beacon = Rc::new(RefCell::new(Beacon {
        location: model.origin().clone(),
        strength: 30.0,
    }));
    model.add_entity(Registration::new().attractor(beacon));

    let pointer_label = Rc::new(RefCell::new(PointerLabel {
        location: model.origin().clone(),
    }));
    model.add_entity(Registration::new().informative(pointer_label.clone()));

    // Gravity reaches every movable through the per-tick effect hook.
    model.add_global_effect(Box::new(|_dt, scene| {
        let gravity = Vector::of2(0.0, 250.0);
        for movable in scene.movables() {
            let pull = gravity.scale(movable.handle.borrow().mass());
            movable.handle.borrow_mut().apply_force(&pull)?;
        }
        Ok(())
    }));

    let renderer = SceneRenderer::new();
    let mut canvas = DrawList::new();
    // Fixed 60 Hz cadence for a reproducible headless run.
    let mut clock = FrameClock::with_bounds(1.0 / 60.0, 1.0 / 60.0);

    info!("sandbox scene: {} entities, {FRAMES} frames", model.entities().len());

    for _ in 0..FRAMES {
        let tick = clock.tick();

        // Simulated input collaborator: a circling pointer, and the debug
        // overlay toggled two seconds in.
        let phase = tick.index as f32 / 60.0;
        let pointer = Vector::of2(
            extent.width / 2.0 + phase.cos() * 120.0,
            extent.height / 2.0 + phase.sin() * 120.0,
        );
        model.set_pointer_position(pointer.clone());
        pointer_label.borrow_mut().set_location(pointer);
        if tick.index == 120 {
            model.toggle_debug_overlay();
        }

        model.update(tick.dt)?;

        canvas.reset();
        renderer.render(&mut canvas, &model)?;

        if tick.index % 120 == 0 {
            let ball = ball.borrow();
            info!(
                "frame {:3}: ball at {} vel {} landed={} — {} draw commands",
                tick.index,
                ball.body().location(),
                ball.body().velocity(),
                ball.body().is_landed(),
                canvas.commands().len(),
            );
        }
    }

    info!("sandbox run complete");
    Ok(())
}
