//! Lockstep - deterministic fixed-point physics demo
//!
//! Headless driver for the physics stepper: builds a drop-test scene from
//! configuration, advances it for a fixed number of steps, and logs a
//! digest of the world state. Running it twice, on any platform, prints the
//! same digest.

use lockstep::config::SimConfig;
use lockstep_math::{Scalar, Vec3};
use lockstep_physics::{ActorType, Collider, LayerMask, PhysicsConfig, PhysicsWorld};

fn main() {
    env_logger::init();

    let config = SimConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        SimConfig::default()
    });

    let mut world = build_world(&config);
    log::info!(
        "scene ready: {} actors, {} steps of {}s ({} substep(s))",
        world.actor_count(),
        config.simulation.steps,
        config.simulation.delta,
        config.simulation.substeps,
    );

    let delta = Scalar::from_num(config.simulation.delta);
    for step_index in 0..config.simulation.steps {
        world.step(delta);
        if (step_index + 1) % 60 == 0 {
            log::info!(
                "step {:>5}: {} contact(s), digest={:016x}",
                step_index + 1,
                world.collisions().count(),
                state_digest(&world),
            );
        }
    }

    log::info!(
        "finished {} steps, final digest={:016x}",
        config.simulation.steps,
        state_digest(&world),
    );
}

/// Build the drop-test scene: a static floor and a row of falling spheres
fn build_world(config: &SimConfig) -> PhysicsWorld {
    let mut world = PhysicsWorld::with_config(PhysicsConfig::new(config.simulation.substeps));
    let layer = LayerMask::from_bit(0);

    let floor = world.create_actor(ActorType::Static, layer, layer, true);
    let [hx, hy, hz] = config.scene.floor_half_extents;
    world
        .get_actor_mut(floor)
        .expect("actor just created")
        .add_collider(Collider::aabb(
            Vec3::ZERO,
            Vec3::new(Scalar::from_num(hx), Scalar::from_num(hy), Scalar::from_num(hz)),
        ));

    let radius = Scalar::from_num(config.scene.sphere_radius);
    let spacing = Scalar::from_num(config.scene.sphere_spacing);
    let half_row = Scalar::from_num(config.scene.sphere_count) * spacing * Scalar::from_num(0.5);
    for index in 0..config.scene.sphere_count {
        let key = world.create_actor(ActorType::Dynamic, layer, layer, true);
        let actor = world.get_actor_mut(key).expect("actor just created");
        actor.transform.position = Vec3::new(
            Scalar::from_num(index) * spacing - half_row,
            Scalar::from_num(config.scene.spawn_height),
            Scalar::from_num(0),
        );
        actor.transform.old_position = actor.transform.position;
        actor.transform.acceleration = Vec3::new(
            Scalar::from_num(0),
            Scalar::from_num(config.scene.gravity),
            Scalar::from_num(0),
        );
        actor.add_collider(Collider::sphere(Vec3::ZERO, radius));
    }

    world
}

/// Order-stable digest of every actor position, for eyeballing determinism
/// across runs and machines
fn state_digest(world: &PhysicsWorld) -> u64 {
    let mut digest: u64 = 0;
    for (_key, actor) in world.actors() {
        let position = actor.transform.position;
        for bits in [position.x.to_bits(), position.y.to_bits(), position.z.to_bits()] {
            digest = digest.rotate_left(7) ^ bits as u64;
        }
    }
    digest
}
