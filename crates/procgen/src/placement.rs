//! Cluster placement: grows the system list one probed candidate at a time.
//!
//! Each new system first takes its share of the star budget, which fixes how
//! far it must stay from every system already placed. Probe points are then
//! drawn until `probes` of them satisfy the ring and separation limits, and
//! the one furthest from its nearest neighbour wins.
//!
//! Generation is a pure function of the config and the random stream: the
//! same seed always yields the same cluster.

use crate::cluster::Cluster;
use crate::config::{ClusterConfig, LeftoverStars};
use crate::error::GenerationError;
use crate::sampling::sample_probe;
use crate::star_system::SystemId;
use engine_core::{Coords, Prng, PrngKind};
use rand::Rng;

/// Extra-star thresholds, in order: a system gets its 2nd star only while
/// fewer than 28 systems exist, its 3rd while fewer than 12, its 4th while
/// fewer than 6, its 5th while fewer than 3. The earliest systems therefore
/// hold the most stars.
pub const STAR_CAP_SCHEDULE: [usize; 4] = [28, 12, 6, 3];

/// Most stars any single system receives during placement.
pub const MAX_STARS_PER_SYSTEM: usize = STAR_CAP_SCHEDULE.len() + 1;

/// Stars handed to the next system when `placed` systems already exist and
/// `stars_left` remain in the budget.
pub fn stars_for_next_system(placed: usize, stars_left: usize) -> usize {
    if stars_left == 0 {
        return 0;
    }
    let mut stars = 1;
    for &threshold in &STAR_CAP_SCHEDULE {
        if stars >= stars_left || placed >= threshold {
            break;
        }
        stars += 1;
    }
    stars
}

/// Generate a cluster using a caller-owned random stream.
pub fn generate<R: Rng + ?Sized>(
    config: &ClusterConfig,
    rng: &mut R,
) -> Result<Cluster, GenerationError> {
    config.validate()?;

    log::info!(
        "generating cluster: {} systems, {} stars, scale {:.1}",
        config.systems,
        config.stars,
        config.scale
    );

    let mut cluster = Cluster::with_origin();
    let mut stars_left = config.stars;

    while cluster.len() < config.systems {
        let stars = stars_for_next_system(cluster.len(), stars_left);
        stars_left -= stars;
        let clearance = config.clearance(stars);

        let coords = probe_location(config, &cluster, clearance, rng)?;
        let id = cluster.push_system(coords, stars, clearance);

        if let Some(sys) = cluster.system(id) {
            log::debug!(
                "[ring] {:2}: {} stars {} left {}",
                sys.ring(),
                sys.coords().xyz(),
                stars,
                stars_left
            );
        }
    }

    if stars_left > 0 {
        match config.leftover_stars {
            LeftoverStars::Discard => {
                log::info!("{} stars left undistributed", stars_left);
            }
            LeftoverStars::Scatter => scatter_stars(&mut cluster, stars_left, rng),
        }
    }

    log::info!(
        "generated cluster: {} systems, {} stars",
        cluster.len(),
        cluster.total_stars()
    );
    Ok(cluster)
}

/// Generate a cluster from a seed with the chosen generator algorithm.
pub fn generate_seeded(
    config: &ClusterConfig,
    kind: PrngKind,
    seed: u64,
) -> Result<Cluster, GenerationError> {
    let mut rng = Prng::new(kind, seed);
    generate(config, &mut rng)
}

/// Find a lattice point for a new system needing `clearance` of separation.
///
/// Probes are judged at their rounded position, which is where the system
/// will actually sit.
fn probe_location<R: Rng + ?Sized>(
    config: &ClusterConfig,
    cluster: &Cluster,
    clearance: f64,
    rng: &mut R,
) -> Result<Coords, GenerationError> {
    let mut best = Coords::ORIGIN;
    let mut best_distance = f64::NEG_INFINITY;
    let mut accepted = 0;
    let mut rejections = 0;

    while accepted < config.probes {
        let pt = sample_probe(rng, config.probe_shape, config.scale).round_to_int();
        let ring = pt.length().round() as i64;
        let distance = cluster.min_distance(pt);

        if ring < config.min_ring || distance < clearance {
            rejections += 1;
            if rejections > config.max_rejections {
                log::warn!(
                    "no room for system {} (clearance {:.1}) after {} probes",
                    cluster.len(),
                    clearance,
                    rejections
                );
                return Err(GenerationError::UnsatisfiableConstraints {
                    placed: cluster.len(),
                    target: config.systems,
                    rejections,
                });
            }
            continue;
        }

        if distance > best_distance {
            best = pt;
            best_distance = distance;
        }
        accepted += 1;
    }

    Ok(best)
}

/// Hand out remaining stars to random systems, never the origin.
fn scatter_stars<R: Rng + ?Sized>(cluster: &mut Cluster, count: usize, rng: &mut R) {
    let len = cluster.len();
    if len < 2 {
        log::info!("{} stars left undistributed, no system to hold them", count);
        return;
    }
    for _ in 0..count {
        let id = SystemId(rng.gen_range(1..len));
        if let Some(sys) = cluster.system_mut(id) {
            sys.add_star();
        }
    }
    log::info!("scattered {} leftover stars", count);
}
