//! Benchmark profiles for the autodrive step engine.
//!
//! Provides pre-built [`Field`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 grid with 200 cars and 64-command scripts
//! - [`stress_profile`]: 316x316 grid with 2000 cars and 256-command scripts
//! - [`init_car_placements`]: deterministic car placement via seed
//! - [`scripted_commands`]: deterministic command scripts via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::error::Error;

use autodrive_core::{AgentName, Command, Orientation, Position, Script};
use autodrive_engine::{Car, Field, FieldConfig};

const MUL: u64 = 6364136223846793005;
const INC: u64 = 1442695040888963407;

fn mix(seed: u64, i: u64) -> u64 {
    seed.wrapping_mul(MUL).wrapping_add(i.wrapping_mul(INC))
}

/// Build a reference benchmark profile: 100x100 grid, 200 cars.
pub fn reference_profile(seed: u64) -> Result<Field, Box<dyn Error>> {
    build_profile(FieldConfig::new(100, 100), 200, 64, seed)
}

/// Build a stress benchmark profile: 316x316 grid (~100K cells), 2000 cars.
///
/// Scripts are four times longer than in [`reference_profile`].
pub fn stress_profile(seed: u64) -> Result<Field, Box<dyn Error>> {
    build_profile(FieldConfig::new(316, 316), 2000, 256, seed)
}

/// Build a field of `cars` cars, each with a `script_len`-command script.
pub fn build_profile(
    config: FieldConfig,
    cars: u16,
    script_len: usize,
    seed: u64,
) -> Result<Field, Box<dyn Error>> {
    let bounds = config.validate()?;
    let mut field = Field::new(config)?;
    let cell_count = bounds.width() as usize * bounds.height() as usize;

    for (id, flat) in init_car_placements(cell_count, cars, seed) {
        let x = (flat % bounds.width() as usize) as i32;
        let y = (flat / bounds.width() as usize) as i32;
        let heading = Orientation::ALL[(mix(seed, u64::from(id)) >> 35) as usize % 4];
        let car = Car::new(
            AgentName::new(format!("car{id:05}"))?,
            Position::new(x, y),
            heading,
            scripted_commands(seed ^ u64::from(id), script_len),
        );
        field.add_car(car)?;
    }
    Ok(field)
}

/// Generate deterministic initial car placements.
///
/// Places `n` cars on distinct cells of a grid with `cell_count` cells
/// using a simple hash of the seed. Returns `(car_id, flat_index)` pairs
/// where `flat_index = y * width + x`.
pub fn init_car_placements(cell_count: usize, n: u16, seed: u64) -> Vec<(u16, usize)> {
    let n = n.min(u16::try_from(cell_count).unwrap_or(u16::MAX));
    let mut placements = Vec::with_capacity(n as usize);
    let mut occupied = std::collections::HashSet::new();

    for i in 0..n {
        let mut pos = (mix(seed, u64::from(i)) % cell_count as u64) as usize;
        // Linear probe past taken cells.
        while occupied.contains(&pos) {
            pos = (pos + 1) % cell_count;
        }
        occupied.insert(pos);
        placements.push((i, pos));
    }

    placements
}

/// Generate a deterministic script of `len` commands, roughly half forward moves.
pub fn scripted_commands(seed: u64, len: usize) -> Script {
    (0..len as u64)
        .map(|i| match (mix(seed, i) >> 33) % 4 {
            0 => Command::TurnLeft,
            1 => Command::TurnRight,
            _ => Command::Forward,
        })
        .collect()
}
