use anyhow::Result;
use tracing::debug;

use crate::{
    parse_number,
    voxel::{Voxel, VoxelSet, COORDINATES},
    Error,
};

pub fn parse_droplet(input: &str) -> Result<VoxelSet, Error> {
    input
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let coords: Vec<&str> = line.split(',').collect();
            let &[x, y, z] = &coords[..] else {
                return Err(Error::malformed_line(line, "three comma-separated coordinates"));
            };
            let voxel = Voxel::new(parse_number(x)?, parse_number(y)?, parse_number(z)?);
            if [voxel.x, voxel.y, voxel.z]
                .iter()
                .any(|c| !COORDINATES.contains(c))
            {
                return Err(Error::malformed_line(line, "coordinates away from the i32 limits"));
            }
            Ok(voxel)
        })
        .collect()
}

pub fn day18(input: &str) -> Result<(usize, usize)> {
    let droplet = parse_droplet(input)?;

    let part1 = droplet.surface_area();
    let voids = droplet.enclosed_voids();
    debug!(cubes = droplet.len(), voids = voids.len(), "droplet scanned");
    let part2 = part1 - voids.surface_area();

    Ok((part1, part2))
}
