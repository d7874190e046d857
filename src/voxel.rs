//! Solid voxel sets, their surface area and the air around them.

use std::{collections::VecDeque, ops::RangeInclusive};

use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Voxel {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Coordinates a voxel may take so that the air layer around it and that layer's neighbours
/// still fit in `i32`.
pub const COORDINATES: RangeInclusive<i32> = (i32::MIN + 2)..=(i32::MAX - 2);

const SIDES: [(i32, i32, i32); 6] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
];

impl Voxel {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The six face-sharing neighbours.
    pub fn neighbours(self) -> impl Iterator<Item = Voxel> {
        SIDES
            .into_iter()
            .map(move |(dx, dy, dz)| Voxel::new(self.x + dx, self.y + dy, self.z + dz))
    }
}

/// Inclusive axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: Voxel,
    pub max: Voxel,
}

impl BoundingBox {
    pub fn expanded(&self, margin: i32) -> Self {
        Self {
            min: Voxel::new(self.min.x - margin, self.min.y - margin, self.min.z - margin),
            max: Voxel::new(self.max.x + margin, self.max.y + margin, self.max.z + margin),
        }
    }

    pub fn contains(&self, v: Voxel) -> bool {
        (self.min.x..=self.max.x).contains(&v.x)
            && (self.min.y..=self.max.y).contains(&v.y)
            && (self.min.z..=self.max.z).contains(&v.z)
    }

    pub fn is_on_face(&self, v: Voxel) -> bool {
        self.contains(v)
            && (v.x == self.min.x
                || v.x == self.max.x
                || v.y == self.min.y
                || v.y == self.max.y
                || v.z == self.min.z
                || v.z == self.max.z)
    }

    pub fn cells(&self) -> impl Iterator<Item = Voxel> {
        let Self { min, max } = *self;
        (min.z..=max.z).flat_map(move |z| {
            (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| Voxel::new(x, y, z)))
        })
    }

    /// Cells on the six faces, each listed once.
    pub fn face_cells(&self) -> impl Iterator<Item = Voxel> + '_ {
        self.cells().filter(|&v| self.is_on_face(v))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoxelSet {
    voxels: FxHashSet<Voxel>,
}

impl FromIterator<Voxel> for VoxelSet {
    fn from_iter<T: IntoIterator<Item = Voxel>>(iter: T) -> Self {
        Self {
            voxels: iter.into_iter().collect(),
        }
    }
}

impl VoxelSet {
    pub fn insert(&mut self, voxel: Voxel) -> bool {
        self.voxels.insert(voxel)
    }

    pub fn contains(&self, voxel: Voxel) -> bool {
        self.voxels.contains(&voxel)
    }

    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Voxel> + '_ {
        self.voxels.iter().copied()
    }

    /// Number of voxel faces not shared with another voxel of the set.
    pub fn surface_area(&self) -> usize {
        self.iter()
            .flat_map(Voxel::neighbours)
            .filter(|&neighbour| !self.contains(neighbour))
            .count()
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        let mut voxels = self.iter();
        let first = voxels.next()?;
        Some(voxels.fold(
            BoundingBox {
                min: first,
                max: first,
            },
            |BoundingBox { min, max }, v| BoundingBox {
                min: Voxel::new(min.x.min(v.x), min.y.min(v.y), min.z.min(v.z)),
                max: Voxel::new(max.x.max(v.x), max.y.max(v.y), max.z.max(v.z)),
            },
        ))
    }

    /// Air connected to the outside: flood fill through face-adjacent air cells of the bounding
    /// box grown by one, seeded from every air cell on its faces.
    pub fn exterior_air(&self) -> VoxelSet {
        let Some(space) = self.bounds().map(|bounds| bounds.expanded(1)) else {
            return VoxelSet::default();
        };

        let mut visited = FxHashSet::default();
        let mut frontier = VecDeque::new();
        for cell in space.face_cells().filter(|&cell| !self.contains(cell)) {
            visited.insert(cell);
            frontier.push_back(cell);
        }

        while let Some(cell) = frontier.pop_front() {
            for neighbour in cell.neighbours() {
                if space.contains(neighbour)
                    && !self.contains(neighbour)
                    && visited.insert(neighbour)
                {
                    frontier.push_back(neighbour);
                }
            }
        }

        VoxelSet { voxels: visited }
    }

    /// Air cells inside the bounding box that the outside cannot reach.
    pub fn enclosed_voids(&self) -> VoxelSet {
        let Some(bounds) = self.bounds() else {
            return VoxelSet::default();
        };
        let exterior = self.exterior_air();
        bounds
            .cells()
            .filter(|&cell| !self.contains(cell) && !exterior.contains(cell))
            .collect()
    }

    /// Surface area without the faces that only border enclosed voids.
    pub fn exterior_surface_area(&self) -> usize {
        self.surface_area() - self.enclosed_voids().surface_area()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 3x3x3 cube with its centre removed.
    fn hollow_cube() -> VoxelSet {
        BoundingBox {
            min: Voxel::new(0, 0, 0),
            max: Voxel::new(2, 2, 2),
        }
        .cells()
        .filter(|&v| v != Voxel::new(1, 1, 1))
        .collect()
    }

    #[test]
    fn two_adjacent_cubes() {
        let set: VoxelSet = [Voxel::new(1, 1, 1), Voxel::new(2, 1, 1)].into_iter().collect();
        assert_eq!(set.surface_area(), 10);
        assert_eq!(set.exterior_surface_area(), 10);
    }

    #[test]
    fn enclosed_void_is_never_exterior() {
        let cube = hollow_cube();
        let exterior = cube.exterior_air();
        assert!(!exterior.contains(Voxel::new(1, 1, 1)));
        assert!(exterior.contains(Voxel::new(-1, -1, -1)));
        assert!(exterior.iter().all(|v| !cube.contains(v)));
        // 5x5x5 box minus the 3x3x3 cube.
        assert_eq!(exterior.len(), 125 - 27);

        let voids = cube.enclosed_voids();
        assert_eq!(voids.iter().collect::<Vec<_>>(), [Voxel::new(1, 1, 1)]);
        assert_eq!(cube.surface_area(), 54 + 6);
        assert_eq!(cube.exterior_surface_area(), 54);
    }

    #[test]
    fn bounds_and_faces() {
        let bounds = BoundingBox {
            min: Voxel::new(0, 0, 0),
            max: Voxel::new(2, 2, 2),
        };
        assert_eq!(bounds.cells().count(), 27);
        assert_eq!(bounds.face_cells().count(), 26);
        assert_eq!(bounds.expanded(1).min, Voxel::new(-1, -1, -1));
        assert_eq!(hollow_cube().bounds(), Some(bounds));
    }

    #[test]
    fn empty_set_has_no_air() {
        let empty = VoxelSet::default();
        assert!(empty.is_empty());
        assert_eq!(empty.bounds(), None);
        assert!(empty.exterior_air().is_empty());
        assert_eq!(empty.exterior_surface_area(), 0);
    }
}
