use bitvec::vec::BitVec;

use crate::voxel_volume::volume::VoxelVolume;

/// Minimal surface shared by the canonical volume and the alternate
/// storage layouts kept around for throughput comparison. Just enough to
/// time the backends head-to-head.
pub trait OccupancyStore: Sized {
	fn with_dims(x_dim: usize, y_dim: usize, z_dim: usize) -> Self;
	fn set(&mut self, x: usize, y: usize, z: usize, value: bool);
	fn count(&self) -> usize;
	fn is_equal(&self, other: &Self) -> bool;
	fn subtract(&mut self, other: &Self);
	fn dilate(&self) -> Self;
}

impl OccupancyStore for VoxelVolume {
	fn with_dims(x_dim: usize, y_dim: usize, z_dim: usize) -> Self {
		VoxelVolume::new(x_dim, y_dim, z_dim)
	}

	fn set(&mut self, x: usize, y: usize, z: usize, value: bool) {
		self.set_voxel_xyz(x, y, z, value);
	}

	fn count(&self) -> usize {
		self.cached_count.unwrap_or_else(|| self.recount())
	}

	fn is_equal(&self, other: &Self) -> bool {
		VoxelVolume::is_equal(self, other)
	}

	fn subtract(&mut self, other: &Self) {
		VoxelVolume::subtract(self, other);
	}

	fn dilate(&self) -> Self {
		let mut dest = VoxelVolume::new(self.x_dim, self.y_dim, self.z_dim);
		VoxelVolume::dilate(self, &mut dest);
		dest
	}
}

/// Scalar 6-neighbor dilation over a linear-indexed grid; shared by the
/// naive backends.
fn dilate_scalar(
	x_dim: usize,
	y_dim: usize,
	z_dim: usize,
	get: impl Fn(usize) -> bool,
	mut set: impl FnMut(usize),
) {
	let y_stride = x_dim;
	let z_stride = x_dim * y_dim;
	let mut index = 0;
	for z in 0..z_dim {
		for y in 0..y_dim {
			for x in 0..x_dim {
				let filled = get(index)
					|| (x > 0 && get(index - 1))
					|| (x + 1 < x_dim && get(index + 1))
					|| (y > 0 && get(index - y_stride))
					|| (y + 1 < y_dim && get(index + y_stride))
					|| (z > 0 && get(index - z_stride))
					|| (z + 1 < z_dim && get(index + z_stride));
				if filled {
					set(index);
				}
				index += 1;
			}
		}
	}
}

/// Byte-per-voxel layout. Eight times the memory of the packed design;
/// exists only as a timing baseline.
pub struct ByteStore {
	x_dim: usize,
	y_dim: usize,
	z_dim: usize,
	cells: Vec<u8>,
}

impl OccupancyStore for ByteStore {
	fn with_dims(x_dim: usize, y_dim: usize, z_dim: usize) -> Self {
		Self {
			x_dim,
			y_dim,
			z_dim,
			cells: vec![0; x_dim * y_dim * z_dim],
		}
	}

	fn set(&mut self, x: usize, y: usize, z: usize, value: bool) {
		let index = x + y * self.x_dim + z * self.x_dim * self.y_dim;
		self.cells[index] = value as u8;
	}

	fn count(&self) -> usize {
		self.cells.iter().filter(|&&c| c != 0).count()
	}

	fn is_equal(&self, other: &Self) -> bool {
		self.cells == other.cells
	}

	fn subtract(&mut self, other: &Self) {
		for (v0, &v1) in self.cells.iter_mut().zip(other.cells.iter()) {
			if v1 != 0 {
				*v0 = 0;
			}
		}
	}

	fn dilate(&self) -> Self {
		let mut dest = Self::with_dims(self.x_dim, self.y_dim, self.z_dim);
		dilate_scalar(
			self.x_dim,
			self.y_dim,
			self.z_dim,
			|i| self.cells[i] != 0,
			|i| dest.cells[i] = 1,
		);
		dest
	}
}

/// `bitvec`-backed layout: packed like the canonical design but with
/// bit-at-a-time access instead of whole-word operations.
pub struct BitsetStore {
	x_dim: usize,
	y_dim: usize,
	z_dim: usize,
	bits: BitVec,
}

impl OccupancyStore for BitsetStore {
	fn with_dims(x_dim: usize, y_dim: usize, z_dim: usize) -> Self {
		Self {
			x_dim,
			y_dim,
			z_dim,
			bits: BitVec::repeat(false, x_dim * y_dim * z_dim),
		}
	}

	fn set(&mut self, x: usize, y: usize, z: usize, value: bool) {
		let index = x + y * self.x_dim + z * self.x_dim * self.y_dim;
		self.bits.set(index, value);
	}

	fn count(&self) -> usize {
		self.bits.count_ones()
	}

	fn is_equal(&self, other: &Self) -> bool {
		self.bits == other.bits
	}

	fn subtract(&mut self, other: &Self) {
		for (mut v0, v1) in self.bits.iter_mut().zip(other.bits.iter()) {
			*v0 = *v0 && !*v1;
		}
	}

	fn dilate(&self) -> Self {
		let mut dest = Self::with_dims(self.x_dim, self.y_dim, self.z_dim);
		dilate_scalar(
			self.x_dim,
			self.y_dim,
			self.z_dim,
			|i| self.bits[i],
			|i| dest.bits.set(i, true),
		);
		dest
	}
}
