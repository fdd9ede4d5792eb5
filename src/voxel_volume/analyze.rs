use crate::voxel_volume::volume::{BLOCK_WIDTH, VoxelVolume, VolumeBounds};

impl VoxelVolume {
	/// Number of set voxels. Served from the cache when valid, otherwise
	/// one popcount pass over the word buffer, cached afterwards.
	pub fn count(&mut self) -> usize {
		if let Some(count) = self.cached_count {
			return count;
		}
		let count = self.recount();
		self.cached_count = Some(count);
		count
	}

	/// Popcount pass without touching the cache.
	pub(crate) fn recount(&self) -> usize {
		self.blocks.iter().map(|b| b.count_ones() as usize).sum()
	}

	/// One pass that recomputes the exact count and the tight bounding box
	/// of all set voxels. Returns the count.
	///
	/// On an empty volume no box exists; `bounds()` reports `None` rather
	/// than the inverted numeric range of the historical design.
	pub fn compute_bounds_and_count(&mut self) -> usize {
		let mut min_x = self.x_dim - 1;
		let mut max_x = 0;
		let mut min_y = self.y_dim - 1;
		let mut max_y = 0;
		let mut min_z = self.z_dim - 1;
		let mut max_z = 0;

		let left_bit = 1u64 << (BLOCK_WIDTH - 1);
		let mut count = 0;
		let mut i = 0;
		for z in 0..self.z_dim {
			for y in 0..self.y_dim {
				for x_block in 0..self.num_x_blocks {
					let mut data = self.blocks[i];
					i += 1;
					if data == 0 {
						continue;
					}
					// scan from the MSB (lowest x in this word's span)
					let mut bit = 0;
					while data != 0 {
						if data & left_bit != 0 {
							// padding bits are zero, so x is always in range
							let x = x_block * BLOCK_WIDTH + bit;
							min_x = min_x.min(x);
							max_x = max_x.max(x);
							min_y = min_y.min(y);
							max_y = max_y.max(y);
							min_z = min_z.min(z);
							max_z = max_z.max(z);
							count += 1;
						}
						data <<= 1;
						bit += 1;
					}
				}
			}
		}

		self.cached_count = Some(count);
		self.bounds = if count > 0 {
			Some(VolumeBounds { min_x, max_x, min_y, max_y, min_z, max_z })
		} else {
			None
		};
		count
	}

	/// Bounding box from the last scan, or `None` when no scan has run
	/// since the last mutation or the volume was empty at scan time.
	#[inline]
	pub fn bounds(&self) -> Option<VolumeBounds> {
		self.bounds
	}

	fn require_bounds(&self) -> &VolumeBounds {
		match &self.bounds {
			Some(bounds) => bounds,
			None => panic!("bounding box unavailable: run compute_bounds_and_count on a non-empty volume"),
		}
	}

	pub fn min_x(&self) -> usize {
		self.require_bounds().min_x
	}

	pub fn max_x(&self) -> usize {
		self.require_bounds().max_x
	}

	pub fn min_y(&self) -> usize {
		self.require_bounds().min_y
	}

	pub fn max_y(&self) -> usize {
		self.require_bounds().max_y
	}

	pub fn min_z(&self) -> usize {
		self.require_bounds().min_z
	}

	pub fn max_z(&self) -> usize {
		self.require_bounds().max_z
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn two_voxel_bounds() {
		let mut v = VoxelVolume::new(10, 10, 10);
		v.set_voxel_xyz(2, 3, 4, true);
		v.set_voxel_xyz(7, 1, 9, true);
		assert_eq!(v.compute_bounds_and_count(), 2);
		assert_eq!(v.min_x(), 2);
		assert_eq!(v.max_x(), 7);
		assert_eq!(v.min_y(), 1);
		assert_eq!(v.max_y(), 3);
		assert_eq!(v.min_z(), 4);
		assert_eq!(v.max_z(), 9);
	}

	#[test]
	fn bounds_past_word_boundary() {
		let mut v = VoxelVolume::new(70, 2, 2);
		v.set_voxel_xyz(69, 0, 0, true);
		v.set_voxel_xyz(5, 1, 1, true);
		assert_eq!(v.compute_bounds_and_count(), 2);
		assert_eq!(v.min_x(), 5);
		assert_eq!(v.max_x(), 69);
	}

	#[test]
	fn empty_volume_has_no_bounds() {
		let mut v = VoxelVolume::new(6, 6, 6);
		assert_eq!(v.compute_bounds_and_count(), 0);
		assert!(v.bounds().is_none());
	}

	#[test]
	#[should_panic(expected = "bounding box unavailable")]
	fn bound_accessor_panics_without_scan() {
		let v = VoxelVolume::new(6, 6, 6);
		v.min_x();
	}

	#[test]
	fn mutation_invalidates_bounds() {
		let mut v = VoxelVolume::new(6, 6, 6);
		v.set_voxel_xyz(2, 2, 2, true);
		v.compute_bounds_and_count();
		assert!(v.bounds().is_some());
		v.set_voxel_xyz(5, 5, 5, true);
		assert!(v.bounds().is_none());
	}

	#[test]
	fn count_is_cached_until_mutation() {
		let mut v = VoxelVolume::new(12, 12, 12);
		v.set_voxel_xyz(1, 1, 1, true);
		assert!(v.cached_count.is_none());
		assert_eq!(v.count(), 1);
		assert_eq!(v.cached_count, Some(1));
		v.set_voxel_xyz(2, 1, 1, true);
		assert!(v.cached_count.is_none());
		assert_eq!(v.count(), 2);
	}

	#[test]
	fn count_never_exceeds_size_with_padding() {
		let mut v = VoxelVolume::new(70, 2, 2);
		for i in 0..v.size() {
			v.set_voxel_index(i, true);
		}
		v.invert();
		v.invert();
		assert_eq!(v.count(), v.size());
	}
}
