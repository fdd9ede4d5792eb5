use crate::voxel_volume::volume::VoxelVolume;

impl VoxelVolume {
	/// Block-wise equality with early exit on the first mismatch.
	///
	/// Padding bits are always zero on both sides, so word comparison is
	/// exact voxel comparison.
	pub fn is_equal(&self, other: &VoxelVolume) -> bool {
		self.check_compatible(other);
		self.blocks.iter().zip(other.blocks.iter()).all(|(a, b)| a == b)
	}

	/// Remove `other`'s voxels from this volume (`self &= !other`).
	pub fn subtract(&mut self, other: &VoxelVolume) {
		self.check_compatible(other);
		for (v0, &v1) in self.blocks.iter_mut().zip(other.blocks.iter()) {
			if *v0 != 0 && v1 != 0 {
				*v0 &= !v1;
			}
		}
		self.cached_count = None;
		self.bounds = None;
	}

	/// Add `other`'s voxels to this volume (`self |= other`).
	pub fn merge(&mut self, other: &VoxelVolume) {
		self.check_compatible(other);
		for (v0, &v1) in self.blocks.iter_mut().zip(other.blocks.iter()) {
			if v1 != 0 {
				*v0 |= v1;
			}
		}
		self.cached_count = None;
		self.bounds = None;
	}

	/// Keep only voxels set in both volumes (`self &= other`).
	pub fn intersect(&mut self, other: &VoxelVolume) {
		self.check_compatible(other);
		for (v0, &v1) in self.blocks.iter_mut().zip(other.blocks.iter()) {
			if *v0 != 0 || v1 != 0 {
				*v0 &= v1;
			}
		}
		self.cached_count = None;
		self.bounds = None;
	}

	/// Flip every voxel.
	///
	/// Complementing whole words turns padding zeros into ones, so the
	/// padding is re-cleared afterwards. A valid cached count stays valid
	/// as `size - old`.
	pub fn invert(&mut self) {
		for v0 in self.blocks.iter_mut() {
			*v0 = !*v0;
		}
		self.clear_padding_bits();
		self.cached_count = self.cached_count.map(|c| self.x_dim * self.y_dim * self.z_dim - c);
		self.bounds = None;
	}
}
