use crate::voxel_volume::volume::{BLOCK_WIDTH, VoxelVolume};

impl VoxelVolume {
	/// Convert (x, y, z) to a linear index (x fastest-varying).
	#[inline]
	pub fn coords_to_index(&self, x: usize, y: usize, z: usize) -> usize {
		assert!(x < self.x_dim, "x out of range: {} >= {}", x, self.x_dim);
		assert!(y < self.y_dim, "y out of range: {} >= {}", y, self.y_dim);
		assert!(z < self.z_dim, "z out of range: {} >= {}", z, self.z_dim);
		x + y * self.x_dim + z * self.x_dim * self.y_dim
	}

	/// Convert a linear index back to (x, y, z).
	#[inline]
	pub fn index_to_coords(&self, index: usize) -> (usize, usize, usize) {
		assert!(index < self.size(), "index out of range: {} >= {}", index, self.size());
		let x = index % self.x_dim;
		let y = (index / self.x_dim) % self.y_dim;
		let z = index / (self.x_dim * self.y_dim);
		(x, y, z)
	}

	/// Word holding the voxel at (x, y, z).
	#[inline]
	pub(crate) fn block_index(&self, x: usize, y: usize, z: usize) -> usize {
		x / BLOCK_WIDTH + y * self.num_x_blocks + z * self.num_x_blocks * self.y_dim
	}

	/// Word holding the voxel at a linear index.
	#[inline]
	pub(crate) fn block_index_of(&self, index: usize) -> usize {
		let x = index % self.x_dim;
		let yz = index / self.x_dim;
		x / BLOCK_WIDTH + yz * self.num_x_blocks
	}

	/// Bit position of x within its word; the MSB holds the smallest x.
	#[inline]
	pub(crate) fn bit_pos(x: usize) -> u32 {
		(BLOCK_WIDTH - 1 - x % BLOCK_WIDTH) as u32
	}

	/// Get a voxel by linear index.
	#[inline]
	pub fn get_voxel_index(&self, index: usize) -> bool {
		assert!(index < self.size(), "index out of range: {} >= {}", index, self.size());
		let block = self.blocks[self.block_index_of(index)];
		(block >> Self::bit_pos(index % self.x_dim)) & 1 != 0
	}

	/// Get a voxel by (x, y, z) coordinates.
	#[inline]
	pub fn get_voxel_xyz(&self, x: usize, y: usize, z: usize) -> bool {
		assert!(x < self.x_dim, "x out of range: {} >= {}", x, self.x_dim);
		assert!(y < self.y_dim, "y out of range: {} >= {}", y, self.y_dim);
		assert!(z < self.z_dim, "z out of range: {} >= {}", z, self.z_dim);
		let block = self.blocks[self.block_index(x, y, z)];
		(block >> Self::bit_pos(x)) & 1 != 0
	}

	/// Set a voxel by linear index. Invalidates the cached count and bounds.
	#[inline]
	pub fn set_voxel_index(&mut self, index: usize, value: bool) {
		assert!(index < self.size(), "index out of range: {} >= {}", index, self.size());
		let mask = 1u64 << Self::bit_pos(index % self.x_dim);
		let block = self.block_index_of(index);
		if value {
			self.blocks[block] |= mask;
		} else {
			self.blocks[block] &= !mask;
		}
		self.cached_count = None;
		self.bounds = None;
	}

	/// Set a voxel by (x, y, z) coordinates. Invalidates the cached count
	/// and bounds.
	#[inline]
	pub fn set_voxel_xyz(&mut self, x: usize, y: usize, z: usize, value: bool) {
		assert!(x < self.x_dim, "x out of range: {} >= {}", x, self.x_dim);
		assert!(y < self.y_dim, "y out of range: {} >= {}", y, self.y_dim);
		assert!(z < self.z_dim, "z out of range: {} >= {}", z, self.z_dim);
		let mask = 1u64 << Self::bit_pos(x);
		let block = self.block_index(x, y, z);
		if value {
			self.blocks[block] |= mask;
		} else {
			self.blocks[block] &= !mask;
		}
		self.cached_count = None;
		self.bounds = None;
	}
}
