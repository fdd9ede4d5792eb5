/// Bounds of the set voxels, produced by a bounds scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeBounds {
	pub min_x: usize,
	pub max_x: usize,
	pub min_y: usize,
	pub max_y: usize,
	pub min_z: usize,
	pub max_z: usize,
}

/// 3D voxel volume with 64-voxel-per-word bit-packed storage.
///
/// Words pack along x; the most-significant bit of a word holds the
/// smallest x of its 64-wide span. Padding bits past `x_dim - 1` in the
/// last word of each scanline are kept zero at all times.
#[derive(Clone)]
pub struct VoxelVolume {
	pub(crate) x_dim: usize,
	pub(crate) y_dim: usize,
	pub(crate) z_dim: usize,
	pub(crate) num_x_blocks: usize, // words per scanline
	pub(crate) blocks: Vec<u64>,
	pub(crate) cached_count: Option<usize>,
	pub(crate) bounds: Option<VolumeBounds>,
}

/// Bits per storage word.
pub const BLOCK_WIDTH: usize = u64::BITS as usize;

impl VoxelVolume {
	/// Create a voxel volume of the given dimensions with all voxels clear.
	///
	/// Panics if any dimension is zero.
	pub fn new(x_dim: usize, y_dim: usize, z_dim: usize) -> Self {
		assert!(x_dim > 0, "x_dim must be positive");
		assert!(y_dim > 0, "y_dim must be positive");
		assert!(z_dim > 0, "z_dim must be positive");

		let num_x_blocks = x_dim.div_ceil(BLOCK_WIDTH);
		Self {
			x_dim,
			y_dim,
			z_dim,
			num_x_blocks,
			blocks: vec![0; num_x_blocks * y_dim * z_dim],
			cached_count: Some(0),
			bounds: None,
		}
	}

	#[inline]
	pub fn x_dim(&self) -> usize {
		self.x_dim
	}

	#[inline]
	pub fn y_dim(&self) -> usize {
		self.y_dim
	}

	#[inline]
	pub fn z_dim(&self) -> usize {
		self.z_dim
	}

	/// Logical voxel capacity (`x_dim * y_dim * z_dim`).
	#[inline]
	pub fn size(&self) -> usize {
		self.x_dim * self.y_dim * self.z_dim
	}

	/// Bytes held by the packed word buffer.
	#[inline]
	pub fn storage_bytes(&self) -> usize {
		self.blocks.len() * (BLOCK_WIDTH / 8)
	}

	/// Set every voxel to `false`.
	pub fn clear(&mut self) {
		self.blocks.fill(0);
		self.cached_count = Some(0);
		self.bounds = None;
	}

	/// Panic unless `other` has identical dimensions.
	///
	/// Binary operations are only defined between volumes of equal size;
	/// a mismatch is a programmer error, not a recoverable condition.
	pub(crate) fn check_compatible(&self, other: &VoxelVolume) {
		assert!(
			self.x_dim == other.x_dim && self.y_dim == other.y_dim && self.z_dim == other.z_dim,
			"incompatible volume dimensions: {}x{}x{} vs {}x{}x{}",
			self.x_dim,
			self.y_dim,
			self.z_dim,
			other.x_dim,
			other.y_dim,
			other.z_dim
		);
	}

	/// Number of unused high-x bits in the last word of each scanline.
	#[inline]
	pub(crate) fn padding_size(&self) -> usize {
		(BLOCK_WIDTH - self.x_dim % BLOCK_WIDTH) % BLOCK_WIDTH
	}

	/// Zero the padding bits of every scanline.
	///
	/// Needed after whole-word operations that can set bits past
	/// `x_dim - 1` (invert, dilation).
	pub(crate) fn clear_padding_bits(&mut self) {
		let padding = self.padding_size();
		if padding == 0 {
			return;
		}
		// valid bits occupy positions >= padding (smallest x in the MSB)
		let mask = (!0u64 >> padding) << padding;
		let mut i = self.num_x_blocks - 1;
		while i < self.blocks.len() {
			if self.blocks[i] != 0 {
				self.blocks[i] &= mask;
			}
			i += self.num_x_blocks;
		}
	}
}
