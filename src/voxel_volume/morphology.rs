use crate::voxel_volume::volume::{BLOCK_WIDTH, VoxelVolume};

/// How dilation/erosion treat the y/z exterior of the grid.
///
/// The x exterior is always empty: the one-bit shifts bring zeros in at
/// the ends of every scanline regardless of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
	/// The exterior is implicitly empty on every axis. Erosion clears any
	/// foreground voxel touching a grid face. Physically consistent, and
	/// the default.
	#[default]
	Clamped,
	/// A missing y/z neighbor contributes nothing, so erosion never
	/// clears a voxel purely for sitting on a y/z face.
	Unbounded,
}

/// Word combiner for the shared morphology pass: OR grows the foreground,
/// AND shrinks it.
#[derive(Clone, Copy)]
enum MorphOp {
	Grow,
	Shrink,
}

impl MorphOp {
	#[inline]
	fn combine(self, a: u64, b: u64) -> u64 {
		match self {
			MorphOp::Grow => a | b,
			MorphOp::Shrink => a & b,
		}
	}

	/// Fold a y/z neighbor word into the accumulator; `None` means the
	/// neighbor row/plane is outside the grid.
	#[inline]
	fn combine_neighbor(self, acc: u64, neighbor: Option<u64>, policy: EdgePolicy) -> u64 {
		match neighbor {
			Some(block) => self.combine(acc, block),
			None => match (self, policy) {
				(MorphOp::Grow, _) => acc,
				(MorphOp::Shrink, EdgePolicy::Clamped) => 0,
				(MorphOp::Shrink, EdgePolicy::Unbounded) => acc,
			},
		}
	}
}

impl VoxelVolume {
	/// 6-connected dilation into `dest`, which must have equal dimensions.
	///
	/// Every voxel face-adjacent to a set voxel becomes set; growth stops
	/// at the grid faces. `dest` is overwritten. The `&self`/`&mut Self`
	/// borrows rule out passing the source as its own destination.
	pub fn dilate(&self, dest: &mut VoxelVolume) {
		// OR's identity is the empty word, so the edge policy cannot
		// change the result of dilation.
		self.morph_pass(dest, MorphOp::Grow, EdgePolicy::Clamped);
	}

	/// 6-connected erosion into `dest` under the default clamped policy.
	pub fn erode(&self, dest: &mut VoxelVolume) {
		self.morph_pass(dest, MorphOp::Shrink, EdgePolicy::Clamped);
	}

	/// 6-connected erosion into `dest` with an explicit edge policy.
	pub fn erode_with_policy(&self, dest: &mut VoxelVolume, policy: EdgePolicy) {
		self.morph_pass(dest, MorphOp::Shrink, policy);
	}

	/// One pass over all words, combining each source word with its up to
	/// six neighbor contributions.
	fn morph_pass(&self, dest: &mut VoxelVolume, op: MorphOp, policy: EdgePolicy) {
		self.check_compatible(dest);
		dest.clear();

		if self.cached_count == Some(0) {
			return;
		}

		let y_off = self.num_x_blocks;
		let z_off = self.num_x_blocks * self.y_dim;
		let carry = (BLOCK_WIDTH - 1) as u32;

		let mut i = 0;
		for z in 0..self.z_dim {
			for y in 0..self.y_dim {
				for xb in 0..self.num_x_blocks {
					let src_block = self.blocks[i];
					dest.blocks[i] = match op {
						// a full word cannot grow further
						MorphOp::Grow if src_block == u64::MAX => src_block,
						// an empty word cannot shrink further
						MorphOp::Shrink if src_block == 0 => 0,
						_ => {
							// +x neighbor: shifting left moves the bit of
							// x+1 into x's position; the bit lost at the
							// word seam is the next word's MSB
							let mut from_next_x = src_block << 1;
							if xb + 1 < self.num_x_blocks {
								from_next_x |= self.blocks[i + 1] >> carry;
							}
							// -x neighbor, seam bit from the prior word's LSB
							let mut from_prev_x = src_block >> 1;
							if xb > 0 {
								from_prev_x |= self.blocks[i - 1] << carry;
							}

							let mut out = op.combine(src_block, from_next_x);
							out = op.combine(out, from_prev_x);

							out = op.combine_neighbor(
								out,
								(y > 0).then(|| self.blocks[i - y_off]),
								policy,
							);
							out = op.combine_neighbor(
								out,
								(y + 1 < self.y_dim).then(|| self.blocks[i + y_off]),
								policy,
							);
							out = op.combine_neighbor(
								out,
								(z > 0).then(|| self.blocks[i - z_off]),
								policy,
							);
							out = op.combine_neighbor(
								out,
								(z + 1 < self.z_dim).then(|| self.blocks[i + z_off]),
								policy,
							);
							out
						}
					};
					i += 1;
				}
			}
		}

		if let MorphOp::Grow = op {
			// OR can spill set bits past x_dim - 1
			dest.clear_padding_bits();
		}
		dest.cached_count = None;
		dest.bounds = None;
	}
}
