use std::io::{self, Write};

use crate::voxel_volume::volume::VoxelVolume;

impl VoxelVolume {
	/// Render the volume as text, one z-plane at a time (highest z first,
	/// highest y row first), `✖` for set voxels and `•` for clear ones.
	///
	/// Visual debugging only; the exact layout carries no stability
	/// guarantee.
	pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
		let divider: String = "-".repeat(self.x_dim);
		writeln!(out, "{}", divider)?;
		for z in (0..self.z_dim).rev() {
			for y in (0..self.y_dim).rev() {
				for x in 0..self.x_dim {
					let glyph = if self.get_voxel_xyz(x, y, z) { "✖" } else { "•" };
					write!(out, "{}", glyph)?;
				}
				writeln!(out)?;
			}
			writeln!(out)?;
			writeln!(out)?;
		}
		Ok(())
	}

	/// Dump to stdout.
	pub fn print(&self) -> io::Result<()> {
		self.dump(&mut io::stdout().lock())
	}
}
