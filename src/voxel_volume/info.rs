use std::env;
use std::sync::Once;

use crate::voxel_volume::volume::VoxelVolume;

/// Format byte counts with KB, MB, GB, TB suffixes
fn format_bytes(bytes: usize) -> String {
	const KB: usize = 1024;
	const MB: usize = KB * 1024;
	const GB: usize = MB * 1024;
	const TB: usize = GB * 1024;

	if bytes >= TB {
		format!("{:.2} TB", bytes as f64 / TB as f64)
	} else if bytes >= GB {
		format!("{:.2} GB", bytes as f64 / GB as f64)
	} else if bytes >= MB {
		format!("{:.2} MB", bytes as f64 / MB as f64)
	} else if bytes >= KB {
		format!("{:.2} KB", bytes as f64 / KB as f64)
	} else {
		format!("{} bytes", bytes)
	}
}

/// Print compilation information (only prints once)
pub fn print_compile_info() {
	static PRINT_COMPILE_ONCE: Once = Once::new();
	PRINT_COMPILE_ONCE.call_once(|| {
		let program_name = env::current_exe()
			.ok()
			.as_ref()
			.and_then(|path| path.file_name())
			.and_then(|name| name.to_str())
			.unwrap_or("Unknown Program")
			.to_string();

		eprintln!("Program: {}", program_name);
		eprintln!("Compiled on: {} at {}", env!("COMPILE_DATE"), env!("COMPILE_TIME"));
		eprintln!("Crate version: {}", env!("CARGO_PKG_VERSION"));
	});
}

impl VoxelVolume {
	/// Report memory usage of the packed storage
	pub fn report_memory(&self) {
		let storage = self.storage_bytes();
		let unpacked = self.size();

		eprintln!("VoxelVolume Memory Report:");
		eprintln!("-------------------------");
		eprintln!("  Dimensions: {} x {} x {}", self.x_dim(), self.y_dim(), self.z_dim());
		eprintln!("  Total Voxels: {:e}", self.size() as f64);
		eprintln!("  Packed Storage: {}", format_bytes(storage));
		eprintln!("  Byte-per-voxel Equivalent: {}", format_bytes(unpacked));
		eprintln!("-------------------------");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn format_bytes_picks_suffix() {
		assert_eq!(format_bytes(512), "512 bytes");
		assert_eq!(format_bytes(2048), "2.00 KB");
		assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MB");
	}
}
