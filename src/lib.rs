pub mod voxel_volume {
	pub mod info;
	pub mod volume;
	pub mod index;
	pub mod algebra;
	pub mod morphology;
	pub mod analyze;
	pub mod print;
	pub mod backends;
}
