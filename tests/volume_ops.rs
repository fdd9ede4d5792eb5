//! End-to-end exercises of the packed voxel volume: algebra, morphology,
//! and analytics chained together the way callers combine them.

use voxel_bits::voxel_volume::morphology::EdgePolicy;
use voxel_bits::voxel_volume::volume::VoxelVolume;

fn solid_box(
	dims: (usize, usize, usize),
	xs: std::ops::RangeInclusive<usize>,
	ys: std::ops::RangeInclusive<usize>,
	zs: std::ops::RangeInclusive<usize>,
) -> VoxelVolume {
	let mut v = VoxelVolume::new(dims.0, dims.1, dims.2);
	for z in zs {
		for y in ys.clone() {
			for x in xs.clone() {
				v.set_voxel_xyz(x, y, z, true);
			}
		}
	}
	v
}

#[test]
fn erode_undoes_one_dilation_of_a_box() {
	// dilating a solid box and eroding the result restores the box
	let dims = (20, 20, 20);
	let cube = solid_box(dims, 5..=10, 5..=10, 5..=10);

	let mut grown = VoxelVolume::new(dims.0, dims.1, dims.2);
	cube.dilate(&mut grown);
	let mut shrunk = VoxelVolume::new(dims.0, dims.1, dims.2);
	grown.erode(&mut shrunk);

	assert!(shrunk.is_equal(&cube));
}

#[test]
fn dilation_grows_box_by_face_neighbors() {
	let dims = (20, 20, 20);
	let cube = solid_box(dims, 5..=10, 5..=10, 5..=10);
	let mut grown = VoxelVolume::new(dims.0, dims.1, dims.2);
	cube.dilate(&mut grown);

	// 6^3 cube plus one 6x6 plate per face
	assert_eq!(grown.count(), 6 * 6 * 6 + 6 * 36);
	assert_eq!(grown.compute_bounds_and_count(), grown.count());
	assert_eq!(grown.min_x(), 4);
	assert_eq!(grown.max_x(), 11);
}

#[test]
fn morphology_interacts_with_algebra() {
	let dims = (30, 16, 16);
	let a = solid_box(dims, 2..=6, 2..=6, 2..=6);
	let b = solid_box(dims, 4..=9, 4..=9, 4..=9);

	let mut shell = VoxelVolume::new(dims.0, dims.1, dims.2);
	a.dilate(&mut shell);
	shell.subtract(&a);

	// the shell is exactly the grown voxels
	let mut grown = VoxelVolume::new(dims.0, dims.1, dims.2);
	a.dilate(&mut grown);
	assert_eq!(shell.count(), grown.count() - 5 * 5 * 5);

	// union then intersect recovers the smaller operand
	let mut u = a.clone();
	u.merge(&b);
	u.intersect(&b);
	assert!(u.is_equal(&b));
}

#[test]
fn padded_scanlines_survive_full_pipeline() {
	// 70 wide: two words per scanline, 58 padding bits in the second
	let dims = (70, 4, 4);
	let blob = solid_box(dims, 60..=69, 1..=2, 1..=2);

	let mut grown = VoxelVolume::new(dims.0, dims.1, dims.2);
	blob.dilate(&mut grown);
	assert!(grown.count() <= grown.size());
	assert!(!grown.get_voxel_xyz(59, 0, 0));

	let mut inverted = grown.clone();
	inverted.invert();
	inverted.invert();
	assert!(inverted.is_equal(&grown));

	assert_eq!(grown.compute_bounds_and_count(), grown.count());
	assert_eq!(grown.max_x(), 69);
	assert_eq!(grown.min_x(), 59);
}

#[test]
fn edge_policies_agree_away_from_faces() {
	let dims = (12, 12, 12);
	let cube = solid_box(dims, 3..=8, 3..=8, 3..=8);

	let mut clamped = VoxelVolume::new(dims.0, dims.1, dims.2);
	cube.erode(&mut clamped);
	let mut unbounded = VoxelVolume::new(dims.0, dims.1, dims.2);
	cube.erode_with_policy(&mut unbounded, EdgePolicy::Unbounded);

	// nothing touches a grid face, so the policies cannot differ
	assert!(clamped.is_equal(&unbounded));
	assert_eq!(clamped.count(), 4 * 4 * 4);
}

#[test]
fn edge_policies_differ_on_faces() {
	let dims = (6, 6, 6);
	let mut full = VoxelVolume::new(dims.0, dims.1, dims.2);
	for i in 0..full.size() {
		full.set_voxel_index(i, true);
	}

	let mut clamped = VoxelVolume::new(dims.0, dims.1, dims.2);
	full.erode(&mut clamped);
	let mut unbounded = VoxelVolume::new(dims.0, dims.1, dims.2);
	full.erode_with_policy(&mut unbounded, EdgePolicy::Unbounded);

	// clamped: only the 4^3 interior survives
	assert_eq!(clamped.count(), 4 * 4 * 4);
	// unbounded: y/z faces keep their voxels, x faces still erode
	assert_eq!(unbounded.count(), 4 * 6 * 6);
	assert!(!unbounded.get_voxel_xyz(0, 0, 0));
	assert!(unbounded.get_voxel_xyz(1, 0, 0));
}

#[test]
fn repeated_dilation_fills_the_grid() {
	let dims = (9, 9, 9);
	let mut current = VoxelVolume::new(dims.0, dims.1, dims.2);
	current.set_voxel_xyz(4, 4, 4, true);

	// 12 steps cover the maximum Manhattan distance from the center
	for _ in 0..12 {
		let mut next = VoxelVolume::new(dims.0, dims.1, dims.2);
		current.dilate(&mut next);
		current = next;
	}
	assert_eq!(current.count(), current.size());
}
