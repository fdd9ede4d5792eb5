use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use voxel_bits::voxel_volume::backends::{BitsetStore, ByteStore, OccupancyStore};
use voxel_bits::voxel_volume::info;
use voxel_bits::voxel_volume::volume::VoxelVolume;

#[derive(Parser)]
#[command(about = "Packed-bit voxel volume demo and storage backend benchmarks")]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Build a small volume, dilate it, and print each z-plane
	Demo {
		#[arg(long, default_value_t = 12)]
		dim: usize,
	},
	/// Time the canonical packed volume against the naive backends
	Bench {
		#[arg(long, default_value_t = 64)]
		size: usize,
		#[arg(long, default_value_t = 20)]
		iterations: usize,
	},
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	info::print_compile_info();

	match cli.command {
		Command::Demo { dim } => demo(dim)?,
		Command::Bench { size, iterations } => bench(size, iterations),
	}
	Ok(())
}

fn demo(dim: usize) -> Result<()> {
	let mut volume = VoxelVolume::new(dim, dim, dim);
	volume.report_memory();

	let center = dim / 2;
	volume.set_voxel_xyz(center, center, center, true);
	volume.set_voxel_xyz(1, 1, 1, true);

	let mut dilated = VoxelVolume::new(dim, dim, dim);
	volume.dilate(&mut dilated);
	let mut twice = VoxelVolume::new(dim, dim, dim);
	dilated.dilate(&mut twice);

	twice.print()?;

	let count = twice.compute_bounds_and_count();
	println!("Filled voxels: {}", count);
	println!(
		"Bounds: x {}..{}  y {}..{}  z {}..{}",
		twice.min_x(),
		twice.max_x(),
		twice.min_y(),
		twice.max_y(),
		twice.min_z(),
		twice.max_z()
	);
	Ok(())
}

struct Timing {
	subtract: f64,
	dilate: f64,
	count: f64,
	is_equal: f64,
}

/// Sparse deterministic seed pattern shared by every backend.
fn seeded<S: OccupancyStore>(size: usize) -> S {
	let mut store = S::with_dims(size, size, size);
	for z in 0..size {
		for y in 0..size {
			for x in 0..size {
				if (x * 31 + y * 17 + z * 7) % 13 == 0 {
					store.set(x, y, z, true);
				}
			}
		}
	}
	store
}

fn time_store<S: OccupancyStore>(label: &'static str, size: usize, iterations: usize) -> Timing {
	let pb = ProgressBar::new((iterations * 4) as u64);
	pb.set_style(
		ProgressStyle::default_bar()
			.template("Timing {msg}: [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
			.unwrap()
			.progress_chars("#>-"),
	);
	pb.set_message(label);

	let base: S = seeded(size);
	let other: S = seeded(size);
	let mut checksum = 0usize;

	let mut work: S = seeded(size);
	let start = Instant::now();
	for _ in 0..iterations {
		work.subtract(&other);
		pb.inc(1);
	}
	let subtract = start.elapsed().as_secs_f64();

	let start = Instant::now();
	for _ in 0..iterations {
		let dilated = base.dilate();
		checksum += dilated.count();
		pb.inc(1);
	}
	let dilate = start.elapsed().as_secs_f64();

	let start = Instant::now();
	for _ in 0..iterations {
		checksum += base.count();
		pb.inc(1);
	}
	let count = start.elapsed().as_secs_f64();

	let start = Instant::now();
	for _ in 0..iterations {
		checksum += base.is_equal(&other) as usize;
		pb.inc(1);
	}
	let is_equal = start.elapsed().as_secs_f64();

	pb.finish_with_message(format!("{} done (checksum {})", label, checksum));
	Timing { subtract, dilate, count, is_equal }
}

fn report(op: &str, packed: f64, byte: f64, bitset: f64) {
	println!("\n{}", op.to_uppercase());
	println!("  packed: {:.6} s", packed);
	println!("  byte:   {:.6} s", byte);
	println!("  bitset: {:.6} s", bitset);
	println!("  speedup vs byte: {:.2}x", byte / packed);
}

fn bench(size: usize, iterations: usize) {
	println!("Backend comparison, {size}^3 voxels, {iterations} iterations per op");

	let packed = time_store::<VoxelVolume>("packed", size, iterations);
	let byte = time_store::<ByteStore>("byte", size, iterations);
	let bitset = time_store::<BitsetStore>("bitset", size, iterations);

	report("subtract", packed.subtract, byte.subtract, bitset.subtract);
	report("dilate", packed.dilate, byte.dilate, bitset.dilate);
	report("count", packed.count, byte.count, bitset.count);
	report("is_equal", packed.is_equal, byte.is_equal, bitset.is_equal);
}
