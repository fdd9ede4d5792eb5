use std::process::Command;

fn date_output(format: &str) -> String {
	Command::new("date")
		.arg(format)
		.output()
		.ok()
		.map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
		.unwrap_or_else(|| "unknown".to_string())
}

fn main() {
	println!("cargo:rustc-env=COMPILE_DATE={}", date_output("+%Y-%m-%d"));
	println!("cargo:rustc-env=COMPILE_TIME={}", date_output("+%H:%M:%S"));
}
