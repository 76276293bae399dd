// Parse an expression from the command line and print its next few runs.

use cronex::{describe, Schedule};
use jiff::Zoned;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let expression = std::env::args()
		.nth(1)
		.unwrap_or_else(|| "*/15 9-17 * * mon-fri".to_string());

	let schedule = Schedule::parse(&expression)?;
	println!("{}", describe(&schedule));

	let now = Zoned::now();
	for run in schedule.next_runs(&now, 5) {
		println!("{run}");
	}

	Ok(())
}
