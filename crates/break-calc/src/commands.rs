use anyhow::{Context, Result};
use break_calc_core::{BreakSchedule, calculate};

use crate::{CalcFormat, Command};

/// Execute a non-interactive command and print its result to stdout.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Calc { start, format } => {
            let schedule = calculate(&start)
                .with_context(|| format!("cannot compute break windows for {start:?}"))?;

            match format {
                CalcFormat::Table => render_schedule_table(&schedule),
                CalcFormat::Json => println!("{}", serde_json::to_string_pretty(&schedule)?),
            }
        }
        _ => unreachable!("non-calc command routed to commands::run"),
    }

    Ok(())
}

fn render_schedule_table(schedule: &BreakSchedule) {
    println!("Break | Time In | Time Out");
    println!("----- | ------- | --------");

    for row in schedule_rows(schedule) {
        println!("{row}");
    }
}

/// One `N | Time In | Time Out` row per window, 1-indexed.
fn schedule_rows(schedule: &BreakSchedule) -> Vec<String> {
    schedule
        .windows()
        .iter()
        .enumerate()
        .map(|(index, window)| format!("{} | {} | {}", index + 1, window.time_in, window.time_out))
        .collect()
}
