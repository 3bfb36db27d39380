use colored::{ColoredString, Colorize};
use prettytable::{row, Table};

use crate::race::leaderboard;
use crate::{AlgorithmId, RunReport, RunStatus};

pub(super) fn print_race(base: &[u32], reports: &[RunReport]) {
    println!(
        "{} {}",
        "List Size -> ".bold().underline().blue(),
        base.len().to_string().bold()
    );

    let mut table = Table::new();
    table.add_row(row![
        "#".bold(),
        "Sorter".bold(),
        "Status".bold(),
        "Comparisons Made".bold(),
        "Operations".bold(),
        "Time Taken".bold()
    ]);

    for (rank, report) in leaderboard(reports).into_iter().enumerate() {
        table.add_row(row![
            (rank + 1).to_string(),
            report.algorithm.name(),
            status(&report.status),
            report.comparisons.to_string(),
            report.operations.to_string(),
            format!("{:?}", report.elapsed)
        ]);
    }

    table.printstd();
}

pub(super) fn print_algorithms(algorithms: &[AlgorithmId]) {
    let mut table = Table::new();
    table.add_row(row![
        "Id".bold(),
        "Sorter".bold(),
        "Family".bold(),
        "Stable".bold()
    ]);

    for algorithm in algorithms {
        let stable = if algorithm.is_stable() {
            "yes".green()
        } else {
            "no".normal()
        };
        table.add_row(row![
            algorithm.id().cyan(),
            algorithm.name(),
            algorithm.family().to_string(),
            stable
        ]);
    }

    table.printstd();
}

fn status(status: &RunStatus) -> ColoredString {
    match status {
        RunStatus::Completed => "completed".green(),
        RunStatus::Aborted => "aborted".yellow(),
        RunStatus::Failed { reason } => format!("failed: {reason}").red(),
    }
}
