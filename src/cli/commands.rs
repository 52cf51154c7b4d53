//! Command dispatch: one function per subcommand.

use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, OpSpec};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config;
use crate::domain::{sample_chart, Employee, OrgApp, OrgArena, Outcome};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let chart = resolve_chart(cli)?;
    match &cli.command {
        Some(Commands::Show) => _show(&chart),
        Some(Commands::Info) => _info(&chart),
        Some(Commands::Apply {
            operations,
            history,
        }) => _apply(&chart, operations, *history),
        Some(Commands::Demo) => _demo(),
        None => Ok(()),
    }
}

fn resolve_chart(cli: &Cli) -> CliResult<Employee> {
    match &cli.chart {
        Some(path) => Ok(config::load_chart(path)?),
        None => Ok(sample_chart()),
    }
}

#[instrument(skip(chart))]
fn _show(chart: &Employee) -> CliResult<()> {
    output::info(&output::chart_tree(chart));
    Ok(())
}

#[instrument(skip(chart))]
fn _info(chart: &Employee) -> CliResult<()> {
    let tree = OrgArena::from_chart(chart)?;
    output::header("Organization");
    output::detail(&format!("root: {} ({})", chart.name, chart.id));
    output::detail(&format!("employees: {}", tree.employee_count()));
    output::detail(&format!("depth: {}", tree.depth()));
    Ok(())
}

#[instrument(skip(chart))]
fn _apply(chart: &Employee, operations: &[OpSpec], show_history: bool) -> CliResult<()> {
    let mut app = OrgApp::new(chart)?;
    for op in operations {
        debug!("applying {:?}", op);
        match op {
            OpSpec::Move {
                employee,
                supervisor,
            } => report(
                &format!("move {employee} -> {supervisor}"),
                app.move_employee(*employee, *supervisor),
            ),
            OpSpec::Undo => report("undo", app.undo()),
            OpSpec::Redo => report("redo", app.redo()),
        }
    }
    output::info(&output::chart_tree(&app.chart()));
    if show_history {
        print_history(&app);
    }
    Ok(())
}

/// Walkthrough: relocate Bob (12) under Sarah (2), undo, redo.
/// Always runs on the sample chart.
#[instrument]
fn _demo() -> CliResult<()> {
    let mut app = OrgApp::new(&sample_chart())?;

    output::header("Initial");
    output::info(&output::chart_tree(&app.chart()));

    report("move 12 -> 2", app.move_employee(12, 2));
    output::info(&output::chart_tree(&app.chart()));

    report("undo", app.undo());
    output::info(&output::chart_tree(&app.chart()));

    report("redo", app.redo());
    output::info(&output::chart_tree(&app.chart()));

    print_history(&app);
    Ok(())
}

fn report(label: &str, outcome: Outcome) {
    if outcome.is_applied() {
        output::success(&format!("{label}: {outcome}"));
    } else {
        output::warning(&format!("{label}: {outcome}"));
    }
}

fn print_history(app: &OrgApp) {
    output::header("History");
    if app.history().is_empty() {
        output::detail("(empty)");
    }
    for (pos, entry) in app.history().iter().enumerate() {
        output::detail(&format!("{:>2}. {}", pos + 1, entry));
    }
}
