use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use f1_model::{Race, RaceResult};
use f1_standings::{ConstructorStanding, DriverStanding, ResultLine, result_lines};

use crate::types::{
    ExportResult, ImportResult, PasteResult, RoundOutcome, StandingsResult, TemplatesResult,
};

pub const NO_RACES: &str = "No races for this season.";
pub const NO_RESULTS: &str = "No results";
pub const NO_PODIUM: &str = "No podium data";
pub const NO_STANDINGS: &str = "Add race results to see standings.";

/// Width of the standings bar for the leader.
const BAR_WIDTH: f64 = 20.0;

pub fn print_templates(result: &TemplatesResult) {
    println!(
        "Created {} templates in {}",
        result.files.len(),
        result.dir.display()
    );
}

pub fn print_paste(result: &PasteResult) {
    println!(
        "Wrote {} ({} rows) from {}",
        result.output.display(),
        result.rows,
        result.input.display()
    );
}

pub fn print_export(result: &ExportResult) {
    println!(
        "Season {}: {} races, {} results -> {} ({} new, {} replaced)",
        result.season,
        result.races,
        result.results,
        result.store_file.display(),
        result.upsert.inserted,
        result.upsert.replaced
    );
}

pub fn print_import(result: &ImportResult) {
    println!("Season: {}", result.season);
    println!("Data: {}", result.dir.display());
    if result.rounds.is_empty() {
        println!("No r*.csv files found.");
        return;
    }
    println!("{}", import_table(result));
}

pub fn import_table(result: &ImportResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Round"),
        header_cell("File"),
        header_cell("Results"),
        header_cell("Winner"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for round in &result.rounds {
        let file = round
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (results, winner, status) = match &round.outcome {
            RoundOutcome::Updated { results, winner } => (
                Cell::new(results),
                winner.as_deref().map_or_else(|| dim_cell("-"), Cell::new),
                Cell::new("updated").fg(Color::Green),
            ),
            RoundOutcome::MissingRace => (
                dim_cell("-"),
                dim_cell("-"),
                Cell::new("no race doc").fg(Color::Yellow),
            ),
            RoundOutcome::Failed(message) => (
                dim_cell("-"),
                dim_cell("-"),
                Cell::new(message).fg(Color::Red),
            ),
        };
        table.add_row(vec![Cell::new(round.round), Cell::new(file), results, winner, status]);
    }
    table
}

pub fn print_races(races: &[Race]) {
    if races.is_empty() {
        println!("{NO_RACES}");
        return;
    }
    println!("{}", races_table(races));
}

pub fn races_table(races: &[Race]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Season"),
        header_cell("Round"),
        header_cell("Date"),
        header_cell("Grand Prix"),
        header_cell("Circuit"),
        header_cell("Location"),
        header_cell("Winner"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for race in races {
        let winner = race
            .winner
            .as_ref()
            .map_or_else(|| dim_cell("-"), |w| Cell::new(w.label()));
        table.add_row(vec![
            Cell::new(race.season),
            Cell::new(race.round),
            Cell::new(race.date.format("%Y-%m-%d")),
            Cell::new(&race.name).add_attribute(Attribute::Bold),
            Cell::new(&race.circuit),
            Cell::new(&race.location),
            winner,
        ]);
    }
    table
}

pub fn print_race(race: &Race) {
    println!("{} {}", race.season, race.name);
    println!(
        "{} · {} · {}",
        race.date.format("%Y-%m-%d"),
        race.circuit,
        race.location
    );

    println!();
    println!("Podium:");
    let podium = race.podium();
    if podium.is_empty() {
        println!("{NO_PODIUM}");
    } else {
        println!("{}", podium_table(&podium));
    }

    println!();
    println!("Race results:");
    let lines = result_lines(race);
    if lines.is_empty() {
        println!("{NO_RESULTS}");
    } else {
        println!("{}", results_table(&lines));
    }
}

pub fn podium_table(podium: &[&RaceResult]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Pos"),
        header_cell("Driver"),
        header_cell("Team"),
        header_cell("Time / Status"),
    ]);
    apply_table_style(&mut table);
    for result in podium {
        let position = result
            .position
            .map(|p| format!("#{p}"))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(position).add_attribute(Attribute::Bold),
            driver_cell(&result.driver.code, &result.driver.name),
            Cell::new(&result.driver.team),
            Cell::new(result.time_or_status()),
        ]);
    }
    table
}

pub fn results_table(lines: &[ResultLine]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Pos"),
        header_cell("Driver"),
        header_cell("Team"),
        header_cell("Grid"),
        header_cell("Laps"),
        header_cell("Time / Status"),
        header_cell("Pts"),
        header_cell("FL"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    for line in lines {
        table.add_row(vec![
            Cell::new(&line.position),
            driver_cell(&line.code, &line.name),
            Cell::new(&line.team),
            Cell::new(&line.grid),
            Cell::new(&line.laps),
            Cell::new(&line.time_or_status),
            Cell::new(&line.points),
            Cell::new(&line.fastest_lap),
        ]);
    }
    table
}

pub fn print_standings(result: &StandingsResult) {
    println!("Season {} ({} races)", result.season, result.races.len());

    println!();
    println!("Drivers' Championship:");
    if result.standings.drivers.is_empty() {
        println!("{NO_STANDINGS}");
    } else {
        println!(
            "{}",
            driver_table(&result.standings.drivers, result.standings.driver_scale())
        );
    }

    println!();
    println!("Constructors' Championship:");
    if result.standings.constructors.is_empty() {
        println!("{NO_STANDINGS}");
    } else {
        println!(
            "{}",
            constructor_table(
                &result.standings.constructors,
                result.standings.constructor_scale()
            )
        );
    }
}

pub fn driver_table(drivers: &[DriverStanding], scale: f64) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Driver"),
        header_cell("Team"),
        header_cell("Wins"),
        header_cell("Pts"),
        header_cell(""),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (idx, driver) in drivers.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            driver_cell(&driver.code, &driver.name),
            Cell::new(&driver.team),
            Cell::new(driver.wins),
            Cell::new(driver.points).add_attribute(Attribute::Bold),
            Cell::new(bar(driver.points, scale)).fg(Color::Red),
        ]);
    }
    table
}

pub fn constructor_table(constructors: &[ConstructorStanding], scale: f64) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Team"),
        header_cell("Wins"),
        header_cell("Pts"),
        header_cell(""),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (idx, team) in constructors.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&team.team).add_attribute(Attribute::Bold),
            Cell::new(team.wins),
            Cell::new(team.points).add_attribute(Attribute::Bold),
            Cell::new(bar(team.points, scale)).fg(Color::Blue),
        ]);
    }
    table
}

/// Bar proportional to `points / scale`.
pub fn bar(points: f64, scale: f64) -> String {
    let ratio = if scale > 0.0 { (points / scale).clamp(0.0, 1.0) } else { 0.0 };
    let width = (ratio * BAR_WIDTH).round() as usize;
    "█".repeat(width)
}

fn driver_cell(code: &str, name: &str) -> Cell {
    if code.is_empty() {
        Cell::new(name)
    } else {
        Cell::new(format!("{code} {name}"))
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
