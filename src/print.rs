use std::fmt::Display;

use comfy_table::presets::UTF8_NO_BORDERS;
use comfy_table::{Cell, ContentArrangement, Table};
use itertools::Itertools;

use crate::table::{NarrowRow, ResultsTable};
use crate::util::CountMap;
use crate::value::Face;

pub trait PrintExt {
    fn table(&self) -> String;

    fn print_table(&self) {
        print!("{}", self.table());
    }
}

fn new_table<I, S>(header: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<Cell>,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_NO_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.into_iter().map(Into::into).collect::<Vec<Cell>>());
    table
}

impl<T> PrintExt for ResultsTable<T>
where
    T: Face + Display,
{
    fn table(&self) -> String {
        let header = std::iter::once("Roll".to_owned())
            .chain((0..self.num_dice()).map(|d| format!("Die {d}")));
        let mut table = new_table(header);
        for (roll, row) in self.iter().enumerate() {
            table.add_row(
                std::iter::once(Cell::new(roll))
                    .chain(row.iter().map(Cell::new))
                    .collect_vec(),
            );
        }
        format!("{table}\n")
    }
}

impl<T> PrintExt for [NarrowRow<T>]
where
    T: Face + Display,
{
    fn table(&self) -> String {
        let mut table = new_table(["Roll", "Die", "Outcome"]);
        for r in self {
            table.add_row(vec![Cell::new(r.roll), Cell::new(r.die), Cell::new(&r.outcome)]);
        }
        format!("{table}\n")
    }
}

impl<T> PrintExt for CountMap<Vec<T>>
where
    T: Face + Display,
{
    fn table(&self) -> String {
        let mut table = new_table(["Outcomes", "Count"]);
        for (key, count) in self {
            table.add_row(vec![
                Cell::new(format!("({})", key.iter().join(", "))),
                Cell::new(count),
            ]);
        }
        format!("{table}\n")
    }
}
