use std::fmt;

use comfy_table::Cell;

use crate::queue::RingQueue;

/// Renders the backing store as a table, one row per slot in storage order.
///
/// Stale slots are shown too, so this exposes internal state beyond the
/// queue's logical contents. Debugging aid only.
pub fn pretty_format_ring_queue<T: fmt::Debug>(queue: &RingQueue<T>) -> comfy_table::Table {
    let mut table = comfy_table::Table::new();
    table.load_preset("||--+-++|    ++++++");
    table.set_header(vec![
        Cell::new("slot"),
        Cell::new("state"),
        Cell::new("value"),
    ]);

    for (idx, slot) in queue.slots().iter().enumerate() {
        let mut cells = vec![Cell::new(idx)];
        match slot {
            Some(elem) => {
                cells.push(Cell::new("live"));
                cells.push(Cell::new(format!("{elem:?}")));
            }
            None => {
                cells.push(Cell::new("stale"));
                cells.push(Cell::new("-"));
            }
        }
        table.add_row(cells);
    }

    table
}
