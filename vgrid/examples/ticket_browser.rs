//! Browse a paged ticket list from the terminal.
//!
//! Demonstrates the full engine: paged source, debounced filtering, sort
//! cycling, multi-selection, and windowed render plans.

use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use simplelog::{Config, LevelFilter, WriteLogger};

use vgrid::prelude::*;

struct TicketApi;

#[async_trait]
impl RowSource for TicketApi {
    async fn load_page(&self, page: u32, page_size: usize) -> Result<RowPage, SourceError> {
        // Pretend network latency.
        tokio::time::sleep(Duration::from_millis(50)).await;
        let total: usize = 240;
        let first = (page as usize - 1) * page_size;
        let items = (first..(first + page_size).min(total))
            .map(ticket)
            .collect();
        Ok(RowPage::new(items, first + page_size < total))
    }
}

fn ticket(n: usize) -> Row {
    let assignee: Value = if n % 7 == 0 {
        Value::Null
    } else {
        format!("agent-{}", n % 5).into()
    };
    Row::with_id(format!("T-{n:04}"))
        .set("subject", format!("Printer on floor {} is on fire", n % 9))
        .set("priority", (n % 4) as i64)
        .set("assignee", assignee)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("ticket-browser.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let columns = vec![
        Column::new("id", "Ticket").fixed(80),
        Column::new("subject", "Subject").flex(3),
        Column::new("priority", "Priority")
            .fixed(60)
            .align(Align::Right)
            .renderer(|value, _row, _index| match value.as_f64() {
                Some(p) if p >= 3.0 => "URGENT".into(),
                Some(p) => format!("P{p}"),
                None => "-".into(),
            }),
        Column::new("assignee", "Assignee").flex(1),
    ];

    let config = TableConfig {
        selectable: true,
        multi_select: true,
        debounce_delay: Duration::from_millis(100),
        ..Default::default()
    };

    let mut table = TableGrid::new(columns, config)?
        .with_events(
            TableEvents::new()
                .on_sort(|sort| println!("sorted by {:?} {:?}", sort.key, sort.direction))
                .on_filter(|filters| println!("{} filter(s) active", filters.len()))
                .on_select(|rows, _keys| println!("{} row(s) selected", rows.len()))
                .on_load_more(|| println!("fetching next page...")),
        )
        .with_source(Arc::new(TicketApi));

    // Page 1 comes from the consumer; the loader takes over from page 2.
    let first = TicketApi.load_page(1, 50).await?;
    table.set_rows(first.items);

    table.toggle_sort("priority");
    table.filter_input("assignee", "agent-1");

    // Scroll toward the tail so the sentinel fires, then give background
    // work a chance to finish and drain it.
    table.set_scroll_offset(u32::MAX);
    for _ in 0..10 {
        tokio::time::sleep(Duration::from_millis(30)).await;
        table.pump();
    }

    let header = table.header();
    let titles: Vec<String> = header
        .cells
        .iter()
        .map(|cell| match cell.sort_indicator {
            Some(indicator) => format!("{} {}", cell.title, indicator),
            None => cell.title.clone(),
        })
        .collect();
    println!("{}", titles.join(" | "));

    let plan = table.render();
    println!(
        "{} rows materialized of {} total px (spacers {} / {})",
        plan.rows.len(),
        plan.total_height_px,
        plan.top_spacer_px,
        plan.bottom_spacer_px,
    );
    for row in &plan.rows {
        let cells: Vec<&str> = row.cells.iter().map(|c| c.text.as_str()).collect();
        println!("{} {}", if row.selected { ">" } else { " " }, cells.join(" | "));
    }

    table.teardown();
    Ok(())
}
