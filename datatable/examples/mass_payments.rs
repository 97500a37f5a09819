//! Interactive demo: a mass-payments dashboard table.
//!
//! Keys: `q` quit, `r` refresh (simulated fetch), `a` check all visible,
//! `c` clear checked, `Enter` select the highlighted row. Click cells to
//! highlight, checkboxes to mark rows for bulk processing, buttons to
//! approve/reject, headers to sort. Events are written to
//! `mass_payments.log`.

use std::error::Error;
use std::fs::File;
use std::time::Duration;

use datatable::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{hit_test, Event, Key, Terminal};

#[derive(Debug, Clone)]
struct FakeOrder {
    uid: String,
    order_id: String,
    amount: f64,
    status: String,
    customer: String,
}

fn seed_orders() -> Vec<FakeOrder> {
    let seed = [
        ("c81d", "ord-1011", 125.50, "pending", "ivanov"),
        ("a42f", "ord-1012", 9.99, "processing", "petrov"),
        ("910b", "ord-1013", 1500.00, "success", "sidorov"),
        ("77e3", "ord-1014", 42.00, "failed", "smith"),
        ("0f6a", "ord-1015", 300.25, "pending", "jones"),
    ];
    seed.iter()
        .map(|(uid, order_id, amount, status, customer)| FakeOrder {
            uid: uid.to_string(),
            order_id: order_id.to_string(),
            amount: *amount,
            status: status.to_string(),
            customer: customer.to_string(),
        })
        .collect()
}

fn status_class(status: &str) -> &'static str {
    match status {
        "success" | "processing" => "badge bg-success",
        "failed" => "badge bg-danger",
        _ => "badge bg-warning",
    }
}

fn build_headers() -> Vec<Header> {
    vec![
        Header::new("uid").hidden(),
        Header::new(""),
        Header::new("Order"),
        Header::new("Amount").sortable().kind(ColumnKind::Number),
        Header::new("Status").sortable(),
        Header::new("Customer").sortable(),
        Header::new("Actions"),
    ]
}

fn build_rows(orders: &[FakeOrder]) -> Vec<Row> {
    orders
        .iter()
        .map(|order| {
            let mut actions = Cell::empty();
            if order.status == "pending" {
                actions = actions
                    .button(ButtonSpec::new("Approve").id("approve").class("btn-success"))
                    .button(ButtonSpec::new("Reject").id("reject").class("btn-danger"));
            }
            let receipt = LinkSpec::new(format!("/receipts/{}.pdf", order.uid))
                .label("Receipt")
                .id("receipt");
            actions = actions.link(receipt);

            Row::new(
                order.uid.clone(),
                vec![
                    Cell::text(order.uid.clone()),
                    Cell::checkbox(),
                    Cell::text(order.order_id.clone()),
                    Cell::text(format!("{:.2}", order.amount)),
                    Cell::empty().badge(
                        BadgeSpec::new(order.status.clone()).class(status_class(&order.status)),
                    ),
                    Cell::text(order.customer.clone()),
                    actions,
                ],
            )
        })
        .collect()
}

fn set_status(orders: &mut [FakeOrder], uid: &str, status: &str) {
    if let Some(order) = orders.iter_mut().find(|o| o.uid == uid) {
        order.status = status.to_string();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let log_file = File::create("mass_payments.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let mut orders = seed_orders();
    let table = Table::with_rows(build_headers(), build_rows(&orders), TableOptions::default());
    let refresher = Refresher::new(table.clone());

    let mut terminal = Terminal::new()?;
    let mut tree = table.projection();
    terminal.render(&tree)?;
    table.clear_dirty();

    loop {
        for event in terminal.poll(Some(Duration::from_millis(100)))? {
            match event {
                Event::Key { key: Key::Char('q'), .. } => return Ok(()),
                Event::Key { key: Key::Char('r'), .. } => {
                    let snapshot = build_rows(&orders);
                    table.set_loading(true);
                    let result = rt.block_on(refresher.run(true, || async move {
                        // Stand-in for the backend round trip.
                        tokio::time::sleep(Duration::from_millis(120)).await;
                        Ok(snapshot)
                    }));
                    table.set_loading(false);
                    if let Err(e) = result {
                        table.set_error(Some(e.to_string()));
                    } else {
                        table.set_error(None);
                    }
                }
                Event::Key { key: Key::Char('a'), .. } => {
                    table.check_all_visible();
                }
                Event::Key { key: Key::Char('c'), .. } => {
                    table.clear_checked();
                }
                Event::Key { key: Key::Enter, .. } => {
                    if let Some(row) = table.active() {
                        table.select_row(row);
                    }
                }
                Event::Click { x, y, .. } => {
                    if let Some(hit) = hit_test(terminal.layout(), &tree, x, y) {
                        table.handle_hit(&hit);
                    }
                }
                Event::Resize { .. } => {
                    terminal.render(&tree)?;
                }
                _ => {}
            }
        }

        for event in table.take_events() {
            log::info!("table event: {event:?}");
            if let TableEvent::ClickButton { id: Some(id), row_id, .. } = &event {
                match id.as_str() {
                    "approve" => set_status(&mut orders, row_id, "processing"),
                    "reject" => set_status(&mut orders, row_id, "failed"),
                    _ => continue,
                }
                table.refresh(Some(build_rows(&orders)), true);
            }
        }

        if table.is_dirty() {
            tree = table.projection();
            terminal.render(&tree)?;
            table.clear_dirty();
        }
    }
}
