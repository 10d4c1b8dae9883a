//! Salon UI CLI (for testing purposes only)
//! The main interface is through WASM bindings.

use salon_ui::{compute_range, format_range, DEFAULT_WINDOW_SIZE};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let show_first_last = args.iter().any(|a| a == "--anchors");
    let numbers: Vec<usize> = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .filter_map(|a| a.parse().ok())
        .collect();

    if numbers.len() < 2 {
        println!("Salon UI Core");
        println!("=============");
        println!();
        println!("This is a library crate. To use it:");
        println!();
        println!("  1. Build WASM: wasm-pack build --target web");
        println!("  2. Import the generated package from the site bundle");
        println!();
        println!("Preview a paginator range:");
        println!("  salon-ui <current> <total> [window] [--anchors]");
        return;
    }

    let window = numbers.get(2).copied().unwrap_or(DEFAULT_WINDOW_SIZE);
    let range = compute_range(numbers[0], numbers[1], window, show_first_last);
    if range.is_empty() {
        println!("(paginator hidden: single page)");
    } else {
        println!("{}", format_range(&range));
    }
}
