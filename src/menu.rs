//! Interactive console menu.
//!
//! Pure glue: reads choices, calls into [`Bookstore`], prints the structured
//! results. Generic over `BufRead`/`Write` so tests can drive it with
//! in-memory buffers.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use bookstore_orders::bookstore::performance::PerformanceReport;
use bookstore_orders::types::price::format_price;
use bookstore_orders::{
    Book, Bookstore, BookstoreError, Order, OrderId, SearchAlgorithm, SortAlgorithm,
};

type Result<T> = std::result::Result<T, BookstoreError>;

/// Orders pushed by the stack demo
const STACK_DEMO_SIZE: usize = 3;

const RULE: &str = "===============================================";

pub struct Menu<'a, R, W> {
    bookstore: &'a mut Bookstore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(bookstore: &'a mut Bookstore, input: R, output: W) -> Self {
        Self {
            bookstore,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(BookstoreError::Io(err)) if err.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(
                    err @ (BookstoreError::InvalidMenuChoice(_)
                    | BookstoreError::InvalidNumber(_)
                    | BookstoreError::OrderIdsExhausted(_)),
                ) => {
                    writeln!(self.output, "{}", err)?;
                    if !self.pause()? {
                        break;
                    }
                }
                Err(err) => return Err(err),
            }
        }

        writeln!(self.output, "\nThank you for using the Bookstore System!")?;
        self.output.flush()?;
        Ok(())
    }

    /// One menu round. Returns `false` when the user chose to exit.
    fn step(&mut self) -> Result<bool> {
        self.show_main_menu()?;
        let choice = self.prompt("\nEnter your choice: ")?;

        match choice.trim() {
            "1" => self.stack_demo()?,
            "2" => self.queue_demo()?,
            "3" => self.sorting_demo()?,
            "4" => self.searching_demo()?,
            "5" => self.create_order()?,
            "6" => self.process_next_order()?,
            "7" => self.search_for_order()?,
            "8" => self.performance_comparison()?,
            "9" => return Ok(false),
            other => return Err(BookstoreError::InvalidMenuChoice(other.to_string())),
        }

        self.pause()
    }

    fn show_main_menu(&mut self) -> Result<()> {
        let out = &mut self.output;
        writeln!(out, "\n{}", RULE)?;
        writeln!(out, "    ONLINE BOOKSTORE ORDER PROCESSING SYSTEM    ")?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "1. Demonstrate Stack Operations (Recent Orders)")?;
        writeln!(out, "2. Demonstrate Queue Operations (Order Processing)")?;
        writeln!(out, "3. Demonstrate Sorting Algorithms")?;
        writeln!(out, "4. Demonstrate Searching Algorithms")?;
        writeln!(out, "5. Create New Order")?;
        writeln!(out, "6. Process Next Order in Queue")?;
        writeln!(out, "7. Search for Order")?;
        writeln!(out, "8. Performance Comparison of Algorithms")?;
        writeln!(out, "9. Exit")?;
        Ok(())
    }

    // ========================================================================
    // Input helpers
    // ========================================================================

    /// Read one line without its terminator. End of input is `UnexpectedEof`.
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_number<T: FromStr>(&mut self, text: &str) -> Result<T> {
        let line = self.prompt(text)?;
        line.trim()
            .parse()
            .map_err(|_| BookstoreError::InvalidNumber(line))
    }

    /// Returns `false` if input ended
    fn pause(&mut self) -> Result<bool> {
        writeln!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        match self.read_line() {
            Ok(_) => Ok(true),
            Err(BookstoreError::Io(err)) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
            Err(err) => Err(err),
        }
    }

    // ========================================================================
    // Menu actions
    // ========================================================================

    fn stack_demo(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== STACK OPERATIONS DEMONSTRATION ===")?;
        writeln!(self.output, "Stack follows LIFO (Last In, First Out) principle")?;

        writeln!(self.output, "\n1. Pushing orders to stack...")?;
        for id in self.bookstore.rebuild_recent_stack(STACK_DEMO_SIZE) {
            writeln!(self.output, "   Pushed Order {}", id)?;
        }
        self.show_stack()?;

        writeln!(self.output, "\n2. Peek operation (view top without removing):")?;
        match self.bookstore.peek_recent().map(|o| o.id) {
            Some(id) => writeln!(self.output, "   Top order: {}", id)?,
            None => writeln!(self.output, "   Stack is empty!")?,
        }

        writeln!(self.output, "\n3. Pop operation (remove and return top):")?;
        match self.bookstore.pop_recent().map(|o| o.id) {
            Some(id) => writeln!(self.output, "   Popped Order {}", id)?,
            None => writeln!(self.output, "   Stack is empty!")?,
        }
        self.show_stack()?;

        writeln!(self.output, "\n4. Stack Properties:")?;
        writeln!(self.output, "   - Time Complexity: O(1) for push, pop, peek")?;
        writeln!(self.output, "   - Space Complexity: O(n)")?;
        writeln!(self.output, "   - Use Case: Recent order history, undo operations")?;
        Ok(())
    }

    fn show_stack(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Stack Contents (Top to Bottom) ===")?;
        let ids: Vec<OrderId> = self.bookstore.recent_ids().collect();
        for (position, id) in ids.iter().enumerate() {
            writeln!(self.output, "Position {}: Order {}", position + 1, id)?;
        }
        Ok(())
    }

    fn queue_demo(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== QUEUE OPERATIONS DEMONSTRATION ===")?;
        writeln!(self.output, "Queue follows FIFO (First In, First Out) principle")?;
        self.show_queue()?;

        writeln!(self.output, "\n1. Front operation (view first without removing):")?;
        match self.bookstore.front_of_queue().map(|o| o.id) {
            Some(id) => writeln!(self.output, "   Front order: {}", id)?,
            None => writeln!(self.output, "   Queue is empty!")?,
        }

        writeln!(self.output, "\n2. Enqueue operation (add to rear):")?;
        let name = self.prompt("   Enter customer name: ")?;
        let id = self.bookstore.enqueue_walk_in(name)?;
        writeln!(self.output, "   Enqueued Order {}", id)?;
        self.show_queue()?;

        writeln!(self.output, "\n3. Queue Properties:")?;
        writeln!(self.output, "   - Time Complexity: O(1) for enqueue, dequeue, front")?;
        writeln!(self.output, "   - Space Complexity: O(n)")?;
        writeln!(self.output, "   - Use Case: Order processing, fairness in handling")?;
        Ok(())
    }

    fn show_queue(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Queue Contents (Front to Rear) ===")?;
        let ids: Vec<OrderId> = self.bookstore.pending_ids().collect();
        for (position, id) in ids.iter().enumerate() {
            writeln!(self.output, "Position {}: Order {}", position + 1, id)?;
        }
        Ok(())
    }

    fn sorting_demo(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== SORTING ALGORITHMS DEMONSTRATION ===")?;

        writeln!(self.output, "\nOriginal book list:")?;
        for (i, book) in self.bookstore.sort_sample_books().iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, book.title)?;
        }

        writeln!(self.output, "\nChoose sorting algorithm:")?;
        for (i, algorithm) in SortAlgorithm::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {} - {}", i + 1, algorithm, algorithm.time_complexity())?;
        }
        let choice: u32 = self.prompt_number("Enter choice: ")?;
        let algorithm = SortAlgorithm::from_choice(choice)
            .ok_or_else(|| BookstoreError::InvalidMenuChoice(choice.to_string()))?;

        let report = self.bookstore.sort_sample(algorithm);

        writeln!(self.output, "\nUsing {}:", algorithm.name().to_uppercase())?;
        writeln!(self.output, "- {}", algorithm.summary())?;
        writeln!(
            self.output,
            "- Time {}, space {}{}",
            algorithm.time_complexity(),
            algorithm.space_complexity(),
            if algorithm.is_stable() { ", stable" } else { "" }
        )?;

        writeln!(self.output, "\nSorted book list (by title):")?;
        for (i, book) in report.sorted.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, book.title)?;
        }
        writeln!(self.output, "\nTime taken: {} nanoseconds", report.elapsed.as_nanos())?;
        Ok(())
    }

    fn searching_demo(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== SEARCHING ALGORITHMS DEMONSTRATION ===")?;

        writeln!(self.output, "\nCurrent orders in system:")?;
        for order in self.bookstore.orders() {
            writeln!(self.output, "  Order {} - {}", order.id, order.customer_name)?;
        }

        let id = OrderId(self.prompt_number("\nEnter Order ID to search: ")?);
        let report = self.bookstore.search_order(id);

        for (step, outcome) in [(1, &report.linear), (2, &report.binary)] {
            let label = match outcome.algorithm {
                SearchAlgorithm::Linear => "LINEAR SEARCH:",
                SearchAlgorithm::Binary => "BINARY SEARCH (on sorted list):",
            };
            writeln!(self.output, "\n{}. {}", step, label)?;

            match outcome.found.and_then(|id| self.bookstore.order(id)) {
                Some(order) => {
                    writeln!(self.output, "   Found: Order {}", order.id)?;
                    writeln!(self.output, "   Customer: {}", order.customer_name)?;
                }
                None => writeln!(self.output, "   Order not found!")?,
            }
            writeln!(self.output, "   Time: {} nanoseconds", outcome.elapsed.as_nanos())?;
            writeln!(self.output, "   Complexity: {}", outcome.algorithm.time_complexity())?;
            if outcome.algorithm.requires_sorted_input() {
                writeln!(self.output, "   Note: Requires sorted data!")?;
            }
        }
        Ok(())
    }

    fn create_order(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== CREATE NEW ORDER ===")?;
        let name = self.prompt("Enter customer name: ")?;
        let address = self.prompt("Enter shipping address: ")?;

        writeln!(self.output, "\nAvailable books:")?;
        let catalog_len = self.bookstore.catalog().len();
        for (i, book) in self.bookstore.catalog().iter().enumerate() {
            writeln!(self.output, "{}. {} - {}", i + 1, book.title, format_price(book.price))?;
        }

        let count: usize = self.prompt_number("\nHow many books to add? ")?;
        let mut selections: Vec<usize> = Vec::new();
        for _ in 0..count {
            let text = format!("Enter book number (1-{}): ", catalog_len);
            selections.push(self.prompt_number(&text)?);
        }

        let id = self.bookstore.create_order(name, address, &selections)?;

        writeln!(self.output, "\nOrder created successfully!")?;
        if let Some(order) = self.bookstore.order(id) {
            write_order(&mut self.output, order)?;
        }
        Ok(())
    }

    fn process_next_order(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== PROCESS NEXT ORDER ===")?;

        match self.bookstore.process_next_order()? {
            Some(order) => {
                writeln!(self.output, "Processing order:")?;
                write_order(&mut self.output, order)?;
                writeln!(self.output, "\nOrder has been processed and removed from queue!")?;
            }
            None => writeln!(self.output, "No orders in queue to process!")?,
        }
        Ok(())
    }

    fn search_for_order(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== SEARCH FOR ORDER ===")?;
        let id = OrderId(self.prompt_number("Enter Order ID to search: ")?);

        match self.bookstore.find_order(id) {
            Some(order) => {
                writeln!(self.output, "\nOrder found:")?;
                write_order(&mut self.output, order)?;
            }
            None => writeln!(self.output, "\nOrder not found!")?,
        }
        Ok(())
    }

    fn performance_comparison(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== PERFORMANCE COMPARISON ===")?;
        let size: usize =
            self.prompt_number("Enter number of elements to test (e.g., 100, 1000, 5000): ")?;

        writeln!(self.output, "\n=== SORTING ALGORITHMS COMPARISON ===")?;
        writeln!(self.output, "Testing with {} elements...\n", size)?;
        let report = self.bookstore.compare_performance(size);
        write_performance(&mut self.output, &report)
    }
}

// ============================================================================
// Formatting
// ============================================================================

fn write_book<W: Write>(out: &mut W, book: &Book) -> io::Result<()> {
    writeln!(
        out,
        "  - ISBN: {} | Title: {} | Author: {} | Price: {} | Qty: {}",
        book.isbn,
        book.title,
        book.author,
        format_price(book.price),
        book.quantity
    )
}

fn write_order<W: Write>(out: &mut W, order: &Order) -> io::Result<()> {
    writeln!(out, "\n=== Order {} ===", order.id)?;
    writeln!(out, "Customer: {}", order.customer_name)?;
    writeln!(out, "Address: {}", order.shipping_address)?;
    writeln!(out, "Date: {}", order.created_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(out, "Status: {}", order.status)?;
    writeln!(out, "Books:")?;
    for book in &order.line_items {
        write_book(out, book)?;
    }
    Ok(())
}

fn write_performance<W: Write>(out: &mut W, report: &PerformanceReport) -> Result<()> {
    writeln!(out, "Algorithm      | Time (ms)    | Time Complexity | Space Complexity")?;
    writeln!(out, "---------------|--------------|-----------------|------------------")?;
    for timing in &report.sorts {
        writeln!(
            out,
            "{:<15}| {:>12.3} | {:<16}| {}{}",
            timing.algorithm.name(),
            timing.elapsed.as_secs_f64() * 1_000.0,
            timing.algorithm.time_complexity(),
            timing.algorithm.space_complexity(),
            if timing.sorted { "" } else { "  (NOT SORTED)" }
        )?;
    }
    writeln!(out, "\n* Quick Sort average case. Worst case is O(n²)")?;

    if let Some(best) = report.fastest_sort() {
        writeln!(out, "\nBest performer for {} elements: {}", report.size, best.algorithm)?;
    }

    writeln!(out, "\n=== SEARCHING ALGORITHMS COMPARISON ===")?;
    writeln!(out, "\nSearching for element in middle of {} elements:", report.size)?;
    writeln!(out, "Algorithm     | Time (µs)    | Time Complexity | Best Use Case")?;
    writeln!(out, "--------------|--------------|-----------------|----------------")?;
    for timing in &report.searches {
        let use_case = if timing.algorithm.requires_sorted_input() {
            "Sorted data"
        } else {
            "Unsorted data"
        };
        writeln!(
            out,
            "{:<14}| {:>12.3} | {:<16}| {}",
            timing.algorithm.name(),
            timing.elapsed.as_secs_f64() * 1_000_000.0,
            timing.algorithm.time_complexity(),
            use_case
        )?;
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
