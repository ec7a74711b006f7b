//! Interactive menu over a [`BinarySearchTree`].
//!
//! The console owns the tree and drives it from line-oriented input. It is
//! generic over its input and output so the binary can hand it stdin and
//! stdout while tests use in-memory buffers.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::loader::load_bids_from_path;
use crate::tree::BinarySearchTree;

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    DisplayAll,
    Find,
    Remove,
    Exit,
}

impl MenuChoice {
    /// Map the number typed at the prompt to a choice
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Load),
            2 => Some(MenuChoice::DisplayAll),
            3 => Some(MenuChoice::Find),
            4 => Some(MenuChoice::Remove),
            9 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Menu loop state
pub struct Console {
    tree: BinarySearchTree,
    csv_path: PathBuf,
    bid_key: String,
}

impl Console {
    pub fn new(csv_path: impl Into<PathBuf>, bid_key: impl Into<String>) -> Self {
        Self {
            tree: BinarySearchTree::new(),
            csv_path: csv_path.into(),
            bid_key: bid_key.into(),
        }
    }

    /// The tree being managed
    pub fn tree(&self) -> &BinarySearchTree {
        &self.tree
    }

    /// Run the menu until exit or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        let mut lines = input.lines();

        loop {
            write_menu(out)?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };

            let choice = match line.trim().parse::<u32>() {
                Ok(n) => MenuChoice::from_number(n),
                Err(_) => {
                    writeln!(out, "Please enter a number.")?;
                    continue;
                }
            };

            match choice {
                Some(MenuChoice::Load) => self.load(out)?,
                Some(MenuChoice::DisplayAll) => self.display_all(out)?,
                Some(MenuChoice::Find) => self.find(out)?,
                Some(MenuChoice::Remove) => self.remove(out)?,
                Some(MenuChoice::Exit) => break,
                None => writeln!(out, "Unknown choice {}.", line.trim())?,
            }
        }

        writeln!(out, "Good bye.")
    }

    fn load<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Loading CSV file {}", self.csv_path.display())?;

        let start = Instant::now();
        let result = load_bids_from_path(&self.csv_path, &mut self.tree);
        let elapsed = start.elapsed();

        if let Err(e) = result {
            error!(error = %e, "load failed");
            writeln!(out, "{}", e)?;
        }

        writeln!(out, "{} bids read", self.tree.size())?;
        write_elapsed(out, elapsed)
    }

    fn display_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for bid in &self.tree {
            writeln!(out, "{}", bid)?;
        }
        Ok(())
    }

    fn find<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let start = Instant::now();
        let found = self.tree.search(&self.bid_key);
        let elapsed = start.elapsed();

        match found {
            Some(bid) => writeln!(out, "{}", bid)?,
            None => writeln!(out, "Bid Id {} not found.", self.bid_key)?,
        }

        write_elapsed(out, elapsed)
    }

    fn remove<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.tree.remove(&self.bid_key) {
            Some(bid) => {
                info!(id = %bid.id, "bid removed");
                writeln!(out, "Removed {}", bid)
            }
            None => writeln!(out, "Bid Id {} not found.", self.bid_key),
        }
    }
}

fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Menu:")?;
    writeln!(out, "  1. Load Bids")?;
    writeln!(out, "  2. Display All Bids")?;
    writeln!(out, "  3. Find Bid")?;
    writeln!(out, "  4. Remove Bid")?;
    writeln!(out, "  9. Exit")?;
    write!(out, "Enter choice: ")?;
    out.flush()
}

fn write_elapsed<W: Write>(out: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "time: {} microseconds", elapsed.as_micros())?;
    writeln!(out, "time: {:.6} seconds", elapsed.as_secs_f64())
}

// ============================================================================
// Unit Tests
// ============================================================================
