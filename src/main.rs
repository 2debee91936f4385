//! unirule: keep AI editor rules in one place
//!
//! Scaffolds a `.ruler` directory and converts its rules into the native
//! format of Trae, Cursor, or GitHub Copilot.

use anyhow::Result;

fn main() -> Result<()> {
    unirule::cli::run()
}
