//! Build script for embedded migrations.
//!
//! `sqlx::migrate!` embeds data/sql/sqlite at compile time; without this hint
//! cargo does not notice a newly added migration file.

fn main() {
    println!("cargo:rerun-if-changed=data/sql/sqlite");
}
