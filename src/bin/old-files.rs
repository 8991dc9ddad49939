use std::env;
use std::path::Path;
use std::process;

use seedtool::filelist::{collect_sorted, format_timestamp};

fn main() {
    let root = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("usage: old-files <directory>");
        process::exit(1);
    });

    for entry in collect_sorted(Path::new(&root)) {
        println!(
            "{} {}",
            format_timestamp(entry.modified),
            entry.path.display()
        );
    }
}
