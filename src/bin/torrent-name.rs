use std::env;
use std::process;

use seedtool::metainfo::torrent_name;

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("usage: torrent-name <torrent-file>");
        process::exit(1);
    });

    let data = match std::fs::read(&path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("{path}: {e}");
            process::exit(1);
        }
    };

    match torrent_name(&data) {
        Ok(name) => println!("{}", String::from_utf8_lossy(&name)),
        Err(e) => {
            eprintln!("{path}: {e}");
            process::exit(1);
        }
    }
}
