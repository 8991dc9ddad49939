use std::env;
use std::path::Path;
use std::process;

use seedtool::diskspace::best_path;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let (short_output, list_file) = match args.as_slice() {
        [file] => (false, file.as_str()),
        [flag, file] if flag == "-s" => (true, file.as_str()),
        _ => {
            eprintln!("usage: max-disk [-s] <path-list-file>");
            process::exit(1);
        }
    };

    match best_path(Path::new(list_file)) {
        Ok(Some(best)) => {
            if short_output {
                println!("{}", best.path.display());
            } else {
                println!(
                    "Path with the largest available capacity: {}",
                    best.path.display()
                );
                println!("Available space: {} bytes", best.free);
            }
        }
        Ok(None) => {
            eprintln!("no usable paths in {list_file}");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{list_file}: {e}");
            process::exit(1);
        }
    }
}
