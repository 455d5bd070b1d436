use std::env;
use std::io::{BufWriter, Write};
use std::process;

use redict::args;
use redict::files::FilePair;
use redict::filter::filter_words;

fn print_help() {
    println!("Usage: <input_file> <output_file> <word_length>");
}

fn main() {
    let args = match args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            // A bare count mismatch gets the usage line only.
            if !matches!(err, args::Error::WrongArgCount) {
                eprintln!("{err}");
            }
            if err.shows_usage() {
                print_help();
            }
            process::exit(1);
        }
    };

    let FilePair { input, output } = match FilePair::open(&args.input_path, &args.output_path) {
        Ok(pair) => pair,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let mut writer = BufWriter::new(output);
    let result = filter_words(input, &mut writer, args.word_len).and_then(|count| {
        writer.flush()?;
        Ok(count)
    });
    match result {
        Ok(count) => {
            println!("Wrote {count} words of length {}", args.word_len);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
