use std::{
    io,
    process,
};

use blctl::{
    Args,
    Options,
};

use clap::Parser;

fn main() {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        // help and version go to stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    let result = Options::try_from(args)
        .and_then(|options| blctl::run(&options, &mut io::stdout().lock()));

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(e.exit_code());
    }
}
