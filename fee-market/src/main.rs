use {
    clap::{crate_description, crate_name, crate_version, App, Arg, ArgMatches},
    eip7002_fee_market::{
        config::DEFAULT_OUTPUT_PATH,
        vectors::generate_document,
        writer::{check_document, print_summary, write_document},
        FeeError, VectorConfig,
    },
    log::*,
    std::{path::Path, process::exit},
};

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .value_name("PATH")
                .takes_value(true)
                .default_value(DEFAULT_OUTPUT_PATH)
                .help("File to write the test vectors to; its directory must exist"),
        )
        .arg(
            Arg::with_name("check")
                .long("check")
                .takes_value(false)
                .help("Verify the existing file matches a fresh generation instead of writing it"),
        )
}

fn run(matches: &ArgMatches) -> Result<(), FeeError> {
    let output = Path::new(matches.value_of("output").unwrap_or(DEFAULT_OUTPUT_PATH));
    let config = VectorConfig::default();
    let doc = generate_document(&config)?;

    if matches.is_present("check") {
        return check_document(output, &doc);
    }

    write_document(output, &doc)?;
    print_summary(&doc);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = app().get_matches();
    if let Err(err) = run(&matches) {
        error!("{err}");
        exit(1);
    }
}
