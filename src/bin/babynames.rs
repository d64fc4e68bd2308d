use clap::Parser;
use std::process;
use texttally::{cli, BabyNames, NamesCli, OutputFormatter, OutputMode, TextTallyError};

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match NamesCli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return cli::report_parse_error(error),
    };

    let app = match BabyNames::from_cli(&cli) {
        Ok(app) => app,
        Err(error) => {
            print_startup_error(&error);
            return 1;
        }
    };

    // Files are processed strictly in order; the first failure is terminal
    // and nothing is emitted for the failing file.
    for file in &cli.files {
        if let Err(error) = app.process_file(file, cli.summaryfile) {
            app.handle_error(&error);
            return 1;
        }
    }

    0
}

fn print_startup_error(error: &TextTallyError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
