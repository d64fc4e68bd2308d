use clap::{CommandFactory, Parser};
use std::process;
use texttally::{cli, CountCli, OutputFormatter, OutputMode, TextTallyError, WordCount};

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match CountCli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return cli::report_parse_error(error),
    };

    // clap rejects both flags together; neither-given lands here.
    if !cli.has_mode() {
        let _ = CountCli::command().print_help();
        return 1;
    }

    let app = match WordCount::from_cli(&cli) {
        Ok(app) => app,
        Err(error) => {
            print_startup_error(&error);
            return 1;
        }
    };

    let result = if cli.count {
        app.print_words(&cli.file)
    } else {
        app.print_top(&cli.file)
    };

    match result {
        Ok(()) => 0,
        Err(error) => {
            app.handle_error(&error);
            1
        }
    }
}

fn print_startup_error(error: &TextTallyError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
