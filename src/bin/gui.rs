use std::process::ExitCode;

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();
    let program = argv.first().map_or("gui", String::as_str);

    let config = match mandelbrot_explorer::config_from_command_line(&argv) {
        Ok(config) => config,
        Err(err) => return mandelbrot_explorer::report_startup_error(program, &err),
    };

    match mandelbrot_explorer::RunGuiCommand::new(config).execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
