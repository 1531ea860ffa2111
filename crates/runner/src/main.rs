use cfm_runner::cli::{self, Args};
use cfm_runner::{
    Engine, FanoutSink, JsonLinesSink, LogSink, RunReport, RunnerError, UniformJitter,
};
use clap::Parser;
use std::io::{self, BufWriter};

fn init_logging(args: &Args) {
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_timestamp_millis()
        .init();
}

fn run(args: &Args) -> Result<RunReport, RunnerError> {
    let config = args.to_config()?;
    let params = config.derive()?;
    cli::log_parameters(&config, &params);

    let mut sink = FanoutSink::new().with(LogSink::new());
    if args.json {
        sink = sink.with(JsonLinesSink::new(BufWriter::new(io::stdout())));
    }

    let mut engine = Engine::new(params, UniformJitter::new());
    Ok(engine.run(&mut sink))
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
