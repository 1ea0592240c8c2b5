use asciigen::cli::{handle_config_action, run, Args, CliError, Command};
use asciigen::playback::PlaybackError;
use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Some(Command::Config { action }) = &args.command {
        handle_config_action(action.clone(), args.config.as_deref());
        return;
    }

    match run(&args) {
        Ok(()) => {}
        Err(CliError::Playback(PlaybackError::Interrupted)) => std::process::exit(130),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
