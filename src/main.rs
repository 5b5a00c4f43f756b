use clap::Parser;
use imgtopwd::cli::Args;
use imgtopwd::{derive_password, Config};

fn run(args: Args) -> imgtopwd::Result<String> {
    let config = Config::from_args(args)?;
    derive_password(&config)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(args) {
        Ok(password) => println!("Generated password: \n{}", password),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
