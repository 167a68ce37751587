use lib::schedule::gateway::HttpGateway;
use lib::schedule::models;
use lib::schedule::run_tool::run;

use clap::Parser;
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::{error, info};
use models::{Args, Config};

#[tokio::main]
async fn main() {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config: Config = Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("SCHEDULE_"))
        .extract()
        .unwrap();
    info!(
        "Read config.json from {}",
        std::path::absolute(&args.config_json_path)
            .unwrap()
            .display()
    );
    let gateway = HttpGateway::new(config).unwrap();

    match run(&gateway, args.command).await {
        Ok(view) => println!("{}", view),
        Err(e) => {
            error!("{}", e);
            println!("Не удалось загрузить расписание");
            std::process::exit(1);
        }
    }
}
