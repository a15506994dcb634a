use mpl_id_scraper::MplClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = MplClient::from_env();

    let week = std::env::args().nth(1).map(|arg| {
        arg.parse::<u32>()
            .unwrap_or_else(|_| panic!("week must be a number, got {arg:?}"))
    });

    let json = match week {
        Some(week) => match client.get_schedule_week(week).await.unwrap() {
            Some(schedule) => serde_json::to_string_pretty(&schedule).unwrap(),
            None => {
                eprintln!("Week {week} not found");
                std::process::exit(1);
            }
        },
        None => serde_json::to_string_pretty(&client.get_schedule().await.unwrap()).unwrap(),
    };
    println!("{json}");
}
