use cityweather::{day_cards, CatalogSource, CityWeather, IconResolver, LookupOutcome};
use std::env;

#[tokio::main]
async fn main() {
    let wanted = env::args().nth(1).unwrap_or_else(|| "Paris".to_string());
    let client = match CityWeather::builder()
        .catalog(CatalogSource::Path("data/city_coordinates.csv".into()))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return;
        }
    };

    let cities = match client.load_catalog().await {
        Ok(cities) => cities,
        Err(e) => {
            eprintln!("{} ({})", e.user_message(), e);
            return;
        }
    };
    let Some(city) = cities.iter().find(|c| c.name.eq_ignore_ascii_case(&wanted)) else {
        eprintln!("Please select a city.");
        return;
    };

    println!("Loading forecast for {}...", city.label());
    match client.lookup(city).await {
        Ok(LookupOutcome::Current(days)) => {
            for card in day_cards(&days, &IconResolver::default()) {
                println!(
                    "{}  {:<10} {:<22} {:<20} {}",
                    card.title, card.condition, card.temperature, card.wind, card.icon_path
                );
            }
        }
        Ok(LookupOutcome::Superseded) => {}
        Err(e) => eprintln!("{} ({})", e.user_message(), e),
    }
}
