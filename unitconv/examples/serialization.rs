use serde::{Deserialize, Serialize};
use unitconv::{Quantity, Speed, Temperature};

#[derive(Debug, Serialize, Deserialize)]
struct Observation {
    station: String,
    air: Quantity<Temperature>,
    wind: Quantity<Speed>,
}

fn main() -> Result<(), serde_json::Error> {
    let input = r#"{
        "station": "harbour",
        "air": { "value": 64.4, "unit": "fahrenheit" },
        "wind": { "value": 12.0, "unit": "knots" }
    }"#;

    let obs: Observation = serde_json::from_str(input)?;
    let normalized = Observation {
        station: obs.station,
        air: obs.air.to(Temperature::Celsius),
        wind: obs.wind.to(Speed::MetreSecond),
    };

    println!("{}", serde_json::to_string_pretty(&normalized)?);
    Ok(())
}
