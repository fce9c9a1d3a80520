use unitconv::registry::{self, DomainKind};
use unitconv::{distance, temperature, Convert, Domain, Quantity, Speed, Temperature};

fn main() {
    let from = Speed::try_guess_unit("kph").expect("kph is a speed alias");
    let mps = Speed::convert(100.0, from, Speed::MetreSecond);
    println!("100 {from} = {mps:.5} {}", Speed::MetreSecond);

    let q: Quantity<Temperature> = "98.6 °F".parse().expect("valid temperature");
    println!("{q} = {:.2}", q.to(Temperature::Celsius));
    println!(
        "1e40 K clamps to {:e} K",
        temperature::clamp_temperature(1e40, Temperature::Kelvin)
    );

    println!(
        "60 arc-seconds at 45° latitude = {:.3} m",
        distance::arc_seconds_to_metres(60.0, 45.0)
    );

    for (domain, value, from, to) in [
        ("distance", 1.0, "mi", "m"),
        ("time", 90.0, "m", "h"),
        ("mass", 1.0, "kt", "t"),
        ("volume", 1.0, "not-a-real-unit", "l"),
    ] {
        let domain: DomainKind = domain.parse().expect("known domain");
        match registry::convert_symbols(domain, value, from, to) {
            Ok(out) => println!("{domain}: {value} {from} = {out} {to}"),
            Err(err) => println!("{domain}: {err}"),
        }
    }
}
