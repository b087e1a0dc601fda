//! Sample listings for development and demos.

use chrono::{Duration, Utc};
use sl_protocol::{Category, Product, SellerProfile};

fn seller(name: &str, phone: &str, location: &str, is_verified: bool) -> SellerProfile {
    SellerProfile {
        name: name.to_string(),
        phone: Some(phone.to_string()),
        location: Some(location.to_string()),
        is_verified,
    }
}

/// A small catalog spread over categories, price points and areas.
/// Listing dates are relative to now, one day apart.
pub fn products() -> Vec<Product> {
    let now = Utc::now();
    let ladipo = seller("Ladipo Auto Hub", "+2348030000001", "Ladipo, Mushin, Lagos", true);
    let ikeja = seller("Ikeja Motor Spares", "+2348030000002", "Ikeja, Lagos", false);
    let abuja = seller("Capital Parts", "+2348030000003", "Wuse, Abuja", true);
    let ph = seller("Garden City Autos", "+2348030000004", "Port Harcourt, Rivers", false);

    let listings = [
        ("Toyota Corolla Brake Pads", 18_500.0, Category::BrakeSystem, &ladipo),
        ("Honda Accord Brake Disc", 42_000.0, Category::BrakeSystem, &ikeja),
        ("Bosch Spark Plugs (set of 4)", 12_000.0, Category::EngineParts, &abuja),
        ("Toyota Camry Alternator", 85_000.0, Category::ElectricalLighting, &ladipo),
        ("Lexus RX350 Headlight", 120_000.0, Category::ElectricalLighting, &ph),
        ("Michelin 205/55 R16 Tyre", 65_000.0, Category::TiresWheels, &abuja),
        ("Shock Absorber (front pair)", 55_000.0, Category::SuspensionSteering, &ikeja),
        ("Corolla Radiator", 48_000.0, Category::CoolingSystem, &ph),
        ("Camry Front Bumper", 70_000.0, Category::BodyParts, &ladipo),
        ("Clutch Kit", 95_000.0, Category::Transmission, &ikeja),
        ("Exhaust Muffler", 35_000.0, Category::ExhaustSystem, &abuja),
        ("Leather Seat Covers", 28_000.0, Category::InteriorAccessories, &ph),
    ];

    listings
        .into_iter()
        .enumerate()
        .map(|(age, (name, price, category, seller))| {
            Product::new(name, price, seller.clone())
                .with_category(category)
                .listed_at(now - Duration::days(age as i64))
        })
        .collect()
}
