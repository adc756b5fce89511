use anyhow::Result;
use fishcast_schemas::{snapshot::EnvironmentalSnapshot, species::Species};

/// Prints a human-readable summary of one snapshot.
pub fn print_summary(name: &str, snapshot: &EnvironmentalSnapshot) {
    println!("\n--- Snapshot for '{}' at {} ---", name, snapshot.metadata.calculated_at);
    println!(
        "Weather: {:.1} C, wind {:.1} km/h, clouds {:.0}%, pressure {:.1} hPa (trend {:+.1})",
        snapshot.weather.air_temperature_c,
        snapshot.weather.wind_speed_kmh,
        snapshot.weather.cloud_cover_percent,
        snapshot.weather.pressure_hpa,
        snapshot.weather.pressure_trend_3h_hpa,
    );
    println!(
        "Water:   {:.1} C, {:.1} NTU, {:.1} mg/L O2, waves {:.1} cm",
        snapshot.hydro.water_temperature_c,
        snapshot.hydro.turbidity_ntu,
        snapshot.hydro.dissolved_oxygen_mg_l,
        snapshot.hydro.wave_height_cm,
    );
    if let Some(flow) = snapshot.hydro.flow_m3_s {
        println!("Flow:    {:.2} m3/s (gauge)", flow);
    }
    println!("Scores:");
    for sp in Species::ALL {
        let score = snapshot.scores.get(&sp).copied().unwrap_or(0);
        println!("  {:<8} {:>3}  {}", sp.id(), score, bar(score));
    }
}

/// Serializes the snapshot as pretty JSON for machine consumers.
pub fn print_json(snapshot: &EnvironmentalSnapshot) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(snapshot)?);
    Ok(())
}

fn bar(score: u8) -> String {
    "#".repeat((score / 5) as usize)
}
