//! Inspect and edit a cooking profile
//!
//! Run with: cargo run --example profile_inspect -- <profile-hex> [duration] [schedule] [taste]

use chunmi_cooker::{CookerProfile, ProfileOptions, Result};

fn parse_arg<T: std::str::FromStr>(arg: Option<&String>) -> Option<T> {
    arg.and_then(|value| value.parse().ok())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("debug").init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(profile_hex) = args.first() else {
        eprintln!("Usage: profile_inspect <profile-hex> [duration] [schedule] [taste]");
        std::process::exit(2);
    };

    println!("Cooking Profile");
    println!("===============\n");

    let original = CookerProfile::parse(profile_hex)?;
    let attributes = original.attributes();

    println!("Device type:     {:#04x}", original.device_type());
    println!("Sub-type:        {:#04x}", original.sub_type());
    println!("Menu:            {} (index {})", attributes.menu_id, original.menu_index());
    println!(
        "Cook time:       {} min ({}..={})",
        attributes.duration, attributes.cook_time_min, attributes.cook_time_max
    );
    println!(
        "Schedule:        {} min ({})",
        attributes.schedule_duration,
        if attributes.schedule_enabled { "enabled" } else { "disabled" }
    );
    println!("Keep warm:       {}", attributes.auto_keep_warm);
    println!("Rice:            {}", attributes.rice_id);
    println!("Taste:           {}", attributes.taste);
    println!();
    println!("Capabilities:");
    println!("  duration       {}", attributes.can_set_duration);
    println!("  schedule       {}", attributes.can_schedule);
    println!("  keep warm      {}", attributes.can_set_auto_keep_warm);
    println!("  rice           {}", attributes.can_choose_rice);
    println!("  taste          {}", attributes.can_configure_taste);

    let options = ProfileOptions {
        duration: parse_arg(args.get(1)),
        schedule: parse_arg(args.get(2)),
        auto_keep_warm: None,
        taste: parse_arg(args.get(3)),
    };

    if options != ProfileOptions::default() {
        let mut edited = CookerProfile::with_options(profile_hex, options)?;
        println!();
        println!("Edited profile:  {}", edited.to_hex());
        println!("Duration:        {} min", edited.duration());
        println!("Schedule:        {} min", edited.schedule_duration());
        println!("Taste:           {}", edited.taste());
    }

    Ok(())
}
