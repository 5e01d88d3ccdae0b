use std::path::Path;

use clap::Parser;

use egress::app::{read_queries, AppConfig, AppError, EgressApp};

#[derive(Parser)]
#[command(
    name = "egress",
    about = "evacuation-route scoring and selection engine"
)]
struct CliArgs {
    /// TOML configuration file with calibration overrides and route listings.
    /// when omitted, the shipped calibration is used with no routes loaded.
    #[arg(short, long)]
    config_file: Option<String>,
    /// JSON file containing an array of queries to run
    #[arg(short, long)]
    query_file: String,
}

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    log::info!("starting egress at {}", chrono::Local::now().to_rfc3339());
    match run(&args) {
        Ok(()) => {}
        Err(e) => log::error!("{e}"),
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let config = match &args.config_file {
        Some(path) => AppConfig::from_file(Path::new(path))?,
        None => AppConfig::default(),
    };
    let app = EgressApp::new(config)?;
    let queries = read_queries(Path::new(&args.query_file))?;
    let rows = app.run(&queries);
    println!("{}", serde_json::to_string_pretty(&rows).unwrap_or_default());
    Ok(())
}

#[cfg(test)]
mod test {
    use egress::app::{AppConfig, EgressApp, EgressQuery};
    use serde_json::json;

    /// end-to-end: configure routes, run every query kind in one batch
    #[test]
    fn test_e2e_query_batch() {
        let config: AppConfig = toml::from_str(
            r#"
            [[routes]]
            name = "ring road north"
            from_location = "delhi"
            to_location = "relief camp 7"
            distance_km = 14.0
            estimated_time_minutes = 45
            capacity = 2000
            current_usage = 400
            difficulty_level = "easy"
            current_status = "open"

            [[routes]]
            name = "yamuna bank route"
            from_location = "delhi"
            to_location = "relief camp 7"
            distance_km = 11.0
            estimated_time_minutes = 50
            capacity = 1000
            current_usage = 950
            difficulty_level = "hard"
            current_status = "open"
            "#,
        )
        .expect("test invariant failed: config does not parse");
        let app = EgressApp::new(config).expect("test invariant failed");

        let queries: Vec<EgressQuery> = serde_json::from_value(json!([
            {
                "type": "severity",
                "incident": {
                    "incident_type": "flood",
                    "description": "widespread damage along the embankment",
                    "location": "delhi"
                }
            },
            {
                "type": "resources",
                "incident": {
                    "incident_type": "flood",
                    "description": "",
                    "location": "delhi"
                },
                "severity": 8
            },
            {
                "type": "evacuation_route",
                "from_location": "delhi",
                "to_location": "relief camp 7"
            },
            {
                "type": "direct_route",
                "start": [28.6139, 77.2090],
                "end": [19.0760, 72.8777]
            }
        ]))
        .expect("test invariant failed: queries do not parse");

        let rows = app.run(&queries);
        assert_eq!(rows.len(), 4);
        for (idx, row) in rows.iter().enumerate() {
            assert!(
                row.get("error").is_none(),
                "row {idx} has error: {}",
                serde_json::to_string_pretty(row).unwrap_or_default()
            );
        }

        // flood base 7 + "widespread" (2) + "damage" (1) + delhi (1), clamped
        assert_eq!(rows[0]["severity"], json!(10));
        // flood shelters at severity 8: ceil(8 * 4)
        assert_eq!(rows[1]["requirements"]["shelters"], json!(32));
        // ring road wins on balanced score despite the longer distance:
        // its utilization and difficulty penalties are far smaller
        assert_eq!(rows[2]["name"], json!("ring road north"));
        assert_eq!(rows[2]["optimization_factors"]["route_capacity"], json!("low"));
        // straight-line delhi -> mumbai
        let km = rows[3]["distance_km"].as_f64().expect("test failed");
        assert!((1150.0..=1170.0).contains(&km));
    }
}
