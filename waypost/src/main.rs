use std::env;
use std::io;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use waypost::location::{EnvLocation, LocationProvider};
use waypost::scanner::{DeviceIdSource, LineScanner};
use waypost::store::FieldStore;
use waypost::submit::Submitter;
use waypost::types::FieldSnapshot;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("post");

    let store = FieldStore::open_default()?;
    let mut fields = store.load();

    match command {
        "post" => {
            // Snapshot first: a second invocation must not see text
            // edited while this request is in flight.
            let snapshot = FieldSnapshot {
                device_id: fields.device_id.clone(),
                latitude: fields.latitude.clone(),
                longitude: fields.longitude.clone(),
            };
            let outcome = Submitter::new().submit(&fields.endpoint_url, &snapshot).await;
            println!("{}", outcome.render());
        }
        "locate" => match EnvLocation::new().last_known() {
            Some(fix) => {
                fields.latitude = fix.latitude.to_string();
                fields.longitude = fix.longitude.to_string();
                println!("{} {}", fields.latitude, fields.longitude);
            }
            None => println!("no last-known fix"),
        },
        "scan" => {
            let stdin = io::stdin();
            match LineScanner::new(stdin.lock()).acquire()? {
                Some(payload) => {
                    fields.device_id = payload;
                    println!("{}", fields.device_id);
                }
                None => println!("no payload scanned"),
            }
        }
        "set" => {
            let (name, value) = match (args.get(2), args.get(3)) {
                (Some(name), Some(value)) => (name.as_str(), value.clone()),
                _ => {
                    eprintln!("usage: waypost set <url|device-id|latitude|longitude> <value>");
                    std::process::exit(2);
                }
            };
            match name {
                "url" => fields.endpoint_url = value,
                "device-id" => fields.device_id = value,
                "latitude" => fields.latitude = value,
                "longitude" => fields.longitude = value,
                other => {
                    eprintln!("unknown field: {other}");
                    std::process::exit(2);
                }
            }
        }
        "show" => {
            println!("url: {}", fields.endpoint_url);
            println!("device-id: {}", fields.device_id);
            println!("latitude: {}", fields.latitude);
            println!("longitude: {}", fields.longitude);
        }
        other => {
            eprintln!("unknown command: {other} (post, locate, scan, set, show)");
            std::process::exit(2);
        }
    }

    store.save(&fields)?;
    Ok(())
}
