use crate::infra::parse_reading;
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::sync::Arc;
use water_portal::error::AppError;
use water_portal::portal::billing::{compute_bill, ConnectionType, MeterMode, RateSchedule};
use water_portal::portal::directory::{
    LookupError, PropertyLookupService, StaticPropertyDirectory,
};
use water_portal::portal::grievances::sample_grievances;
use water_portal::portal::tracking::TrackingCatalog;
use water_portal::portal::uploads::{UploadDescriptor, UploadKind, UploadPolicy};

#[derive(Args, Debug)]
pub(crate) struct BillArgs {
    /// Residential (Domestic), Commercial, or Industrial
    #[arg(long, value_parser = parse_connection_type)]
    pub(crate) connection_type: ConnectionType,
    /// Meter or Non-Meter
    #[arg(long, default_value = "meter", value_parser = parse_meter_mode)]
    pub(crate) mode: MeterMode,
    /// Previous meter reading (metered only)
    #[arg(long, value_parser = parse_reading)]
    pub(crate) previous: Option<Decimal>,
    /// Current meter reading (metered only)
    #[arg(long, value_parser = parse_reading)]
    pub(crate) current: Option<Decimal>,
}

#[derive(Args, Debug)]
pub(crate) struct TrackArgs {
    /// Tracking ID such as APP-2025-001, WNC-2025-180652, or GRV-2025-023
    pub(crate) tracking_id: String,
}

#[derive(Args, Debug)]
pub(crate) struct LookupArgs {
    /// Property number, consumer ID, or mobile number
    pub(crate) query: String,
    /// Optional directory export replacing the built-in sample table
    #[arg(long)]
    pub(crate) directory_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct UploadCheckArgs {
    /// File to check; its MIME type is guessed from the extension
    pub(crate) path: PathBuf,
    /// document (2 MiB limit) or meter-photo (5 MiB limit)
    #[arg(long, default_value = "document", value_parser = parse_upload_kind)]
    pub(crate) kind: UploadKind,
}

fn parse_connection_type(raw: &str) -> Result<ConnectionType, String> {
    ConnectionType::parse(raw)
        .ok_or_else(|| format!("'{raw}' is not residential, commercial, or industrial"))
}

fn parse_meter_mode(raw: &str) -> Result<MeterMode, String> {
    MeterMode::parse(raw).ok_or_else(|| format!("'{raw}' is not meter or non-meter"))
}

fn parse_upload_kind(raw: &str) -> Result<UploadKind, String> {
    UploadKind::parse(raw).ok_or_else(|| format!("'{raw}' is not document or meter-photo"))
}

pub(crate) fn run_bill(args: BillArgs) -> Result<(), AppError> {
    let schedule = RateSchedule::standard();
    let bill = compute_bill(
        &schedule,
        args.connection_type,
        args.mode,
        args.previous,
        args.current,
    )?;

    println!("Water bill estimate");
    println!(
        "Connection: {} | Mode: {}",
        bill.connection_type,
        bill.meter_mode.label()
    );
    match bill.meter_mode {
        MeterMode::Metered => {
            println!("Consumed units: {}", bill.consumed_units);
            println!("Rate per unit: {}", bill.rate);
        }
        MeterMode::NonMetered => println!("Fixed monthly rate: {}", bill.rate),
    }
    println!("Total amount: {}", bill.display_total());
    Ok(())
}

pub(crate) fn run_track(args: TrackArgs) -> Result<(), AppError> {
    let catalog = TrackingCatalog::standard(&sample_grievances());
    let record = catalog.track(&args.tracking_id)?;

    println!("{} ({})", record.tracking_id, record.kind.label());
    println!("Status: {}", record.status_label);
    println!("{}", record.title);
    println!(
        "Submitted {} | Last update {}",
        record.submitted_on, record.last_update
    );
    println!("Timeline");
    for event in &record.timeline {
        println!("  {} - {}", event.date, event.message);
    }
    Ok(())
}

pub(crate) async fn run_lookup(args: LookupArgs) -> Result<(), AppError> {
    let directory = match args.directory_csv {
        Some(path) => StaticPropertyDirectory::from_path(path, std::time::Duration::ZERO)?,
        None => StaticPropertyDirectory::built_in(std::time::Duration::ZERO),
    };
    let service = PropertyLookupService::new(Arc::new(directory));

    match service.autofill(&args.query).await {
        Ok(autofill) => {
            let property = autofill.property;
            println!("Property {} ({})", property.property_number, property.owner_name);
            println!("Consumer ID: {}", property.consumer_id);
            println!("Mobile: {} | Email: {}", property.mobile_number, property.email);
            println!("Zone {} / Ward {}", property.zone, property.ward);
            println!("Address: {}", property.address);
            println!(
                "Locked fields: {}",
                autofill
                    .locked_fields
                    .iter()
                    .map(|field| format!("{field:?}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            Ok(())
        }
        Err(err @ LookupError::NotFound { .. }) => {
            println!("{err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

pub(crate) fn run_upload_check(args: UploadCheckArgs) -> Result<(), AppError> {
    let descriptor = describe_file(&args.path)?;
    let policy = UploadPolicy::for_kind(args.kind);

    match policy.check(&descriptor) {
        Ok(()) => println!(
            "Accepted: {} ({}, {} bytes, limit {} bytes)",
            descriptor.file_name,
            descriptor.content_type,
            descriptor.size_bytes,
            policy.max_bytes()
        ),
        Err(rejection) => println!("Rejected: {rejection}"),
    }
    Ok(())
}

pub(crate) fn describe_file(path: &std::path::Path) -> Result<UploadDescriptor, AppError> {
    let metadata = std::fs::metadata(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(UploadDescriptor {
        file_name,
        content_type: mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string(),
        size_bytes: metadata.len(),
    })
}
