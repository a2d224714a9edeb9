use crate::infra::PortalServices;
use chrono::{Local, NaiveDate};
use clap::Args;
use rust_decimal::Decimal;
use water_portal::config::SimulationConfig;
use water_portal::error::AppError;
use water_portal::portal::applications::{ConnectionApplication, DocumentSlot};
use water_portal::portal::assistant::AssistantAction;
use water_portal::portal::billing::{compute_bill, ConnectionType, MeterMode};
use water_portal::portal::directory::{PropertyField, PropertyForm};
use water_portal::portal::grievances::{GrievancePriority, GrievanceTab, NewGrievance};
use water_portal::portal::readings::ReadingSubmission;
use water_portal::portal::uploads::UploadDescriptor;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Wait out the configured backend latencies instead of running instantly
    #[arg(long)]
    pub(crate) realtime: bool,
    /// Override the submission date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let simulation = if args.realtime {
        SimulationConfig::default()
    } else {
        SimulationConfig::instant()
    };
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let services = PortalServices::from_config(&simulation)?;

    println!("Water portal demo");
    demo_billing(&services)?;
    let property = demo_property_lookup(&services).await;
    demo_application(&services, property).await;
    demo_tracking(&services);
    demo_grievances(&services, today).await;
    demo_readings(&services, today).await;
    demo_assistant(&services).await;
    Ok(())
}

fn demo_billing(services: &PortalServices) -> Result<(), AppError> {
    let schedule = services.billing.schedule();
    println!("\nBill calculator");
    let metered = compute_bill(
        schedule,
        ConnectionType::Residential,
        MeterMode::Metered,
        Some(Decimal::from(100)),
        Some(Decimal::from(150)),
    )?;
    println!(
        "- Residential metered 100 -> 150: {} units x {} = {}",
        metered.consumed_units,
        metered.rate,
        metered.display_total()
    );

    for connection_type in ConnectionType::ALL {
        let flat = compute_bill(schedule, connection_type, MeterMode::NonMetered, None, None)?;
        println!(
            "- {} non-metered: {} (fixed monthly)",
            connection_type,
            flat.display_total()
        );
    }

    match compute_bill(
        schedule,
        ConnectionType::Commercial,
        MeterMode::Metered,
        Some(Decimal::from(150)),
        Some(Decimal::from(100)),
    ) {
        Ok(_) => println!("- Reversed readings unexpectedly accepted"),
        Err(err) => println!("- Reversed readings rejected: {err}"),
    }
    Ok(())
}

async fn demo_property_lookup(services: &PortalServices) -> PropertyForm {
    println!("\nProperty directory");
    let mut form = PropertyForm::default();
    if let Err(err) = form.set(PropertyField::OwnerName, "Typed by hand") {
        println!("- Form rejected manual entry: {err}");
    }

    match services.lookup.lookup("UPIC-404").await {
        Ok(record) => form.apply_lookup(Some(&record)),
        Err(err) => {
            form.apply_lookup(None);
            println!("- UPIC-404: {err} (owner still '{}')", form.owner_name);
        }
    }

    match services.lookup.autofill("p12345").await {
        Ok(autofill) => {
            form.apply_lookup(Some(&autofill.property));
            println!(
                "- p12345: {} at {} (zone {}, ward {})",
                form.owner_name, form.address, form.zone, form.ward
            );
            if let Err(err) = form.set(PropertyField::Ward, "9") {
                println!("- Editing ward refused: {err}");
            }
        }
        Err(err) => println!("- p12345 lookup failed: {err}"),
    }
    form
}

async fn demo_application(services: &PortalServices, property: PropertyForm) {
    println!("\nConnection application");
    let mut application = ConnectionApplication {
        property,
        connection_category: "Domestic".to_string(),
        connection_type: "Meter".to_string(),
        connection_size: "15mm".to_string(),
        declaration_accepted: true,
        ..ConnectionApplication::default()
    };
    application.documents.insert(
        DocumentSlot::Aadhaar,
        UploadDescriptor {
            file_name: "aadhaar.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            size_bytes: 512 * 1024,
        },
    );

    match services.applications.submit(application).await {
        Ok(receipt) => {
            println!("- {}", receipt.message);
            let pending = receipt
                .pending_documents
                .iter()
                .map(|slot| slot.label())
                .collect::<Vec<_>>()
                .join(", ");
            println!("- Documents still to upload: {pending}");
        }
        Err(err) => println!("- Application rejected: {err}"),
    }
}

fn demo_tracking(services: &PortalServices) {
    println!("\nStatus tracking");
    for id in ["APP-2025-001", "WNC-2025-180652", "GRV-2025-023", "XYZ-001"] {
        match services.tracking.track(id) {
            Ok(record) => println!(
                "- {}: {} | {} | last update {}",
                record.tracking_id,
                record.kind.label(),
                record.status_label,
                record.last_update
            ),
            Err(err) => println!("- {id}: {err}"),
        }
    }
}

async fn demo_grievances(services: &PortalServices, today: NaiveDate) {
    println!("\nGrievances");
    let listing = services.grievances.list("", GrievanceTab::All);
    println!(
        "- {} total | {} open | {} resolved | {} rejected",
        listing.counts.all, listing.counts.open, listing.counts.resolved, listing.counts.rejected
    );
    for grievance in &listing.grievances {
        println!(
            "  - {} [{}] {}",
            grievance.id,
            grievance.status.label(),
            grievance.subject
        );
    }

    let complaint = NewGrievance {
        connection_id: Some("CON-2025-001".to_string()),
        category: "Water Supply".to_string(),
        subject: "No supply since morning".to_string(),
        description: "Taps are dry across the building".to_string(),
        priority: Some(GrievancePriority::High),
    };
    match services.grievances.submit(complaint, today).await {
        Ok(receipt) => println!("- {}", receipt.message),
        Err(err) => println!("- Grievance rejected: {err}"),
    }
}

async fn demo_readings(services: &PortalServices, today: NaiveDate) {
    println!("\nMeter reading");
    let desk = &services.readings;
    println!(
        "- {} (consumer {}, meter {}) | quarter {} | previous reading {}",
        desk.profile().name,
        desk.profile().consumer_id,
        desk.profile().meter_number,
        desk.quarter(),
        desk.previous_reading()
    );

    let photo = UploadDescriptor {
        file_name: "meter.jpg".to_string(),
        content_type: "image/jpeg".to_string(),
        size_bytes: 1_200_000,
    };
    let detected = match desk.read_photo(&photo).await {
        Ok(detected) => {
            println!(
                "- Photo read: {} ({}% confidence)",
                detected.reading, detected.confidence_percent
            );
            detected.reading
        }
        Err(err) => {
            println!("- Photo rejected: {err}");
            return;
        }
    };

    let submission = ReadingSubmission {
        current_reading: Some(detected.to_string()),
        reading_date: Some(today),
        attachment: Some(photo),
    };
    match desk.submit(&submission) {
        Ok(receipt) => {
            let estimate = receipt
                .estimate
                .as_ref()
                .map(|bill| bill.display_total())
                .unwrap_or_else(|| "n/a".to_string());
            println!(
                "- Submitted {} units for the quarter, estimated charge {estimate}",
                receipt.consumed_units
            );
        }
        Err(err) => println!("- Reading rejected: {err}"),
    }
}

async fn demo_assistant(services: &PortalServices) {
    println!("\nAssistant");
    let greeting = services.assistant.greeting();
    println!("- Options: {}", greeting.options.join(" | "));

    for text in ["How do I apply?", "sample ids please", "hello"] {
        if let Some(reply) = services.assistant.send(text).await {
            println!("- \"{text}\" -> {}", reply.options.join(" | "));
        }
    }

    for option in ["Track GRV-2025-023", "Start Application (Login Required)"] {
        let reply = services.assistant.choose(option).await;
        let action = match reply.action {
            AssistantAction::None => "stay in chat".to_string(),
            AssistantAction::NavigateToLogin => "open login page".to_string(),
            AssistantAction::OpenTracking { prefill: Some(id) } => {
                format!("open tracking for {id}")
            }
            AssistantAction::OpenTracking { prefill: None } => "open tracking".to_string(),
        };
        println!("- \"{option}\" -> {action}");
    }
}
