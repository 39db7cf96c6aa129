//! Relief Coordination API Example
//!
//! This example runs the full record service over an in-memory store:
//! - List routes with filtering, search, sorting, and windowing
//! - Dashboard statistics and field suggestions
//! - Role-gated contact visibility via the x-requester-role header
//!
//! Seed data mimics a flood-response intake sheet, including the messy
//! timestamp shapes real submissions arrive with.

use anyhow::Result;
use reliefdesk::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = ServiceConfig::default();
    let store = InMemoryRecordStore::new();

    seed_records(&store)?;

    println!("🚀 Starting reliefdesk relief coordination API");
    println!("\n🌐 Server will listen on http://{}", config.bind_addr);
    println!("\n📚 Available routes:");
    println!("    GET    /health                    - Service health probe");
    println!("    GET    /needs                     - List relief needs");
    println!("    GET    /needs/stats               - Need dashboard statistics");
    println!("    GET    /needs/export              - Full filtered need set");
    println!("    GET    /needs/suggest             - Distinct field values");
    println!("    GET    /providers                 - List support providers");
    println!("    GET    /providers/stats           - Provider dashboard statistics");
    println!("    GET    /providers/export          - Full filtered provider set");
    println!("    GET    /providers/suggest         - Distinct field values");
    println!("\n📝 Example curl commands:");
    println!("\n   # Urgent unverified needs in Feni, most urgent first");
    println!(
        "   curl 'http://{}/needs?district=Feni&verified=false&sortBy=priority' | jq .",
        config.bind_addr
    );
    println!("\n   # Search across names, districts, tags, and notes");
    println!("   curl 'http://{}/needs?q=dry%20food' | jq .", config.bind_addr);
    println!("\n   # Second page of twenty");
    println!("   curl 'http://{}/needs?skip=20&limit=20' | jq .", config.bind_addr);
    println!("\n   # Full phone numbers require an operator or admin role");
    println!(
        "   curl -H 'x-requester-role: operator' http://{}/needs | jq .",
        config.bind_addr
    );
    println!("\n   # Dashboard statistics, optionally scoped to a district");
    println!(
        "   curl 'http://{}/needs/stats?district=Noakhali' | jq .",
        config.bind_addr
    );
    println!("\n   # District picker values");
    println!(
        "   curl 'http://{}/needs/suggest?field=district' | jq .",
        config.bind_addr
    );

    let state = AppState::new(Arc::new(store), config);
    reliefdesk::server::serve(state).await
}

/// Populate the store with intake-sheet data
fn seed_records(store: &InMemoryRecordStore) -> Result<()> {
    let needs = vec![
        NeedSubmission {
            name: "Rahim Uddin".to_string(),
            phone: vec!["01712345678".to_string()],
            district: "Feni".to_string(),
            address: "Fulgazi upazila, north bank".to_string(),
            requirements: vec!["Dry food".to_string(), "Drinking water".to_string()],
            number_of_people: Some(6),
            priority: Some(5),
            timestamp: Some(RawTimestamp::from("2024-08-22 14:30:00")),
            ..Default::default()
        },
        NeedSubmission {
            name: "Salma Khatun".to_string(),
            phone: vec!["01898765432".to_string(), "01511122233".to_string()],
            district: "Noakhali".to_string(),
            address: "Begumganj, ward 4".to_string(),
            requirements: vec!["Medicine".to_string(), "Baby food".to_string()],
            number_of_people: Some(4),
            priority: Some(4),
            verified: true,
            status: "Linked to supplier".to_string(),
            call_status: CallStatus::Answered,
            notes: "Two infants, needs urgent delivery".to_string(),
            // Day-first composite, as the intake sheet usually writes it
            timestamp: Some(RawTimestamp::from("22-08-2024 09:15:00")),
            ..Default::default()
        },
        NeedSubmission {
            name: "Abdul Karim".to_string(),
            phone: vec!["01677788899".to_string()],
            district: "Cumilla".to_string(),
            address: "Burichang bazar road".to_string(),
            requirements: vec!["Shelter".to_string(), "Dry food".to_string()],
            number_of_people: Some(11),
            timestamp: Some(RawTimestamp::from("23/08/2024")),
            ..Default::default()
        },
        NeedSubmission {
            name: "Fatema Begum".to_string(),
            district: "Lakshmipur".to_string(),
            address: "Ramganj, south colony".to_string(),
            requirements: vec!["Water purification tablets".to_string()],
            number_of_people: Some(3),
            priority: Some(2),
            status: "Received".to_string(),
            call_status: CallStatus::NotAnswered,
            // Exported rows carry epoch millis
            timestamp: Some(RawTimestamp::from(1_724_155_200_000_i64)),
            ..Default::default()
        },
        NeedSubmission {
            name: "Jasim Mia".to_string(),
            phone: vec!["01344455566".to_string()],
            district: "Feni".to_string(),
            address: "Parshuram, east side".to_string(),
            requirements: vec!["Dry food".to_string()],
            number_of_people: Some(8),
            priority: Some(4),
            // Malformed timestamp from a hand-edited row; lands in the
            // Unknown bucket instead of failing intake
            timestamp: Some(RawTimestamp::from("pending")),
            ..Default::default()
        },
    ];

    let providers = vec![
        ProviderSubmission {
            name: "Feni Youth Relief Club".to_string(),
            phone: vec!["01999887766".to_string()],
            district: "Feni".to_string(),
            location: "Feni sadar".to_string(),
            support_types: vec!["Cooked meals".to_string(), "Dry food".to_string()],
            verified: true,
            call_status: CallStatus::Answered,
            availability_notes: "Can serve 200 meals daily".to_string(),
            timestamp: Some(RawTimestamp::from("2024-08-21T08:45:00Z")),
            ..Default::default()
        },
        ProviderSubmission {
            name: "Noakhali Boat Owners Association".to_string(),
            phone: vec!["01811223344".to_string()],
            district: "Noakhali".to_string(),
            location: "Companiganj ghat".to_string(),
            support_types: vec!["Boat rescue".to_string(), "Transport".to_string()],
            status: "Linked with someone".to_string(),
            availability_notes: "Five boats, daylight hours only".to_string(),
            timestamp: Some(RawTimestamp::from("21-08-2024 17:00:00")),
            ..Default::default()
        },
        ProviderSubmission {
            name: "Anonymous donor".to_string(),
            district: "Cumilla".to_string(),
            support_types: vec!["Cash support".to_string()],
            timestamp: Some(RawTimestamp::from(1_724_241_600_000_i64)),
            ..Default::default()
        },
    ];

    let need_count = needs.len();
    let provider_count = providers.len();

    let mut first_need_id = None;
    for submission in needs {
        let record = store.add(submission.into_record())?;
        first_need_id.get_or_insert(record.id);
    }
    for submission in providers {
        store.add(submission.into_record())?;
    }

    // A volunteer confirmed the first need by phone after intake
    if let Some(id) = first_need_id {
        if let Some(mut record) = store.get(&id)? {
            record.call_status = CallStatus::Answered;
            record.verified = true;
            store.update(&id, record)?;
        }
    }

    println!("\n✅ Seed data created:");
    println!("   📦 {} needs, {} providers", need_count, provider_count);

    Ok(())
}
