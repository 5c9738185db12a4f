use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eindex_client::api::ApiClient;
use eindex_client::config::KioskConfig;
use eindex_client::scanner::ScanBuffer;
use eindex_client::session::KioskSession;
use eindex_core::types::DbId;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eindex_client=info,eindex_kiosk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = KioskConfig::from_env();
    tracing::info!(api_url = %config.api_url, subject_id = ?config.subject_id, "Loaded kiosk configuration");

    let client = ApiClient::new(config.api_url.clone());

    let Some(subject_id) = config.subject_id else {
        list_subjects(&client).await;
        tracing::error!("KIOSK_SUBJECT_ID must be set to record attendance");
        std::process::exit(1);
    };

    let mut session = KioskSession::new();
    match session.refresh_roster(&client).await {
        Ok(roster) => tracing::info!(students = roster.len(), "Roster loaded"),
        Err(err) => tracing::warn!(error = %err, "Could not load roster"),
    }

    // --- Scan loop ---
    tracing::info!(subject_id, "Waiting for scans");
    let mut scanner = ScanBuffer::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received SIGINT (Ctrl-C), stopping kiosk");
                break;
            }
        };

        let line = match line {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                tracing::error!(error = %err, "Failed to read scanner input");
                break;
            }
        };

        let tags = scanner.push_str(&line);
        // `lines()` strips the terminator; replay it so short input is dropped.
        scanner.push('\n');
        for tag in tags {
            scan(&client, &mut session, &tag, subject_id).await;
        }
    }
}

async fn scan(client: &ApiClient, session: &mut KioskSession, tag: &str, subject_id: DbId) {
    match session.handle_tag(client, tag).await {
        Ok(student) => tracing::info!(
            name = %student.name,
            course = %student.course,
            year = student.year,
            section = %student.section,
            "Student identified"
        ),
        Err(err) if err.is_not_found() => {
            tracing::warn!(tag, "Student not found");
            return;
        }
        Err(err) => {
            tracing::error!(tag, error = %err, "Error fetching student details");
            return;
        }
    }

    match session.check_in(client, subject_id).await {
        Ok(attendance) => tracing::info!(
            id = attendance.id,
            date_time = %attendance.date_time,
            "Attendance recorded successfully"
        ),
        Err(err) => tracing::error!(error = %err, "Error recording attendance"),
    }
    session.clear();
}

async fn list_subjects(client: &ApiClient) {
    match client.list_subjects().await {
        Ok(envelope) => {
            for subject in envelope.payload.subjects {
                tracing::info!(id = subject.id, code = %subject.code, teacher = %subject.teacher, "Subject");
            }
        }
        Err(err) => tracing::error!(error = %err, "Could not list subjects"),
    }
}
