//! Bulk operations: strictly sequential, one request in flight at a time.
//! A per-item failure is reported and the loop moves on; nothing is rolled
//! back.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::api::upload::{destination_name, ensure_source_file};
use crate::api::StorageClient;

/// Outcome of one item in a bulk run, labeled by file name or entry id
#[derive(Debug)]
pub enum BulkOutcome {
    Completed(String),
    Skipped(String),
    Failed(String),
}

pub async fn upload(
    parent_id: &str,
    files: &[PathBuf],
    token_override: Option<&str>,
) -> Result<()> {
    let client = super::authed_client(token_override)?;
    let outcomes = upload_all(&client, parent_id, files).await;
    print_summary("Uploaded", &outcomes);
    Ok(())
}

pub async fn delete(ids: &[String], token_override: Option<&str>) -> Result<()> {
    let client = super::authed_client(token_override)?;
    let outcomes = delete_all(&client, ids).await;
    print_summary("Deleted", &outcomes);
    Ok(())
}

async fn upload_all(
    client: &StorageClient,
    parent_id: &str,
    files: &[PathBuf],
) -> Vec<BulkOutcome> {
    let mut outcomes = Vec::with_capacity(files.len());

    for file in files {
        println!("  {} {}", "→".cyan(), file.display());

        if ensure_source_file(file).is_err() {
            println!("    {}: no such file", "skip".yellow());
            outcomes.push(BulkOutcome::Skipped(file.display().to_string()));
            continue;
        }

        let name = destination_name(file);
        match client.upload_to_directory(file, parent_id, &name).await {
            Ok(response) => {
                println!("    {} {} ({})", "✓".green(), name, response.status);
                response.print();
                outcomes.push(BulkOutcome::Completed(name));
            }
            Err(e) => {
                println!("    {}: {}", "error".red(), e);
                outcomes.push(BulkOutcome::Failed(name));
            }
        }
    }

    outcomes
}

async fn delete_all(client: &StorageClient, ids: &[String]) -> Vec<BulkOutcome> {
    let mut outcomes = Vec::with_capacity(ids.len());

    for id in ids {
        println!("  {} {}", "→".cyan(), id);
        match client.delete_entry(id).await {
            Ok(response) => {
                println!("    {} deleted ({})", "✓".green(), response.status);
                response.print();
                outcomes.push(BulkOutcome::Completed(id.clone()));
            }
            Err(e) => {
                println!("    {}: {}", "error".red(), e);
                outcomes.push(BulkOutcome::Failed(id.clone()));
            }
        }
    }

    outcomes
}

fn summarize(outcomes: &[BulkOutcome]) -> (usize, usize, usize) {
    let mut completed = 0;
    let mut skipped = 0;
    let mut failed = 0;
    for outcome in outcomes {
        match outcome {
            BulkOutcome::Completed(_) => completed += 1,
            BulkOutcome::Skipped(_) => skipped += 1,
            BulkOutcome::Failed(_) => failed += 1,
        }
    }
    (completed, skipped, failed)
}

fn print_summary(verb: &str, outcomes: &[BulkOutcome]) {
    let (completed, skipped, failed) = summarize(outcomes);
    println!();
    println!("{}", "Summary:".bold());
    println!(
        "  {}: {} | Skipped: {} | Errors: {}",
        verb, completed, skipped, failed
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn offline_client() -> StorageClient {
        // No request is ever issued against these hosts in the tests below.
        StorageClient::with_bases(
            Some("tok".to_string()),
            "https://stashbox.invalid/api",
            "https://stashbox.invalid",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_missing_files_skipped_without_requests() {
        let client = offline_client();
        let files = vec![PathBuf::from("/no/such/a.txt"), PathBuf::from("/no/such/b.txt")];

        let outcomes = upload_all(&client, "dir1", &files).await;

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes
            .iter()
            .all(|o| matches!(o, BulkOutcome::Skipped(_))));
    }

    #[tokio::test]
    async fn test_outcomes_keep_input_order() {
        let client = offline_client();
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("real.txt");
        std::fs::write(&existing, b"data").unwrap();

        // The existing file fails at the transport (unroutable host) while
        // the missing one is skipped; both stay in input order.
        let files = vec![existing.clone(), PathBuf::from("/no/such/c.txt")];
        let outcomes = upload_all(&client, "dir1", &files).await;

        assert_eq!(outcomes.len(), 2);
        assert!(matches!(outcomes[0], BulkOutcome::Failed(_)));
        assert!(matches!(outcomes[1], BulkOutcome::Skipped(_)));
    }

    #[test]
    fn test_summarize_counts() {
        let outcomes = vec![
            BulkOutcome::Completed("a".into()),
            BulkOutcome::Skipped("b".into()),
            BulkOutcome::Failed("c".into()),
            BulkOutcome::Completed("d".into()),
        ];
        assert_eq!(summarize(&outcomes), (2, 1, 1));
    }

    #[test]
    fn test_source_check_matches_skip_policy() {
        assert!(ensure_source_file(Path::new("/no/such/file")).is_err());
    }
}
