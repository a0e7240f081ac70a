//! ls command - List every object in one bucket
//!
//! Streams records page by page in human mode so memory stays bounded for
//! large buckets; the JSON mode collects the full report into a single
//! document.

use clap::Args;
use futures::TryStreamExt;
use serde::Serialize;
use sgls_core::{BucketLister, Connection, Error, Listing, ObjectRecord};
use sgls_s3::S3Client;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// 50-dash rule between object records
const RECORD_SEPARATOR: &str = "--------------------------------------------------";

/// List all objects in a bucket and report its request ID
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Bucket to list
    pub bucket: String,

    /// StorageGRID endpoint URL (e.g. `https://s3.grid.example.com`)
    #[arg(long, env = "SGLS_ENDPOINT")]
    pub endpoint: String,

    /// S3 access key ID
    #[arg(long, env = "SGLS_ACCESS_KEY")]
    pub access_key: String,

    /// S3 secret access key
    #[arg(long, env = "SGLS_SECRET_KEY", hide_env_values = true)]
    pub secret_key: String,

    /// Signing region
    #[arg(long, default_value = "us-east-1")]
    pub region: String,

    /// Skip TLS certificate verification (explicit security downgrade)
    #[arg(long)]
    pub insecure: bool,
}

/// JSON output for the ls command
#[derive(Serialize)]
struct LsOutput {
    bucket: String,
    empty: bool,
    objects: Vec<ObjectRecord>,
    request_id: String,
}

/// Execute the ls command
pub async fn execute(args: LsArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let conn = Connection::new(&args.endpoint, &args.access_key, &args.secret_key)
        .with_region(&args.region)
        .with_verify_tls(!args.insecure);

    let client = match S3Client::connect(&conn).await {
        Ok(c) => c,
        Err(e) => return fail(&formatter, &e),
    };
    let lister = BucketLister::new(client);

    if formatter.is_json() {
        execute_json(&lister, &args.bucket, &formatter).await
    } else {
        execute_human(&lister, &args.bucket, &formatter).await
    }
}

async fn execute_json(
    lister: &BucketLister<S3Client>,
    bucket: &str,
    formatter: &Formatter,
) -> ExitCode {
    let report = match lister.list_bucket(bucket).await {
        Ok(r) => r,
        Err(e) => return fail(formatter, &e),
    };

    let (empty, objects) = match report.listing {
        Listing::Empty => (true, Vec::new()),
        Listing::Objects(objects) => (false, objects),
    };

    formatter.json(&LsOutput {
        bucket: bucket.to_string(),
        empty,
        objects,
        request_id: report.metadata.request_id,
    });
    ExitCode::Success
}

async fn execute_human(
    lister: &BucketLister<S3Client>,
    bucket: &str,
    formatter: &Formatter,
) -> ExitCode {
    formatter.println(&format!(
        "\nListing contents of bucket: {}\n",
        formatter.style_name(bucket)
    ));

    let mut seen = 0usize;
    {
        let mut records = Box::pin(lister.records(bucket));
        loop {
            match records.try_next().await {
                Ok(Some(record)) => {
                    print_record(formatter, &record);
                    seen += 1;
                }
                Ok(None) => break,
                Err(e) => return fail(formatter, &e),
            }
        }
    }

    if seen == 0 {
        formatter.println("Bucket is empty");
    }

    match lister.probe_metadata(bucket).await {
        Ok(metadata) => {
            formatter.println("\nBucket Details:");
            formatter.println(&format!(
                "{}: {}",
                formatter.style_key("Request ID"),
                metadata.request_id
            ));
            ExitCode::Success
        }
        Err(e) => fail(formatter, &e),
    }
}

/// Emit one record as the four metadata fields plus the separator rule
fn print_record(formatter: &Formatter, record: &ObjectRecord) {
    formatter.println(&format!(
        "{}: {}",
        formatter.style_key("Key"),
        record.key
    ));
    formatter.println(&format!(
        "{}: {} bytes",
        formatter.style_key("Size"),
        record.size_bytes
    ));
    let modified = record
        .last_modified
        .map(|ts| ts.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    formatter.println(&format!(
        "{}: {}",
        formatter.style_key("Last Modified"),
        formatter.style_date(&modified)
    ));
    formatter.println(&format!(
        "{}: {}",
        formatter.style_key("Storage Class"),
        record.storage_class
    ));
    formatter.println(RECORD_SEPARATOR);
}

fn fail(formatter: &Formatter, err: &Error) -> ExitCode {
    formatter.error(&err.to_string());
    ExitCode::from(err)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: LsArgs,
    }

    #[test]
    fn test_separator_is_fifty_dashes() {
        assert_eq!(RECORD_SEPARATOR.len(), 50);
        assert!(RECORD_SEPARATOR.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_args_defaults() {
        let cli = TestCli::try_parse_from([
            "sgls",
            "reports-2024",
            "--endpoint",
            "https://s3.grid.example.com",
            "--access-key",
            "ak",
            "--secret-key",
            "sk",
        ])
        .unwrap();

        assert_eq!(cli.args.bucket, "reports-2024");
        assert_eq!(cli.args.region, "us-east-1");
        assert!(!cli.args.insecure);
    }

    #[test]
    fn test_args_require_endpoint() {
        // Guard the env fallback so an exported SGLS_ENDPOINT cannot
        // satisfy the missing flag.
        let result = TestCli::try_parse_from([
            "sgls",
            "reports-2024",
            "--access-key",
            "ak",
            "--secret-key",
            "sk",
        ]);
        if std::env::var_os("SGLS_ENDPOINT").is_none() {
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_insecure_flag() {
        let cli = TestCli::try_parse_from([
            "sgls",
            "b",
            "--endpoint",
            "https://s3.grid.example.com",
            "--access-key",
            "ak",
            "--secret-key",
            "sk",
            "--insecure",
        ])
        .unwrap();
        assert!(cli.args.insecure);
    }
}
