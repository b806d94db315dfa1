use crate::{common, read};

use aws_sdk_dynamodb::{Client, error, operation};

/// scan operation
#[derive(Clone, Debug, Default, PartialEq)]
struct ScanInput {
    read_operation: read::common::ReadInput,
}

/// Scan operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use todos_access::read;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let scan = read::scan::Scan {
///     read_args: read::common::ReadArgs {
///         table_name: "todos".to_string(),
///         ..Default::default()
///     },
/// };
/// let records = scan.send_all(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scan {
    /// Read arguments (table name, start key, limit, etc.).
    pub read_args: read::common::ReadArgs,
}

impl From<Scan> for ScanInput {
    fn from(scan: Scan) -> Self {
        Self {
            read_operation: scan.read_args.into(),
        }
    }
}

impl Scan {
    /// Scan every page, starting at `exclusive_start_key` when one is set.
    pub async fn send_all(
        self,
        client: &Client,
    ) -> Result<Vec<common::Record>, error::SdkError<operation::scan::ScanError>> {
        let scan: ScanInput = self.into();
        let mut paginator =
            read::common::apply_read_operation!(client.scan(), scan.read_operation)
                .into_paginator()
                .send();
        read::common::collect_pages!(paginator)
    }

    /// Scan a single page.
    pub async fn send_page(
        self,
        client: &Client,
    ) -> Result<read::common::RecordPage, error::SdkError<operation::scan::ScanError>> {
        let scan: ScanInput = self.into();
        let output = read::common::apply_read_operation!(client.scan(), scan.read_operation)
            .send()
            .await?;
        let page = read::common::RecordPage {
            records: output.items.unwrap_or_default(),
            last_evaluated_key: output.last_evaluated_key,
        };
        Ok(page)
    }
}
