//! Rockset Sample Application
//!
//! Demonstrates the rockset-api client end to end: get-or-create a workspace
//! and a collection, ingest one customer record, then query it back by email.
//!
//! Requires ROCKSET_API_KEY in the environment.

use anyhow::{bail, Result};
use rockset_api::{
    Client, CreateCollectionRequest, CreateWorkspaceRequest, DocumentStatus, QueryParameter,
    QueryRequest,
};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

mod config;
mod ensure;

use config::Config;
use ensure::{get_or_create, GetOrCreate};

/// The sample record written to and read back from the collection
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Customer {
    email: String,
    first_name: String,
    last_name: String,
}

const CUSTOMER_EMAIL: &str = "jake.net@gmail.com";

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rockset_sample=info,rockset_api=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    // Missing credentials abort here, before any client exists
    let config = Config::from_env()?;

    tracing::info!("rockset sample starting");
    tracing::info!("  API server: {}", config.api_server);
    tracing::info!("  Workspace: {}", config.workspace);
    tracing::info!("  Collection: {}", config.collection);

    let client = Client::new(&config.api_server, &config.api_key)?;

    ensure_workspace(&client, &config.workspace).await?;
    ensure_collection(&client, &config.workspace, &config.collection).await?;
    insert_customer(&client, &config.workspace, &config.collection).await?;
    query_customers(&client, &config.workspace, &config.collection).await?;

    Ok(())
}

async fn ensure_workspace(client: &Client, workspace: &str) -> Result<()> {
    let result = get_or_create(client.get_workspace(workspace), async {
        println!("Creating workspace {workspace}");
        client
            .create_workspace(&CreateWorkspaceRequest {
                name: workspace.to_string(),
                description: Some("dotnet test workspace".to_string()),
            })
            .await
    })
    .await?;

    match result {
        GetOrCreate::Existing(ws) => println!("Workspace {} exists", ws.name),
        GetOrCreate::Created(ws) => println!("Created workspace {}", ws.name),
    }
    Ok(())
}

async fn ensure_collection(client: &Client, workspace: &str, collection: &str) -> Result<()> {
    let result = get_or_create(client.get_collection(workspace, collection), async {
        println!("Creating collection {collection}");
        client
            .create_collection(
                workspace,
                &CreateCollectionRequest {
                    name: collection.to_string(),
                    description: Some("dotnet test collection".to_string()),
                },
            )
            .await
    })
    .await?;

    match result {
        GetOrCreate::Existing(coll) => println!("Collection {} exists", coll.name),
        GetOrCreate::Created(coll) => println!("Created collection {}", coll.name),
    }
    Ok(())
}

async fn insert_customer(client: &Client, workspace: &str, collection: &str) -> Result<()> {
    let customer = Customer {
        email: CUSTOMER_EMAIL.to_string(),
        first_name: "Jake".to_string(),
        last_name: "Scott".to_string(),
    };

    let statuses = client
        .add_documents(workspace, collection, std::slice::from_ref(&customer))
        .await?;
    let status = single_status(&statuses)?;

    println!("Added document {} with status {}", status.id, status.status);
    Ok(())
}

/// One submitted document must yield exactly one status entry
fn single_status(statuses: &[DocumentStatus]) -> Result<&DocumentStatus> {
    match statuses {
        [status] => Ok(status),
        other => bail!(
            "expected exactly one document status for one submitted document, got {}",
            other.len()
        ),
    }
}

async fn query_customers(client: &Client, workspace: &str, collection: &str) -> Result<()> {
    // Identifiers can't be bound as parameters, only the filter value
    let sql = format!(r#"SELECT * FROM "{workspace}"."{collection}" c WHERE c.email = :email"#);
    let request =
        QueryRequest::new(sql).with_param(QueryParameter::string("email", CUSTOMER_EMAIL));

    let response = client.query(&request).await?;

    for row in response.results {
        let customer: Customer = serde_json::from_value(row)?;
        println!("Customer: {}", customer.email);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rockset_api::IngestStatus;
    use serde_json::json;

    fn added(id: &str) -> DocumentStatus {
        DocumentStatus {
            id: id.to_string(),
            status: IngestStatus::Added,
            error: None,
        }
    }

    #[test]
    fn test_single_status_accepts_exactly_one_entry() {
        let statuses = vec![added("3e8b-4c2a")];
        let status = single_status(&statuses).unwrap();
        assert_eq!(status.id, "3e8b-4c2a");
        assert_eq!(status.status, IngestStatus::Added);
    }

    #[test]
    fn test_single_status_rejects_empty_response() {
        let err = single_status(&[]).unwrap_err();
        assert!(err.to_string().contains("got 0"));
    }

    #[test]
    fn test_single_status_rejects_extra_entries() {
        let statuses = vec![added("a"), added("b")];
        let err = single_status(&statuses).unwrap_err();
        assert!(err.to_string().contains("got 2"));
    }

    #[test]
    fn test_customer_deserializes_from_query_row() {
        // Query rows carry server-assigned fields alongside the record
        let row = json!({
            "_id": "3e8b-4c2a",
            "_event_time": "2024-05-01T12:00:00Z",
            "email": "jake.net@gmail.com",
            "first_name": "Jake",
            "last_name": "Scott"
        });

        let customer: Customer = serde_json::from_value(row).unwrap();
        assert_eq!(customer.email, "jake.net@gmail.com");
        assert_eq!(customer.first_name, "Jake");
        assert_eq!(customer.last_name, "Scott");
    }

    #[test]
    fn test_customer_serializes_flat_record() {
        let customer = Customer {
            email: "jake.net@gmail.com".to_string(),
            first_name: "Jake".to_string(),
            last_name: "Scott".to_string(),
        };

        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(
            value,
            json!({
                "email": "jake.net@gmail.com",
                "first_name": "Jake",
                "last_name": "Scott"
            })
        );
    }
}
