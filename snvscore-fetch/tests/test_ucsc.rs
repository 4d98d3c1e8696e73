//! Integration tests for the UCSC client against an in-process fake of the
//! UCSC REST API.
//!
//! The fake answers `/getData/sequence` with a synthetic sequence whose
//! behaviour depends on the requested chromosome, and `/list/chromosomes`
//! with a small assembly.

use std::collections::HashMap;

use axum::Router;
use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use pretty_assertions::assert_eq;
use serde_json::json;

use snvscore_core::errors::FetchError;
use snvscore_fetch::{GenomeProvider, UcscClient, fetch_window, primary_chromosomes};

/// UCSC separates query parameters with `;`
fn parse_query(raw: Option<String>) -> HashMap<String, String> {
    raw.unwrap_or_default()
        .split([';', '&'])
        .filter_map(|kv| kv.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

async fn sequence_handler(RawQuery(raw): RawQuery) -> impl IntoResponse {
    let params = parse_query(raw);
    let start: usize = params["start"].parse().unwrap();
    let end: usize = params["end"].parse().unwrap();
    let len = end - start;

    match params["chrom"].as_str() {
        "chrBoom" => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))),
        "chrBad" => (
            StatusCode::OK,
            Json(json!({"error": "chrom chrBad not found in genome hg38"})),
        ),
        "chrEmpty" => (StatusCode::OK, Json(json!({"genome": "hg38"}))),
        "chrShort" => (StatusCode::OK, Json(json!({"dna": "acgt".repeat(len / 8)}))),
        _ => {
            let dna: String = "acgt".chars().cycle().take(len).collect();
            (StatusCode::OK, Json(json!({"dna": dna})))
        }
    }
}

async fn chromosomes_handler(RawQuery(raw): RawQuery) -> impl IntoResponse {
    let params = parse_query(raw);
    if params.get("genome").map(|g| g.as_str()) != Some("hg38") {
        return Json(json!({"error": "unknown genome"}));
    }
    Json(json!({
        "genome": "hg38",
        "chromosomes": {
            "chr2": 242193529,
            "chr1": 248956422,
            "chrX": 156040895,
            "chrUn_KI270302v1": 2274,
            "chr17_KI270857v1_alt": 2877074
        }
    }))
}

async fn genomes_handler() -> impl IntoResponse {
    Json(json!({
        "ucscGenomes": {
            "hg38": {
                "organism": "Human",
                "description": "Dec. 2013 (GRCh38/hg38)",
                "sourceName": "GRCh38 Genome Reference Consortium Human Reference 38",
                "active": 1
            },
            "hg19": {
                "organism": "Human",
                "description": "Feb. 2009 (GRCh37/hg19)",
                "active": 1
            },
            "mm39": {
                "organism": "Mouse",
                "description": "Jun. 2020 (GRCm39/mm39)",
                "active": 1
            },
            "oldAsm": {
                "active": 0
            }
        }
    }))
}

/// Start the fake on an ephemeral port. The runtime must outlive the test.
fn spawn_fake_ucsc() -> (tokio::runtime::Runtime, String) {
    let app = Router::new()
        .route("/getData/sequence", get(sequence_handler))
        .route("/list/chromosomes", get(chromosomes_handler))
        .route("/list/ucscGenomes", get(genomes_handler));

    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("Failed to build runtime");
    let listener = rt
        .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    rt.spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (rt, format!("http://{}", addr))
}

#[test]
fn test_fetch_sequence() {
    let (_rt, url) = spawn_fake_ucsc();
    let client = UcscClient::new(Some(url), None);

    let seq = client.fetch("hg38", "chr17", 10, 18).unwrap();
    assert_eq!(seq, "ACGTACGT");
}

#[test]
fn test_fetch_window_end_to_end() {
    let (_rt, url) = spawn_fake_ucsc();
    let client = UcscClient::new(Some(url), None);

    let position = 43119628;
    let window = fetch_window(&client, position, "hg38", "chr17", 8192).unwrap();

    assert_eq!(window.len(), 8192);
    assert_eq!(window.start(), 43115531);
    let offset = window.offset_of(position).unwrap();
    assert_eq!(offset as u64, position - 1 - window.start());
    assert!(offset < window.len());
}

#[test]
fn test_short_sequence_is_not_fatal() {
    let (_rt, url) = spawn_fake_ucsc();
    let client = UcscClient::new(Some(url), None);

    let window = fetch_window(&client, 1000, "hg38", "chrShort", 64).unwrap();
    assert_eq!(window.len(), 32);
}

#[test]
fn test_provider_error_field() {
    let (_rt, url) = spawn_fake_ucsc();
    let client = UcscClient::new(Some(url), None);

    match client.fetch("hg38", "chrBad", 0, 10) {
        Err(FetchError::Provider(msg)) => assert!(msg.contains("chrBad")),
        other => panic!("expected provider error, got {:?}", other),
    }
}

#[test]
fn test_missing_dna_field() {
    let (_rt, url) = spawn_fake_ucsc();
    let client = UcscClient::new(Some(url), None);

    assert!(matches!(
        client.fetch("hg38", "chrEmpty", 0, 10),
        Err(FetchError::MissingSequence)
    ));
}

#[test]
fn test_non_success_status() {
    let (_rt, url) = spawn_fake_ucsc();
    let client = UcscClient::new(Some(url), None);

    match client.fetch("hg38", "chrBoom", 0, 10) {
        Err(FetchError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[test]
fn test_unreachable_provider() {
    // nothing listens on port 9 of localhost
    let client = UcscClient::new(Some("http://127.0.0.1:9".to_string()), None);
    assert!(matches!(
        client.fetch("hg38", "chr1", 0, 10),
        Err(FetchError::Transport(_))
    ));
}

#[test]
fn test_list_primary_chromosomes() {
    let (_rt, url) = spawn_fake_ucsc();
    let client = UcscClient::new(Some(url), None);

    let chroms = primary_chromosomes(client.chromosomes("hg38").unwrap());
    let names: Vec<&str> = chroms.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["chr1", "chr2", "chrX"]);
    assert_eq!(chroms[0].size, 248956422);
}

#[test]
fn test_list_chromosomes_unknown_genome() {
    let (_rt, url) = spawn_fake_ucsc();
    let client = UcscClient::new(Some(url), None);

    assert!(matches!(
        client.chromosomes("nope"),
        Err(FetchError::Provider(_))
    ));
}

#[test]
fn test_list_genomes() {
    let (_rt, url) = spawn_fake_ucsc();
    let client = UcscClient::new(Some(url), None);

    let genomes = client.genomes().unwrap();
    let ids: Vec<&str> = genomes.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["hg19", "hg38", "mm39", "oldAsm"]);

    let hg19 = &genomes[0];
    assert_eq!(hg19.organism, "Human");
    assert_eq!(hg19.name, "Feb. 2009 (GRCh37/hg19)");
    assert_eq!(hg19.source_name, "hg19");
    assert!(hg19.active);

    let old = &genomes[3];
    assert_eq!(old.organism, "other");
    assert!(!old.active);
}
