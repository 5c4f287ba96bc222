//! Test fixtures
//!
//! This module provides test data fixtures for integration tests.

use chartsvc_core::{Chart, ChartFiles, ChartVersion, Maintainer, Repo, ValueFile};

/// PNG header bytes used as a stand-in icon
pub fn icon_bytes() -> Vec<u8> {
    vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a]
}

/// Create a test chart with a single version
pub fn create_test_chart(namespace: &str, repo: &str, name: &str, version: &str) -> Chart {
    Chart {
        id: Chart::chart_id(repo, name),
        name: name.to_string(),
        repo: Repo::new(repo, namespace),
        description: format!("Test chart: {}", name),
        home: format!("https://{}.example.com", name),
        keywords: vec!["test".to_string()],
        maintainers: vec![Maintainer {
            name: "maintainer".to_string(),
            email: "maintainer@example.com".to_string(),
        }],
        sources: vec![format!("https://github.com/example/{}", name)],
        chart_versions: vec![ChartVersion {
            version: version.to_string(),
            app_version: "1.0".to_string(),
            digest: "abc123".to_string(),
            created: Some(chrono::Utc::now()),
        }],
        ..Default::default()
    }
}

/// Create a test chart with several versions, newest first
pub fn create_test_chart_with_versions(
    namespace: &str,
    repo: &str,
    name: &str,
    versions: &[&str],
) -> Chart {
    let mut chart = create_test_chart(namespace, repo, name, "0.0.0");
    chart.chart_versions = versions
        .iter()
        .map(|v| ChartVersion {
            version: v.to_string(),
            app_version: "1.0".to_string(),
            digest: format!("digest-{}", v),
            created: Some(chrono::Utc::now()),
        })
        .collect();
    chart
}

/// Create a chart carrying icon bytes
pub fn create_test_chart_with_icon(namespace: &str, repo: &str, name: &str) -> Chart {
    let mut chart = create_test_chart(namespace, repo, name, "1.0.0");
    chart.raw_icon = icon_bytes();
    chart.icon_content_type = "image/png".to_string();
    chart
}

/// Create a full file bundle for a chart version
pub fn create_test_files(chart_id: &str, version: &str) -> ChartFiles {
    ChartFiles {
        id: ChartFiles::files_id(chart_id, version),
        readme: format!("# {}\n\nA test chart.", chart_id),
        values: String::new(),
        value_files: vec![ValueFile {
            name: "values.yaml".to_string(),
            content: "replicaCount: 1".to_string(),
        }],
        schema: r#"{"properties": {}}"#.to_string(),
    }
}

/// Create an empty file bundle (exists in the store, carries nothing)
pub fn create_empty_files(chart_id: &str, version: &str) -> ChartFiles {
    ChartFiles {
        id: ChartFiles::files_id(chart_id, version),
        ..Default::default()
    }
}
