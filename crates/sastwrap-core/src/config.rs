//! Resolved scan configuration.
//!
//! Built exactly once from the command line and treated as immutable for the
//! rest of the run. Field values use the downstream reporting CLI's wire
//! spellings, which is why several enums carry an `Unknown` sentinel: that
//! value means "not set" and is dropped during flag mapping.

use clap::ValueEnum;
use serde::Serialize;

use crate::scanner::SarifGenerator;

/// Sentinel spelling shared by all enum domains that support "not set".
pub const UNKNOWN: &str = "Unknown";

/// Minimum severity of log lines written by this process, and the switch
/// that turns on verbose mode for the scanner binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[value(rename_all = "UPPER")]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Fail,
}

impl LogLevel {
    pub fn as_arg(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Fail => "FAIL",
        }
    }
}

/// Build-result policy forwarded to the reporting CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[value(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OnFailure {
    ContinueOnFailure,
    FailTheBuild,
}

impl OnFailure {
    pub fn as_arg(self) -> &'static str {
        match self {
            OnFailure::ContinueOnFailure => "continue_on_failure",
            OnFailure::FailTheBuild => "fail_the_build",
        }
    }
}

/// Where the contributing-developer identity was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[value(rename_all = "verbatim")]
pub enum ContributingDeveloperSource {
    Unknown,
    CommandLine,
    EnvironmentVariable,
    GitConfig,
}

impl ContributingDeveloperSource {
    pub fn as_arg(self) -> &'static str {
        match self {
            ContributingDeveloperSource::Unknown => UNKNOWN,
            ContributingDeveloperSource::CommandLine => "CommandLine",
            ContributingDeveloperSource::EnvironmentVariable => "EnvironmentVariable",
            ContributingDeveloperSource::GitConfig => "GitConfig",
        }
    }
}

/// Attribution export format requested from the reporting CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[value(rename_all = "verbatim")]
pub enum ExportFormat {
    Unknown,
    CsafVex,
    CycloneDx,
    Sarif,
    Spdx,
    SoosIssues,
    SoosLicenses,
    SoosPackages,
    SoosVulnerabilities,
}

impl ExportFormat {
    pub fn as_arg(self) -> &'static str {
        match self {
            ExportFormat::Unknown => UNKNOWN,
            ExportFormat::CsafVex => "CsafVex",
            ExportFormat::CycloneDx => "CycloneDx",
            ExportFormat::Sarif => "Sarif",
            ExportFormat::Spdx => "Spdx",
            ExportFormat::SoosIssues => "SoosIssues",
            ExportFormat::SoosLicenses => "SoosLicenses",
            ExportFormat::SoosPackages => "SoosPackages",
            ExportFormat::SoosVulnerabilities => "SoosVulnerabilities",
        }
    }
}

/// File type of the attribution export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[value(rename_all = "verbatim")]
pub enum ExportFileType {
    Unknown,
    Csv,
    Html,
    Json,
    Text,
    Xml,
}

impl ExportFileType {
    pub fn as_arg(self) -> &'static str {
        match self {
            ExportFileType::Unknown => UNKNOWN,
            ExportFileType::Csv => "Csv",
            ExportFileType::Html => "Html",
            ExportFileType::Json => "Json",
            ExportFileType::Text => "Text",
            ExportFileType::Xml => "Xml",
        }
    }
}

/// Integration identity of this entrypoint. Fixed per tool, not user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IntegrationName {
    SoosSast,
}

impl IntegrationName {
    pub fn as_arg(self) -> &'static str {
        "SoosSast"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IntegrationType {
    Plugin,
}

impl IntegrationType {
    pub fn as_arg(self) -> &'static str {
        "Plugin"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScanType {
    Sast,
}

impl ScanType {
    pub fn as_arg(self) -> &'static str {
        "sast"
    }
}

/// Everything a single run needs, resolved and defaulted.
///
/// Serialization exists solely for the obfuscated debug dump; the field names
/// below match the downstream CLI's flag spellings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanConfiguration {
    pub api_key: String,
    #[serde(rename = "apiURL")]
    pub api_url: String,
    pub app_version: Option<String>,
    pub branch_name: Option<String>,
    #[serde(rename = "branchURI")]
    pub branch_uri: Option<String>,
    #[serde(rename = "buildURI")]
    pub build_uri: Option<String>,
    pub build_version: Option<String>,
    pub client_id: String,
    pub commit_hash: Option<String>,
    pub contributing_developer_id: Option<String>,
    pub contributing_developer_source: ContributingDeveloperSource,
    pub contributing_developer_source_name: Option<String>,
    pub directories_to_exclude: Vec<String>,
    pub export_file_type: ExportFileType,
    pub export_format: ExportFormat,
    pub files_to_exclude: Vec<String>,
    pub integration_name: IntegrationName,
    pub integration_type: IntegrationType,
    pub log_level: LogLevel,
    pub on_failure: OnFailure,
    pub operating_environment: Option<String>,
    pub project_name: String,
    pub scan_type: ScanType,
    pub script_version: String,
    pub sarif_generator: SarifGenerator,
    pub other_options: Option<String>,
}

impl ScanConfiguration {
    /// Copy with the API key masked, safe to write to the log stream.
    pub fn redacted(&self) -> ScanConfiguration {
        ScanConfiguration {
            api_key: "*********".to_string(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> ScanConfiguration {
        ScanConfiguration {
            api_key: "secret-key".into(),
            api_url: "https://api.soos.io/api/".into(),
            app_version: None,
            branch_name: None,
            branch_uri: None,
            build_uri: None,
            build_version: None,
            client_id: "client".into(),
            commit_hash: None,
            contributing_developer_id: None,
            contributing_developer_source: ContributingDeveloperSource::Unknown,
            contributing_developer_source_name: None,
            directories_to_exclude: vec![],
            export_file_type: ExportFileType::Unknown,
            export_format: ExportFormat::Unknown,
            files_to_exclude: vec![],
            integration_name: IntegrationName::SoosSast,
            integration_type: IntegrationType::Plugin,
            log_level: LogLevel::Info,
            on_failure: OnFailure::ContinueOnFailure,
            operating_environment: None,
            project_name: "demo".into(),
            scan_type: ScanType::Sast,
            script_version: "0.1.0".into(),
            sarif_generator: SarifGenerator::Semgrep,
            other_options: None,
        }
    }

    #[test]
    fn redacted_masks_only_the_api_key() {
        let config = minimal();
        let redacted = config.redacted();

        assert_eq!(redacted.api_key, "*********");
        assert_eq!(redacted.client_id, config.client_id);
        assert_eq!(redacted.project_name, config.project_name);
    }

    #[test]
    fn debug_dump_uses_wire_field_names() {
        let json = serde_json::to_value(minimal().redacted()).expect("config serializes");

        assert_eq!(json["apiKey"], "*********");
        assert!(json.get("apiURL").is_some());
        assert!(json.get("branchURI").is_some());
        assert_eq!(json["logLevel"], "INFO");
        assert_eq!(json["sarifGenerator"], "Semgrep");
    }

    #[test]
    fn wire_spellings_are_stable() {
        assert_eq!(LogLevel::Debug.as_arg(), "DEBUG");
        assert_eq!(OnFailure::FailTheBuild.as_arg(), "fail_the_build");
        assert_eq!(ContributingDeveloperSource::Unknown.as_arg(), UNKNOWN);
        assert_eq!(IntegrationName::SoosSast.as_arg(), "SoosSast");
        assert_eq!(ScanType::Sast.as_arg(), "sast");
    }
}
