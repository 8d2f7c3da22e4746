use clap::Parser;

use sastwrap_core::config::{
    ContributingDeveloperSource, ExportFileType, ExportFormat, IntegrationName, IntegrationType,
    LogLevel, OnFailure, ScanConfiguration, ScanType,
};
use sastwrap_core::scanner::SarifGenerator;

/// Flag names use the reporting CLI's camelCase spellings so this entrypoint
/// is a drop-in for the scripts that already call it.
#[derive(Debug, Parser)]
#[command(
    name = "sastwrap",
    version,
    about = "Container entrypoint that runs a SARIF generator and forwards results to the SOOS SAST reporting CLI"
)]
pub struct Args {
    /// SOOS API key
    #[arg(long = "apiKey", env = "SOOS_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// SOOS API base URL
    #[arg(long = "apiURL", default_value = "https://api.soos.io/api/")]
    pub api_url: String,

    /// Version of the application being scanned
    #[arg(long = "appVersion")]
    pub app_version: Option<String>,

    /// Branch being scanned
    #[arg(long = "branchName")]
    pub branch_name: Option<String>,

    /// URI of the branch being scanned
    #[arg(long = "branchURI")]
    pub branch_uri: Option<String>,

    /// URI of the CI build
    #[arg(long = "buildURI")]
    pub build_uri: Option<String>,

    /// Version of the CI build
    #[arg(long = "buildVersion")]
    pub build_version: Option<String>,

    /// SOOS client id
    #[arg(long = "clientId", env = "SOOS_API_CLIENT", hide_env_values = true)]
    pub client_id: String,

    /// Commit hash being scanned
    #[arg(long = "commitHash")]
    pub commit_hash: Option<String>,

    /// Identity of the contributing developer
    #[arg(long = "contributingDeveloperId")]
    pub contributing_developer_id: Option<String>,

    /// Where the contributing-developer identity came from
    #[arg(
        long = "contributingDeveloperSource",
        value_enum,
        default_value = "Unknown"
    )]
    pub contributing_developer_source: ContributingDeveloperSource,

    /// Name associated with the contributing-developer source
    #[arg(long = "contributingDeveloperSourceName")]
    pub contributing_developer_source_name: Option<String>,

    /// Comma-separated directory patterns excluded from reporting
    #[arg(
        long = "directoriesToExclude",
        value_delimiter = ',',
        value_parser = trimmed
    )]
    pub directories_to_exclude: Vec<String>,

    /// File type of the attribution export
    #[arg(long = "exportFileType", value_enum, default_value = "Unknown")]
    pub export_file_type: ExportFileType,

    /// Format of the attribution export
    #[arg(long = "exportFormat", value_enum, default_value = "Unknown")]
    pub export_format: ExportFormat,

    /// Comma-separated file patterns excluded from reporting
    #[arg(
        long = "filesToExclude",
        value_delimiter = ',',
        value_parser = trimmed
    )]
    pub files_to_exclude: Vec<String>,

    /// Minimum severity of log lines written by this process
    #[arg(long = "logLevel", value_enum, default_value = "INFO")]
    pub log_level: LogLevel,

    /// Whether a failed scan fails the build
    #[arg(
        long = "onFailure",
        value_enum,
        default_value = "continue_on_failure"
    )]
    pub on_failure: OnFailure,

    /// Operating environment reported with the scan
    #[arg(long = "operatingEnvironment", default_value = std::env::consts::OS)]
    pub operating_environment: String,

    /// Project name to report under
    #[arg(long = "projectName")]
    pub project_name: String,

    /// Generator (or file source) for the SARIF input. Defaults to Semgrep
    #[arg(long = "sarifGenerator", value_enum, default_value = "Semgrep")]
    pub sarif_generator: SarifGenerator,

    /// Other command line arguments sent directly to the SARIF generator
    #[arg(long = "otherOptions")]
    pub other_options: Option<String>,
}

fn trimmed(value: &str) -> Result<String, std::convert::Infallible> {
    Ok(value.trim().to_string())
}

impl Args {
    /// Freeze the parsed surface into the immutable run configuration,
    /// stamping the fixed integration identity of this entrypoint.
    pub fn into_config(self) -> ScanConfiguration {
        ScanConfiguration {
            api_key: self.api_key,
            api_url: self.api_url,
            app_version: self.app_version,
            branch_name: self.branch_name,
            branch_uri: self.branch_uri,
            build_uri: self.build_uri,
            build_version: self.build_version,
            client_id: self.client_id,
            commit_hash: self.commit_hash,
            contributing_developer_id: self.contributing_developer_id,
            contributing_developer_source: self.contributing_developer_source,
            contributing_developer_source_name: self.contributing_developer_source_name,
            directories_to_exclude: self.directories_to_exclude,
            export_file_type: self.export_file_type,
            export_format: self.export_format,
            files_to_exclude: self.files_to_exclude,
            integration_name: IntegrationName::SoosSast,
            integration_type: IntegrationType::Plugin,
            log_level: self.log_level,
            on_failure: self.on_failure,
            operating_environment: Some(self.operating_environment),
            project_name: self.project_name,
            scan_type: ScanType::Sast,
            script_version: env!("CARGO_PKG_VERSION").to_string(),
            sarif_generator: self.sarif_generator,
            other_options: self.other_options,
        }
    }
}
