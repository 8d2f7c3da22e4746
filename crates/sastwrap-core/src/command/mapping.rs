//! Flag mapping for the reporting CLI.
//!
//! Every configuration field is translated to `--<field> <value>` tokens by a
//! single set of rules keyed on the field's value domain. Fields are emitted
//! in the declaration order of [`ReportArgs`], which is the order the
//! downstream CLI documents.

use crate::command::CommandLine;
use crate::config::{ScanConfiguration, UNKNOWN};
use crate::constants;

/// Value domains understood by the mapping rules.
///
/// The rules, in order:
/// 1. `None` values and empty lists emit nothing.
/// 2. Keyword (enum-domain) values skip the `Unknown` sentinel, otherwise
///    emit the value as a plain token; keyword lists join with commas.
/// 3. `Flag(true)` emits the bare flag, `Flag(false)` nothing.
/// 4. Remaining scalars emit the value as one quoted token.
/// 5. Remaining lists quote each element individually and join with commas,
///    as a single token in the reporting CLI's list syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(Option<String>),
    Flag(bool),
    List(Vec<String>),
    Keyword(Option<String>),
    KeywordList(Vec<String>),
}

/// Append `--<name> <value>` tokens for one field, or nothing.
pub fn append_field(cmd: &mut CommandLine, name: &str, value: FieldValue) {
    match value {
        FieldValue::Scalar(None) | FieldValue::Keyword(None) => {}
        FieldValue::Flag(false) => {}
        FieldValue::Flag(true) => {
            cmd.arg(format!("--{name}"));
        }
        FieldValue::Keyword(Some(v)) => {
            if v != UNKNOWN {
                cmd.arg(format!("--{name}"));
                cmd.arg(v);
            }
        }
        FieldValue::KeywordList(values) => {
            if !values.is_empty() {
                cmd.arg(format!("--{name}"));
                cmd.arg(values.join(","));
            }
        }
        FieldValue::Scalar(Some(v)) => {
            cmd.arg(format!("--{name}"));
            cmd.quoted_arg(v);
        }
        FieldValue::List(values) => {
            if !values.is_empty() {
                cmd.arg(format!("--{name}"));
                let joined = values
                    .iter()
                    .map(|v| format!("\"{v}\""))
                    .collect::<Vec<_>>()
                    .join(",");
                cmd.arg(joined);
            }
        }
    }
}

/// Step-specific values layered over the base configuration.
///
/// A defined override always wins; `None` falls back to the base.
#[derive(Debug, Clone, Default)]
pub struct ReportOverrides {
    pub output_directory: Option<String>,
    pub directories_to_exclude: Option<Vec<String>>,
    pub files_to_exclude: Option<Vec<String>>,
    pub source_code_path: Option<String>,
}

/// Flat argument set handed to the reporting CLI.
///
/// Field order here is the emission order of the derived command line.
#[derive(Debug, Clone)]
pub struct ReportArgs {
    pub api_key: String,
    pub api_url: String,
    pub app_version: Option<String>,
    pub branch_name: Option<String>,
    pub branch_uri: Option<String>,
    pub build_uri: Option<String>,
    pub build_version: Option<String>,
    pub client_id: String,
    pub commit_hash: Option<String>,
    pub contributing_developer_id: Option<String>,
    pub contributing_developer_source: String,
    pub contributing_developer_source_name: Option<String>,
    pub directories_to_exclude: Vec<String>,
    pub export_file_type: String,
    pub export_format: String,
    pub files_to_exclude: Vec<String>,
    pub integration_name: String,
    pub integration_type: String,
    pub log_level: String,
    pub on_failure: String,
    pub operating_environment: Option<String>,
    pub output_directory: String,
    pub project_name: String,
    pub scan_type: String,
    pub script_version: String,
    pub source_code_path: String,
}

impl ReportArgs {
    pub fn from_config(config: &ScanConfiguration, overrides: &ReportOverrides) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            app_version: config.app_version.clone(),
            branch_name: config.branch_name.clone(),
            branch_uri: config.branch_uri.clone(),
            build_uri: config.build_uri.clone(),
            build_version: config.build_version.clone(),
            client_id: config.client_id.clone(),
            commit_hash: config.commit_hash.clone(),
            contributing_developer_id: config.contributing_developer_id.clone(),
            contributing_developer_source: config.contributing_developer_source.as_arg().into(),
            contributing_developer_source_name: config.contributing_developer_source_name.clone(),
            directories_to_exclude: overrides
                .directories_to_exclude
                .clone()
                .unwrap_or_else(|| config.directories_to_exclude.clone()),
            export_file_type: config.export_file_type.as_arg().into(),
            export_format: config.export_format.as_arg().into(),
            files_to_exclude: overrides
                .files_to_exclude
                .clone()
                .unwrap_or_else(|| config.files_to_exclude.clone()),
            integration_name: config.integration_name.as_arg().into(),
            integration_type: config.integration_type.as_arg().into(),
            log_level: config.log_level.as_arg().into(),
            on_failure: config.on_failure.as_arg().into(),
            operating_environment: config.operating_environment.clone(),
            output_directory: overrides
                .output_directory
                .clone()
                .unwrap_or_else(|| constants::OUTPUT_DIRECTORY.to_string()),
            project_name: config.project_name.clone(),
            scan_type: config.scan_type.as_arg().into(),
            script_version: config.script_version.clone(),
            source_code_path: overrides
                .source_code_path
                .clone()
                .unwrap_or_else(|| constants::WORKING_DIRECTORY.to_string()),
        }
    }

    /// `(flag name, value)` pairs in emission order.
    ///
    /// `scanType` is intentionally not keyword-mapped: the downstream CLI
    /// treats it as a free string, so it arrives quoted like any scalar.
    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("apiKey", FieldValue::Scalar(Some(self.api_key.clone()))),
            ("apiURL", FieldValue::Scalar(Some(self.api_url.clone()))),
            ("appVersion", FieldValue::Scalar(self.app_version.clone())),
            ("branchName", FieldValue::Scalar(self.branch_name.clone())),
            ("branchURI", FieldValue::Scalar(self.branch_uri.clone())),
            ("buildURI", FieldValue::Scalar(self.build_uri.clone())),
            (
                "buildVersion",
                FieldValue::Scalar(self.build_version.clone()),
            ),
            ("clientId", FieldValue::Scalar(Some(self.client_id.clone()))),
            ("commitHash", FieldValue::Scalar(self.commit_hash.clone())),
            (
                "contributingDeveloperId",
                FieldValue::Scalar(self.contributing_developer_id.clone()),
            ),
            (
                "contributingDeveloperSource",
                FieldValue::Keyword(Some(self.contributing_developer_source.clone())),
            ),
            (
                "contributingDeveloperSourceName",
                FieldValue::Scalar(self.contributing_developer_source_name.clone()),
            ),
            (
                "directoriesToExclude",
                FieldValue::List(self.directories_to_exclude.clone()),
            ),
            (
                "exportFileType",
                FieldValue::Keyword(Some(self.export_file_type.clone())),
            ),
            (
                "exportFormat",
                FieldValue::Keyword(Some(self.export_format.clone())),
            ),
            (
                "filesToExclude",
                FieldValue::List(self.files_to_exclude.clone()),
            ),
            (
                "integrationName",
                FieldValue::Keyword(Some(self.integration_name.clone())),
            ),
            (
                "integrationType",
                FieldValue::Keyword(Some(self.integration_type.clone())),
            ),
            (
                "logLevel",
                FieldValue::Keyword(Some(self.log_level.clone())),
            ),
            (
                "onFailure",
                FieldValue::Keyword(Some(self.on_failure.clone())),
            ),
            (
                "operatingEnvironment",
                FieldValue::Scalar(self.operating_environment.clone()),
            ),
            (
                "outputDirectory",
                FieldValue::Scalar(Some(self.output_directory.clone())),
            ),
            (
                "projectName",
                FieldValue::Scalar(Some(self.project_name.clone())),
            ),
            ("scanType", FieldValue::Scalar(Some(self.scan_type.clone()))),
            (
                "scriptVersion",
                FieldValue::Scalar(Some(self.script_version.clone())),
            ),
            (
                "sourceCodePath",
                FieldValue::Scalar(Some(self.source_code_path.clone())),
            ),
        ]
    }

    /// Full reporting-CLI invocation: `node <entrypoint> <mapped flags>`.
    pub fn to_command(&self) -> CommandLine {
        let mut cmd = CommandLine::new(constants::REPORT_CLI_RUNTIME);
        cmd.arg(constants::REPORT_CLI_ENTRYPOINT);
        for (name, value) in self.fields() {
            append_field(&mut cmd, name, value);
        }
        cmd
    }
}
