//! Run configuration.

use crate::cli::Global;

/// Region used when neither `--region` nor `AWS_REGION` is set.
pub const DEFAULT_REGION: &str = "us-east-1";
/// Table written when neither `--table` nor `QUESTIONS_TABLE` is set.
pub const DEFAULT_TABLE_NAME: &str = "InterviewQAResponses";
/// Questions file read by the structured loader by default.
pub const DEFAULT_QUESTIONS_FILE: &str = "questions.txt";

/// AWS client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsConfig {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region.
    pub region: String,
}

impl AwsConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

/// Everything a load run needs besides the questions themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub aws: AwsConfig,
    pub table_name: String,
    /// Write to an in-memory store and print the rows instead of calling AWS.
    pub dry_run: bool,
}

impl From<&Global> for LoaderConfig {
    fn from(global: &Global) -> Self {
        Self {
            aws: AwsConfig {
                endpoint_url: global.endpoint_url.clone(),
                region: global.region.clone(),
            },
            table_name: global.table.clone(),
            dry_run: global.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_target_display_aws() {
        let config = AwsConfig {
            endpoint_url: None,
            region: "eu-west-1".to_string(),
        };
        assert_eq!(config.target_display(), "AWS DynamoDB (region: eu-west-1)");
    }

    #[test]
    fn test_target_display_local() {
        let config = AwsConfig {
            endpoint_url: Some("http://localhost:8000".to_string()),
            region: DEFAULT_REGION.to_string(),
        };
        assert_eq!(
            config.target_display(),
            "Local DynamoDB (http://localhost:8000)"
        );
    }

    #[test]
    fn test_loader_config_from_flags() {
        let cli = Cli::try_parse_from([
            "question-loader",
            "--region",
            "us-west-2",
            "--table",
            "Questions",
            "--endpoint-url",
            "http://localhost:8000",
            "--dry-run",
            "flat",
        ])
        .unwrap();

        let config = LoaderConfig::from(&cli.global);
        assert_eq!(config.aws.region, "us-west-2");
        assert_eq!(
            config.aws.endpoint_url.as_deref(),
            Some("http://localhost:8000")
        );
        assert_eq!(config.table_name, "Questions");
        assert!(config.dry_run);
    }
}
