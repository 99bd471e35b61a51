//! Test fixtures and constants.

/// awsconf config with a complete default key and a key missing its profile.
pub const CONFIG: &str = r#"
[aws.default]
role_arn = "arn:aws:iam::111111111111:role/admin"
aws_profile = "sso-dev"

[aws.orphan]
role_arn = "arn:aws:iam::111111111111:role/admin"
aws_profile = "does-not-exist"

[aws.incomplete]
role_arn = "arn:aws:iam::111111111111:role/admin"
"#;

/// Shared AWS config declaring the profile the default key uses.
pub const AWS_CONFIG: &str = r#"
[profile sso-dev]
sso_start_url = https://example.awsapps.com/start
sso_region = eu-central-1
"#;

/// Shared AWS config that cannot be parsed.
pub const AWS_CONFIG_MALFORMED: &str = "[profile sso-dev\nregion = eu-central-1\n";
