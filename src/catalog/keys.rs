//! Credentials each provider needs before the generated app can call it
//!
//! Looked up by exact provider name. Providers missing from the table get a
//! single generic `{category}_api_key` entry.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;
use utoipa::ToSchema;

/// One credential field, as shown on the key entry form
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct KeyRequirement {
    /// Display label
    pub name: String,
    /// Form field identifier
    pub field: String,
    pub description: String,
    pub required: bool,
}

/// Credentials needed for the provider chosen in one category
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProviderKeyRequirements {
    pub category: String,
    pub provider: String,
    pub keys_required: Vec<KeyRequirement>,
}

struct KeySpec {
    name: &'static str,
    field: &'static str,
    description: &'static str,
}

const fn key(name: &'static str, field: &'static str, description: &'static str) -> KeySpec {
    KeySpec {
        name,
        field,
        description,
    }
}

const PROVIDER_KEYS: &[(&str, &[KeySpec])] = &[
    // payment
    ("Stripe", &[
        key("Publishable Key", "stripe_publishable_key", "Client-side key starting with pk_"),
        key("Secret Key", "stripe_secret_key", "Server-side key starting with sk_"),
    ]),
    ("PayPal", &[
        key("Client ID", "paypal_client_id", "REST API app client ID"),
        key("Client Secret", "paypal_client_secret", "REST API app secret"),
    ]),
    ("Square", &[
        key("Application ID", "square_application_id", "Application ID from the developer dashboard"),
        key("Access Token", "square_access_token", "Production or sandbox access token"),
    ]),
    ("Razorpay", &[
        key("Key ID", "razorpay_key_id", "API key ID"),
        key("Key Secret", "razorpay_key_secret", "API key secret"),
    ]),
    // maps
    ("Google Maps", &[
        key("API Key", "google_maps_api_key", "Maps Platform API key"),
    ]),
    ("Mapbox", &[
        key("Access Token", "mapbox_access_token", "Public access token starting with pk."),
    ]),
    ("HERE", &[
        key("API Key", "here_api_key", "HERE platform API key"),
    ]),
    // oauth
    ("Auth0", &[
        key("Domain", "auth0_domain", "Tenant domain, e.g. your-app.auth0.com"),
        key("Client ID", "auth0_client_id", "Application client ID"),
        key("Client Secret", "auth0_client_secret", "Application client secret"),
    ]),
    ("Firebase Authentication", &[
        key("API Key", "firebase_api_key", "Web API key of the Firebase project"),
        key("Project ID", "firebase_project_id", "Firebase project identifier"),
    ]),
    ("Okta", &[
        key("Domain", "okta_domain", "Okta org URL"),
        key("Client ID", "okta_client_id", "OIDC application client ID"),
        key("Client Secret", "okta_client_secret", "OIDC application client secret"),
    ]),
    ("AWS Cognito", &[
        key("User Pool ID", "cognito_user_pool_id", "Cognito user pool identifier"),
        key("App Client ID", "cognito_client_id", "User pool app client ID"),
        key("Region", "cognito_region", "AWS region of the user pool"),
    ]),
    // sms
    ("Twilio", &[
        key("Account SID", "twilio_account_sid", "Account SID from the console"),
        key("Auth Token", "twilio_auth_token", "Account auth token"),
        key("Phone Number", "twilio_phone_number", "Sender number in E.164 format"),
    ]),
    ("Vonage", &[
        key("API Key", "vonage_api_key", "Vonage API key"),
        key("API Secret", "vonage_api_secret", "Vonage API secret"),
    ]),
    ("MessageBird", &[
        key("Access Key", "messagebird_access_key", "Live or test access key"),
    ]),
    ("AWS SNS", &[
        key("Access Key ID", "aws_sns_access_key_id", "IAM access key ID"),
        key("Secret Access Key", "aws_sns_secret_access_key", "IAM secret access key"),
        key("Region", "aws_sns_region", "AWS region for SNS"),
    ]),
    // email
    ("SendGrid", &[
        key("API Key", "sendgrid_api_key", "API key with Mail Send permission"),
    ]),
    ("Mailgun", &[
        key("API Key", "mailgun_api_key", "Private API key"),
        key("Domain", "mailgun_domain", "Verified sending domain"),
    ]),
    ("AWS SES", &[
        key("Access Key ID", "aws_ses_access_key_id", "IAM access key ID"),
        key("Secret Access Key", "aws_ses_secret_access_key", "IAM secret access key"),
        key("Region", "aws_ses_region", "AWS region for SES"),
    ]),
    ("Postmark", &[
        key("Server Token", "postmark_server_token", "Server API token"),
    ]),
    // storage
    ("AWS S3", &[
        key("Access Key ID", "aws_access_key_id", "IAM access key ID"),
        key("Secret Access Key", "aws_secret_access_key", "IAM secret access key"),
        key("Region", "aws_region", "AWS region of the bucket"),
        key("Bucket Name", "aws_s3_bucket_name", "Target S3 bucket"),
    ]),
    ("Google Cloud Storage", &[
        key("Project ID", "gcs_project_id", "GCP project identifier"),
        key("Service Account JSON", "gcs_service_account_json", "Service account key file contents"),
        key("Bucket Name", "gcs_bucket_name", "Target bucket"),
    ]),
    ("Azure Blob Storage", &[
        key("Account Name", "azure_storage_account_name", "Storage account name"),
        key("Account Key", "azure_storage_account_key", "Storage account access key"),
        key("Container Name", "azure_container_name", "Target blob container"),
    ]),
    ("Cloudinary", &[
        key("Cloud Name", "cloudinary_cloud_name", "Cloud name from the dashboard"),
        key("API Key", "cloudinary_api_key", "Cloudinary API key"),
        key("API Secret", "cloudinary_api_secret", "Cloudinary API secret"),
    ]),
    // messaging
    ("Pusher", &[
        key("App ID", "pusher_app_id", "Channels app ID"),
        key("Key", "pusher_key", "Channels app key"),
        key("Secret", "pusher_secret", "Channels app secret"),
        key("Cluster", "pusher_cluster", "Cluster region, e.g. mt1"),
    ]),
    ("Firebase Cloud Messaging", &[
        key("Server Key", "fcm_server_key", "Cloud Messaging server key"),
    ]),
    ("Ably", &[
        key("API Key", "ably_api_key", "Ably API key"),
    ]),
    ("PubNub", &[
        key("Publish Key", "pubnub_publish_key", "Keyset publish key"),
        key("Subscribe Key", "pubnub_subscribe_key", "Keyset subscribe key"),
    ]),
];

static KEY_TABLE: Lazy<HashMap<&'static str, &'static [KeySpec]>> =
    Lazy::new(|| PROVIDER_KEYS.iter().copied().collect());

/// Credentials required for `provider` chosen under `category`
pub fn key_requirements_for(category: &str, provider: &str) -> ProviderKeyRequirements {
    let keys_required = match KEY_TABLE.get(provider) {
        Some(specs) => specs
            .iter()
            .map(|spec| KeyRequirement {
                name: spec.name.to_string(),
                field: spec.field.to_string(),
                description: spec.description.to_string(),
                required: true,
            })
            .collect(),
        None => vec![KeyRequirement {
            name: "API Key".to_string(),
            field: format!("{category}_api_key"),
            description: format!("API key for {provider}"),
            required: true,
        }],
    };

    ProviderKeyRequirements {
        category: category.to_string(),
        provider: provider.to_string(),
        keys_required,
    }
}
