//! Third-party API catalog and per-category provider recommendations

use serde::Serialize;
use utoipa::ToSchema;

/// A category of external service the generated app may need
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct ThirdPartyApi {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub purpose: &'static str,
}

pub const THIRD_PARTY_APIS: [ThirdPartyApi; 7] = [
    ThirdPartyApi {
        name: "Payment Processing",
        category: "payment",
        description: "Accept payments, manage subscriptions and issue refunds",
        purpose: "Handle secure checkout, recurring billing and invoicing",
    },
    ThirdPartyApi {
        name: "Maps & Location",
        category: "maps",
        description: "Location services, geocoding and map rendering",
        purpose: "Provide location search, directions and map visualization",
    },
    ThirdPartyApi {
        name: "OAuth & Social Login",
        category: "oauth",
        description: "Authentication and authorization platform",
        purpose: "Let users sign in with existing accounts and manage sessions",
    },
    ThirdPartyApi {
        name: "SMS Messaging",
        category: "sms",
        description: "Text message delivery and phone verification",
        purpose: "Send SMS notifications and one-time verification codes",
    },
    ThirdPartyApi {
        name: "Email Delivery",
        category: "email",
        description: "Transactional and marketing email delivery",
        purpose: "Send account, notification and marketing emails",
    },
    ThirdPartyApi {
        name: "File Storage",
        category: "storage",
        description: "Object storage for uploads and media",
        purpose: "Store user uploads, images and documents",
    },
    ThirdPartyApi {
        name: "Real-time Messaging",
        category: "messaging",
        description: "Push notifications and real-time channels",
        purpose: "Deliver in-app events, chat and push notifications",
    },
];

/// A vendor that can fill a category
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct ProviderOption {
    pub name: &'static str,
    pub description: &'static str,
    pub popularity: &'static str,
    pub pricing: &'static str,
}

struct CategoryProviders {
    category: &'static str,
    providers: &'static [ProviderOption],
}

const fn provider(
    name: &'static str,
    description: &'static str,
    popularity: &'static str,
    pricing: &'static str,
) -> ProviderOption {
    ProviderOption {
        name,
        description,
        popularity,
        pricing,
    }
}

const RECOMMENDATIONS: &[CategoryProviders] = &[
    CategoryProviders {
        category: "payment",
        providers: &[
            provider("Stripe", "Developer-friendly payments with global coverage", "Most Popular", "2.9% + 30¢ per transaction"),
            provider("PayPal", "Widely trusted wallet and card checkout", "Popular", "3.49% + 49¢ per transaction"),
            provider("Square", "Unified online and in-person payments", "Growing", "2.9% + 30¢ per transaction"),
            provider("Razorpay", "Payments suite focused on India", "Regional", "2% per transaction"),
        ],
    },
    CategoryProviders {
        category: "maps",
        providers: &[
            provider("Google Maps", "Comprehensive maps, places and routing", "Most Popular", "$200 free monthly credit"),
            provider("Mapbox", "Customizable vector maps and navigation", "Popular", "50,000 free map loads/month"),
            provider("HERE", "Enterprise-grade location platform", "Enterprise", "Free tier, then usage-based"),
            provider("OpenStreetMap", "Open community-maintained map data", "Open Source", "Free"),
        ],
    },
    CategoryProviders {
        category: "oauth",
        providers: &[
            provider("Auth0", "Flexible identity platform with social login", "Most Popular", "Free up to 7,500 users"),
            provider("Firebase Authentication", "Drop-in auth for web and mobile apps", "Popular", "Free up to 50,000 MAU"),
            provider("Okta", "Workforce and customer identity", "Enterprise", "Custom pricing"),
            provider("AWS Cognito", "User pools and federated identities on AWS", "Growing", "Free up to 50,000 MAU"),
        ],
    },
    CategoryProviders {
        category: "sms",
        providers: &[
            provider("Twilio", "Programmable SMS with global reach", "Most Popular", "$0.0079 per message"),
            provider("Vonage", "SMS and verification APIs", "Popular", "$0.0068 per message"),
            provider("MessageBird", "Omnichannel messaging platform", "Growing", "$0.008 per message"),
            provider("AWS SNS", "Pub/sub with SMS delivery", "Enterprise", "$0.00645 per message"),
        ],
    },
    CategoryProviders {
        category: "email",
        providers: &[
            provider("SendGrid", "Scalable transactional and marketing email", "Most Popular", "Free up to 100 emails/day"),
            provider("Mailgun", "Email API built for developers", "Popular", "Free up to 5,000 emails/month"),
            provider("AWS SES", "Cost-effective bulk email on AWS", "Enterprise", "$0.10 per 1,000 emails"),
            provider("Postmark", "Fast transactional email delivery", "Growing", "$15 per 10,000 emails"),
        ],
    },
    CategoryProviders {
        category: "storage",
        providers: &[
            provider("AWS S3", "Durable object storage at any scale", "Most Popular", "$0.023 per GB/month"),
            provider("Google Cloud Storage", "Unified object storage on GCP", "Popular", "$0.020 per GB/month"),
            provider("Azure Blob Storage", "Massively scalable storage on Azure", "Enterprise", "$0.018 per GB/month"),
            provider("Cloudinary", "Media storage with on-the-fly transforms", "Growing", "Free tier with 25 credits"),
        ],
    },
    CategoryProviders {
        category: "messaging",
        providers: &[
            provider("Pusher", "Hosted real-time channels", "Most Popular", "Free up to 200,000 messages/day"),
            provider("Firebase Cloud Messaging", "Cross-platform push notifications", "Popular", "Free"),
            provider("Ably", "Edge messaging with guaranteed delivery", "Growing", "Free up to 6M messages/month"),
            provider("PubNub", "Real-time APIs for chat and presence", "Enterprise", "Free up to 200 MAU"),
        ],
    },
];

/// Providers recommended for a category, matched case-insensitively
pub fn providers_for_category(category: &str) -> Option<&'static [ProviderOption]> {
    RECOMMENDATIONS
        .iter()
        .find(|entry| entry.category.eq_ignore_ascii_case(category))
        .map(|entry| entry.providers)
}
