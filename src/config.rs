
#[cfg(debug_assertions)]
pub fn get_firestore_url() -> &'static str {
    "http://localhost:8080/v1"  // Firestore emulator when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_firestore_url() -> &'static str {
    "https://firestore.googleapis.com/v1"
}

pub fn firestore_project_id() -> &'static str {
    option_env!("FIRESTORE_PROJECT_ID").unwrap_or("booporg-38bf1")
}

pub fn firestore_api_key() -> &'static str {
    option_env!("FIRESTORE_API_KEY").unwrap_or("")
}

pub const CONTACT_COLLECTION: &str = "contactSubmissions";

// Contact form rate limiting
pub const LAST_SUBMISSION_KEY: &str = "boop_last_contact_submission";
pub const SUBMISSION_COOLDOWN_MS: i64 = 60_000;
pub const SUCCESS_DISPLAY_MS: u32 = 3_000;
pub const COOLDOWN_TICK_MS: u32 = 1_000;

pub const CONTACT_EMAIL: &str = "info@booporg.com";
pub const CONTACT_PHONE: &str = "+91 98110 66616";
pub const OFFICE_ADDRESS: &str =
    "Bhutani Alphathum, Tower-B, Office No. 504–505, Sector 90, Noida, Uttar Pradesh – 201304, India";
pub const OFFICE_COORDINATES: (f64, f64) = (28.5244, 77.3827);

pub fn whatsapp_number() -> &'static str {
    option_env!("WHATSAPP_NUMBER").unwrap_or("919811066616")
}
pub const WHATSAPP_GREETING: &str = "Hi! I'd like to start a project with BoopOrg.";
