
/// Number added to the stored signup count before it is shown on the page.
pub const WAITLIST_BASE_COUNT: u64 = 134;

/// Firestore collection holding one document per waitlist signup.
pub const WAITLIST_COLLECTION: &str = "waitlist";

/// Tag written with every signup made from this build.
pub const WAITLIST_SOURCE: &str = "hero_section";

const PRODUCTION_FIRESTORE_URL: &str = "https://firestore.googleapis.com";

pub fn get_firestore_project_id() -> &'static str {
    option_env!("FIRESTORE_PROJECT_ID").unwrap_or("taggle-waitlist")
}

pub fn get_firestore_api_key() -> Option<&'static str> {
    option_env!("FIRESTORE_API_KEY").filter(|key| !key.is_empty())
}

#[cfg(debug_assertions)]
pub fn get_firestore_url() -> &'static str {
    // Local builds use the emulator unless told otherwise at compile time
    if option_env!("USE_PROD_FIRESTORE").is_some() {
        PRODUCTION_FIRESTORE_URL
    } else {
        option_env!("FIRESTORE_EMULATOR_URL").unwrap_or("http://localhost:8080")
    }
}

#[cfg(not(debug_assertions))]
pub fn get_firestore_url() -> &'static str {
    PRODUCTION_FIRESTORE_URL
}
