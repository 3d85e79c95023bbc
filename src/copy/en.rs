//! English site copy.

use serde_json::{
    Value,
    json,
};

/// The English copy document.
pub(super) fn document() -> Value {
    json!({
        "company": {
            "name": "Good Morning Technology",
            "phrase": "Fresh websites for a new day",
            "email": "hello@goodmorningtechnology.com",
            "phone": "(310) 237-6671",
            // TODO: placeholder address, replace with the real office address
            "address": "123 Main St, Anytown, USA",
            "hours": "9 AM - 6 PM EST",
            "copyright": "© 2025 Good Morning Technology. All rights reserved.",
            "socials": {
                "twitter": "https://twitter.com/goodmorningtech",
                "facebook": "https://facebook.com/goodmorningtech",
                "instagram": "https://instagram.com/goodmorningtech",
                "linkedin": "https://linkedin.com/company/goodmorningtech"
            }
        },
        "site": {
            "title": "Good Morning Technology",
            "subtitle": "Fresh websites for a new day",
            "description": "Good Morning Technology creates bright, fast websites designed to attract customers and grow your business."
        },
        "nav": {
            "login": "Log in",
            "signup": "Sign up",
            "about": "About"
        },
        "forms": {
            "emailLabel": "Email address",
            "passwordLabel": "Password",
            "submit": "Submit"
        },
        "actions": {
            "learnMore": "Learn more",
            "getStarted": "Get started"
        }
    })
}
