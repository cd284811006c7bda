//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use userdeck::random::{RandomSource, SequenceRandom};
use userdeck::ui::app::App;
use userdeck::users::{Address, Company, Geo, ProcessedUser, RawUser};

pub fn address() -> Address {
    Address {
        street: "Kulas Light".to_string(),
        suite: "Apt. 556".to_string(),
        city: "Gwenborough".to_string(),
        zipcode: "92998-3874".to_string(),
        geo: Geo {
            lat: "-37.3159".to_string(),
            lng: "81.1496".to_string(),
        },
    }
}

pub fn raw_user(id: u64, username: &str, age: u32, company: &str) -> RawUser {
    RawUser {
        id,
        name: format!("{} Example", username),
        username: username.to_string(),
        email: format!("{}@example.com", username.to_lowercase()),
        age,
        address: address(),
        phone: "1-770-736-8031".to_string(),
        website: "example.com".to_string(),
        company: Company {
            name: company.to_string(),
            catch_phrase: "Layered static synergy".to_string(),
            bs: "scale seamless channels".to_string(),
        },
    }
}

pub fn processed(id: &str, username: &str, age: u32, company: &str) -> ProcessedUser {
    ProcessedUser {
        id: id.to_string(),
        username: username.to_string(),
        address: address(),
        age,
        company_name: company.to_string(),
    }
}

/// App with scripted draws so counter steps are predictable.
pub fn make_app(draws: Vec<u32>) -> App {
    App::new(Box::new(SequenceRandom::new(draws)))
}
