//! Startup transform from raw records to processed users.
//!
//! Runs exactly once. Output order is total: ascending age, ties broken by
//! company name, with the stable sort preserving input order for full ties.

use crate::random::RandomSource;
use crate::users::ident;
use crate::users::types::{ProcessedUser, RawUser};

/// Records below this age are dropped by the pipeline.
pub const MIN_AGE: u32 = 18;

/// Filter, map and sort the raw dataset.
///
/// Keeps records with `age >= MIN_AGE`, assigns each a fresh identifier,
/// flattens `company.name` into `company_name`, then sorts ascending by
/// `(age, company_name)`. Company names compare in code point order; the
/// bundled dataset is ASCII, where that matches a plain locale comparison.
pub fn process(raw: &[RawUser], random: &mut dyn RandomSource) -> Vec<ProcessedUser> {
    let mut users: Vec<ProcessedUser> = raw
        .iter()
        .filter(|user| user.age >= MIN_AGE)
        .map(|user| ProcessedUser {
            id: ident::generate(random),
            username: user.username.clone(),
            address: user.address.clone(),
            age: user.age,
            company_name: user.company.name.clone(),
        })
        .collect();

    users.sort_by(|a, b| {
        a.age
            .cmp(&b.age)
            .then_with(|| a.company_name.cmp(&b.company_name))
    });
    users
}
