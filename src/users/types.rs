use serde::Deserialize;

/// Geographic coordinates carried inside an address.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Postal address of a user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Employer information attached to a raw record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

/// Externally supplied user record, exactly as found in the dataset.
/// Never mutated after load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawUser {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub age: u32,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

/// Record derived by the processing pipeline at startup.
///
/// Created once, then only moved between the active and removed views of
/// the roster. The generated `id` is the identity key for moves; it is not
/// guaranteed unique (see [`super::ident`]).
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedUser {
    pub id: String,
    pub username: String,
    pub address: Address,
    pub age: u32,
    pub company_name: String,
}
