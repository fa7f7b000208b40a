//! Session value and its persisted JSON form.
//!
//! DESIGN
//! ======
//! In memory a session is a tagged value, so the signed-in flag cannot
//! disagree with the identity. On disk the record keeps the
//! `{ "user": ..., "isAuthenticated": ... }` layout. A stored record whose
//! two fields disagree fails to decode and is handled like any other
//! corrupt record.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    /// Display name shown in the user menu.
    pub name: String,
    pub email: String,
}

impl Identity {
    /// Up to two uppercase initials from the display name, falling back to
    /// the username.
    pub fn initials(&self) -> String {
        let from_name: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if !from_name.is_empty() {
            return from_name;
        }
        self.username
            .chars()
            .next()
            .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
    }
}

/// Current sign-in status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(Identity),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    pub fn user(&self) -> Option<&Identity> {
        match self {
            Self::LoggedIn(identity) => Some(identity),
            Self::LoggedOut => None,
        }
    }

    pub fn into_user(self) -> Option<Identity> {
        match self {
            Self::LoggedIn(identity) => Some(identity),
            Self::LoggedOut => None,
        }
    }
}

/// Wire layout of the persisted record.
#[derive(Serialize, Deserialize)]
struct SessionRecord {
    user: Option<Identity>,
    #[serde(rename = "isAuthenticated")]
    is_authenticated: bool,
}

impl Serialize for Session {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = SessionRecord { user: self.user().cloned(), is_authenticated: self.is_authenticated() };
        record.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Session {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = SessionRecord::deserialize(deserializer)?;
        match (record.is_authenticated, record.user) {
            (true, Some(identity)) => Ok(Self::LoggedIn(identity)),
            (false, None) => Ok(Self::LoggedOut),
            (true, None) => Err(D::Error::custom("isAuthenticated is true but user is null")),
            (false, Some(_)) => Err(D::Error::custom("isAuthenticated is false but user is present")),
        }
    }
}
