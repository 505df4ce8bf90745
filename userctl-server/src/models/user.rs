//! User record and create payload

use serde::{Deserialize, Deserializer, Serialize};

/// A row of the `users` table.
///
/// Also the update payload: `{"id", "name", "email"}`. Absent or `null`
/// values decode to their zero value, so `{}` is an update of id 0
/// (matches no row). Capitalized keys are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(alias = "ID", alias = "Id", deserialize_with = "null_as_default")]
    pub id: i32,
    #[serde(alias = "Name", alias = "NAME", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "Email", alias = "EMAIL", deserialize_with = "null_as_default")]
    pub email: String,
}

/// Create payload. Any `id` in the body is ignored; the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct NewUser {
    #[serde(alias = "Name", alias = "NAME", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "Email", alias = "EMAIL", deserialize_with = "null_as_default")]
    pub email: String,
}

/// `null` leaves a field at its zero value instead of failing the decode.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Attach the store-assigned identifier.
    pub fn with_id(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_in_field_order() {
        let user = NewUser::new("Ana", "ana@x.com").with_id(1);
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            r#"{"id":1,"name":"Ana","email":"ana@x.com"}"#
        );
    }

    #[test]
    fn new_user_ignores_id() {
        let new: NewUser =
            serde_json::from_str(r#"{"id": 99, "name": "Ana", "email": "ana@x.com"}"#).unwrap();
        assert_eq!(new, NewUser::new("Ana", "ana@x.com"));
    }

    #[test]
    fn missing_fields_decode_to_empty() {
        let new: NewUser = serde_json::from_str("{}").unwrap();
        assert_eq!(new, NewUser::default());

        let user: User = serde_json::from_str(r#"{"name": "Bo"}"#).unwrap();
        assert_eq!(user.id, 0);
        assert_eq!(user.email, "");
    }

    #[test]
    fn null_fields_decode_to_empty() {
        let new: NewUser = serde_json::from_str(r#"{"name": null, "email": "x"}"#).unwrap();
        assert_eq!(new, NewUser::new("", "x"));

        let user: User = serde_json::from_str(r#"{"id": null, "name": "Bo"}"#).unwrap();
        assert_eq!(user.id, 0);
    }

    #[test]
    fn capitalized_keys_are_accepted() {
        let new: NewUser =
            serde_json::from_str(r#"{"Name": "Ana", "Email": "ana@x.com"}"#).unwrap();
        assert_eq!(new, NewUser::new("Ana", "ana@x.com"));

        let user: User = serde_json::from_str(r#"{"ID": 4, "name": "Bo"}"#).unwrap();
        assert_eq!(user.id, 4);
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        assert!(serde_json::from_str::<NewUser>(r#"{"name": 123}"#).is_err());
        assert!(serde_json::from_str::<User>(r#"{"id": "one"}"#).is_err());
    }
}
